//! Inferred protocol support for releases that predate self-advertisement.

use protover_core::ReleaseVersion;

/// The first release that advertises its own protocol list. Releases at or
/// after it need no inference.
pub const FIRST_VERSION_TO_ADVERTISE_PROTOCOLS: &str = "0.2.9.3-alpha";

/// A release boundary and the protocols every release from it onward was
/// known to support.
#[derive(Debug, Clone, Copy)]
pub struct Breakpoint {
    pub since: &'static str,
    pub protocols: &'static str,
}

/// Ascending by `since`.
pub const LEGACY_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint {
        since: "0.2.4.19",
        protocols: "Cons=1 Desc=1 DirCache=1 HSDir=1 HSIntro=3 HSRend=1 \
                    Link=1-4 LinkAuth=1 Microdesc=1 Relay=1-2",
    },
    Breakpoint {
        since: "0.2.7.5",
        protocols: "Cons=1-2 Desc=1-2 DirCache=1 HSDir=1 HSIntro=3 HSRend=1 \
                    Link=1-4 LinkAuth=1 Microdesc=1-2 Relay=1-2",
    },
    Breakpoint {
        since: "0.2.9.1-alpha",
        protocols: "Cons=1-2 Desc=1-2 DirCache=1 HSDir=1 HSIntro=3 HSRend=1-2 \
                    Link=1-4 LinkAuth=1 Microdesc=1-2 Relay=1-2",
    },
    Breakpoint {
        since: FIRST_VERSION_TO_ADVERTISE_PROTOCOLS,
        protocols: "",
    },
];

/// Protocol list implied by release `version`.
///
/// Empty when the release is older than the first breakpoint, new enough to
/// advertise for itself, or not a parseable release identifier.
pub fn infer_for_legacy_version(version: &str) -> String {
    let release = match ReleaseVersion::parse(version) {
        Ok(release) => release,
        Err(e) => {
            tracing::debug!("Cannot infer protocols for release {:?}: {}", version, e);
            return String::new();
        }
    };

    LEGACY_BREAKPOINTS
        .iter()
        .rev()
        .find(|bp| {
            ReleaseVersion::parse(bp.since)
                .map(|since| release.as_new_as(&since))
                .unwrap_or(false)
        })
        .map(|bp| bp.protocols.to_owned())
        .unwrap_or_default()
}
