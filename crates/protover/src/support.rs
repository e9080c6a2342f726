//! The local support table: which versions of each recognized protocol this
//! implementation speaks.

use std::collections::BTreeMap;

use protover_core::{canonicalize, parse_protocol_list, ProtocolEntry, ProtocolSet, VersionRange};

use crate::config::ProtoverConfig;
use crate::error::{ProtoverError, Result};
use crate::proto::Proto;

/// Versions natively implemented by this build.
const NATIVE_PROTOCOLS: &[(Proto, &[VersionRange])] = &[
    (Proto::Cons, &[VersionRange::span(1, 2)]),
    (Proto::Desc, &[VersionRange::span(1, 2)]),
    (Proto::DirCache, &[VersionRange::span(1, 2)]),
    (Proto::HSDir, &[VersionRange::span(1, 2)]),
    (Proto::HSIntro, &[VersionRange::span(3, 4)]),
    (Proto::HSRend, &[VersionRange::span(1, 2)]),
    (Proto::Link, &[VersionRange::span(1, 4)]),
    (Proto::LinkAuth, &[VersionRange::single(1), VersionRange::single(3)]),
    (Proto::Microdesc, &[VersionRange::span(1, 2)]),
    (Proto::Relay, &[VersionRange::span(1, 2)]),
];

/// Map from recognized protocol to the versions supported locally.
///
/// Immutable once built. Queries never modify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportTable {
    entries: BTreeMap<Proto, ProtocolEntry>,
}

impl SupportTable {
    /// The table compiled into this build.
    pub fn native() -> Self {
        let mut entries = BTreeMap::new();
        for (proto, ranges) in NATIVE_PROTOCOLS {
            let entry = ProtocolEntry::with_ranges(proto.name(), ranges.iter().copied())
                .expect("recognized protocol names are valid entry names");
            entries.insert(*proto, entry);
        }
        Self { entries }
    }

    /// Build a table from configuration.
    ///
    /// The configured string must parse, be canonical, and name only
    /// recognized protocols. Anything else is a startup error.
    pub fn from_config(config: &ProtoverConfig) -> Result<Self> {
        let canonical = canonicalize(&config.supported)?;
        if canonical != config.supported {
            return Err(ProtoverError::NonCanonical {
                given: config.supported.clone(),
                canonical,
            });
        }

        let set = parse_protocol_list(&config.supported)?;
        Self::from_protocol_set(&set)
    }

    /// Build a table from an already-parsed set. Every name must be a
    /// recognized protocol.
    pub fn from_protocol_set(set: &ProtocolSet) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for entry in set.entries() {
            let proto = entry.name().parse::<Proto>()?;
            entries.insert(proto, entry.clone());
        }
        Ok(Self { entries })
    }

    /// Versions supported for `proto`, if any.
    pub fn get(&self, proto: Proto) -> Option<&ProtocolEntry> {
        self.entries.get(&proto)
    }

    /// Versions supported for the protocol called `name`. Unrecognized
    /// names have no local support.
    pub fn get_by_name(&self, name: &str) -> Option<&ProtocolEntry> {
        Proto::from_name(name).and_then(|proto| self.get(proto))
    }

    pub fn supports(&self, proto: Proto, version: u32) -> bool {
        self.get(proto)
            .map(|entry| entry.supports(version))
            .unwrap_or(false)
    }

    /// The whole table as a protocol set.
    pub fn to_protocol_set(&self) -> ProtocolSet {
        self.entries.values().cloned().collect()
    }
}

impl Default for SupportTable {
    fn default() -> Self {
        Self::native()
    }
}
