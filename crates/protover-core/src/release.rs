//! Dotted release version identifiers and their ordering.
//!
//! Accepted form: an optional `Tor ` prefix, then
//! `MAJOR.MINOR.MICRO[.PATCH][-TAG]`, then optionally a space and free-form
//! extra info (e.g. ` (git-abc123)`), which is ignored.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ReleaseError;

/// Release status, ordered from least to most mature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReleaseStatus {
    Alpha(String),
    Beta(String),
    Rc(String),
    /// A tag that is none of the above, e.g. `dev`.
    Other(String),
    /// No tag.
    Release,
}

impl ReleaseStatus {
    fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None => ReleaseStatus::Release,
            Some(t) if t.starts_with("alpha") => ReleaseStatus::Alpha(t.to_owned()),
            Some(t) if t.starts_with("beta") => ReleaseStatus::Beta(t.to_owned()),
            Some(t) if t.starts_with("rc") => ReleaseStatus::Rc(t.to_owned()),
            Some(t) => ReleaseStatus::Other(t.to_owned()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            ReleaseStatus::Alpha(_) => 0,
            ReleaseStatus::Beta(_) => 1,
            ReleaseStatus::Rc(_) => 2,
            ReleaseStatus::Other(_) => 3,
            ReleaseStatus::Release => 4,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            ReleaseStatus::Alpha(t)
            | ReleaseStatus::Beta(t)
            | ReleaseStatus::Rc(t)
            | ReleaseStatus::Other(t) => Some(t),
            ReleaseStatus::Release => None,
        }
    }
}

impl Ord for ReleaseStatus {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.tag().cmp(&other.tag()))
    }
}

impl PartialOrd for ReleaseStatus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A parsed release version such as `0.2.9.1-alpha`.
///
/// Field order matters: the derived ordering compares numeric components
/// first, then status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReleaseVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    /// Missing patch level is treated as 0.
    pub patch: u32,
    pub status: ReleaseStatus,
}

impl ReleaseVersion {
    /// Parse a release identifier.
    pub fn parse(s: &str) -> Result<Self, ReleaseError> {
        let s = s.trim();
        let s = s.strip_prefix("Tor ").unwrap_or(s).trim_start();
        let core = s.split_whitespace().next().ok_or(ReleaseError::Empty)?;

        let (numbers, tag) = match core.split_once('-') {
            Some((numbers, tag)) => {
                if tag.is_empty() {
                    return Err(ReleaseError::Malformed(core.to_owned()));
                }
                (numbers, Some(tag))
            }
            None => (core, None),
        };

        let parts = numbers
            .split('.')
            .map(|p| parse_component(p, core))
            .collect::<Result<Vec<u32>, _>>()?;

        let (major, minor, micro, patch) = match parts.as_slice() {
            [major, minor, micro] => (*major, *minor, *micro, 0),
            [major, minor, micro, patch] => (*major, *minor, *micro, *patch),
            _ => return Err(ReleaseError::Malformed(core.to_owned())),
        };

        Ok(Self {
            major,
            minor,
            micro,
            patch,
            status: ReleaseStatus::from_tag(tag),
        })
    }

    /// Whether this release is the same as or newer than `other`.
    pub fn as_new_as(&self, other: &ReleaseVersion) -> bool {
        self >= other
    }
}

fn parse_component(part: &str, whole: &str) -> Result<u32, ReleaseError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReleaseError::Malformed(whole.to_owned()));
    }
    part.parse()
        .map_err(|_| ReleaseError::Malformed(whole.to_owned()))
}

impl FromStr for ReleaseVersion {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.micro, self.patch
        )?;
        if let Some(tag) = self.status.tag() {
            write!(f, "-{}", tag)?;
        }
        Ok(())
    }
}
