//! Recognized protocol types.
//!
//! Protocol names on the wire are opaque strings. This table is the only
//! place that gives some of them a meaning, and it is consulted only where
//! native support has to be checked.

use std::fmt;
use std::str::FromStr;

use crate::error::{ProtoverError, Result};

/// Subprotocols this implementation knows about.
///
/// Declaration order is the ordinal order shared with companion
/// implementations that address protocols by integer. Do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Proto {
    Link,
    LinkAuth,
    Relay,
    DirCache,
    HSDir,
    HSIntro,
    HSRend,
    Desc,
    Microdesc,
    Cons,
}

impl Proto {
    /// Every recognized protocol, in ordinal order.
    pub const ALL: [Proto; 10] = [
        Proto::Link,
        Proto::LinkAuth,
        Proto::Relay,
        Proto::DirCache,
        Proto::HSDir,
        Proto::HSIntro,
        Proto::HSRend,
        Proto::Desc,
        Proto::Microdesc,
        Proto::Cons,
    ];

    /// Canonical name as it appears in protocol lists.
    pub const fn name(&self) -> &'static str {
        match self {
            Proto::Link => "Link",
            Proto::LinkAuth => "LinkAuth",
            Proto::Relay => "Relay",
            Proto::DirCache => "DirCache",
            Proto::HSDir => "HSDir",
            Proto::HSIntro => "HSIntro",
            Proto::HSRend => "HSRend",
            Proto::Desc => "Desc",
            Proto::Microdesc => "Microdesc",
            Proto::Cons => "Cons",
        }
    }

    /// Look up a recognized protocol by its canonical name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Proto> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    pub const fn ordinal(&self) -> u32 {
        match self {
            Proto::Link => 0,
            Proto::LinkAuth => 1,
            Proto::Relay => 2,
            Proto::DirCache => 3,
            Proto::HSDir => 4,
            Proto::HSIntro => 5,
            Proto::HSRend => 6,
            Proto::Desc => 7,
            Proto::Microdesc => 8,
            Proto::Cons => 9,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Result<Proto> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(ProtoverError::UnknownProtocol(ordinal))
    }
}

impl fmt::Display for Proto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Proto {
    type Err = ProtoverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| ProtoverError::UnrecognizedName(s.to_owned()))
    }
}
