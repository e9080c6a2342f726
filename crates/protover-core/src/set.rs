//! Protocol sets: the unit of exchange between participants.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::canonical::encode_protocol_set;
use crate::entry::ProtocolEntry;
use crate::error::ParseError;
use crate::parse::parse_protocol_list;
use crate::range::VersionRange;

/// A set of protocol entries keyed by name, iterated in ascending name
/// order (byte order, case-sensitive).
///
/// Entries are never empty: merging an empty entry is a no-op, and
/// operations that would leave an entry empty drop it.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ProtocolSet {
    entries: BTreeMap<String, ProtocolEntry>,
}

impl ProtocolSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct protocol names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&ProtocolEntry> {
        self.entries.get(name)
    }

    /// Entries in canonical (ascending name) order.
    pub fn entries(&self) -> impl Iterator<Item = &ProtocolEntry> {
        self.entries.values()
    }

    /// Add `range` under `name`, merging into any existing entry.
    pub fn insert_range(&mut self, name: &str, range: VersionRange) -> Result<(), ParseError> {
        match self.entries.get_mut(name) {
            Some(entry) => entry.merge_into(range),
            None => {
                let entry = ProtocolEntry::with_ranges(name, [range])?;
                self.entries.insert(name.to_owned(), entry);
            }
        }
        Ok(())
    }

    /// Merge a whole entry into the set.
    pub fn insert_entry(&mut self, entry: ProtocolEntry) {
        if entry.is_empty() {
            return;
        }
        match self.entries.get_mut(entry.name()) {
            Some(existing) => existing.merge_entry(&entry),
            None => {
                self.entries.insert(entry.name().to_owned(), entry);
            }
        }
    }

    /// Merge every entry of `other` into this set.
    pub fn merge(&mut self, other: &ProtocolSet) {
        for entry in other.entries() {
            self.insert_entry(entry.clone());
        }
    }

    /// Whether the entry named `name` covers `version`.
    pub fn supports(&self, name: &str, version: u32) -> bool {
        self.entries
            .get(name)
            .map(|entry| entry.supports(version))
            .unwrap_or(false)
    }

    /// The canonical string for this set.
    pub fn encode(&self) -> String {
        encode_protocol_set(self)
    }

    /// Blake3 hash of the canonical string.
    ///
    /// Two sets describing the same capabilities always have the same
    /// digest, whatever strings they were parsed from.
    pub fn digest(&self) -> [u8; 32] {
        *blake3::hash(self.encode().as_bytes()).as_bytes()
    }

    /// Hex form of [`ProtocolSet::digest`].
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }
}

impl fmt::Debug for ProtocolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProtocolSet({:?})", self.encode())
    }
}

impl fmt::Display for ProtocolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for ProtocolSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_protocol_list(s)
    }
}

impl FromIterator<ProtocolEntry> for ProtocolSet {
    fn from_iter<I: IntoIterator<Item = ProtocolEntry>>(iter: I) -> Self {
        let mut set = ProtocolSet::new();
        for entry in iter {
            set.insert_entry(entry);
        }
        set
    }
}

// Serialized as the canonical string, so embedded sets stay comparable.
impl Serialize for ProtocolSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for ProtocolSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_protocol_list(&s).map_err(serde::de::Error::custom)
    }
}
