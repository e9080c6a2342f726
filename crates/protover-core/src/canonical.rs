//! Canonical encoding of protocol sets.
//!
//! The canonical string is what participants compare and sign, so it must
//! be byte-identical for any two sets describing the same capabilities:
//! - Entries sorted ascending by name (byte order)
//! - Ranges within an entry ascending, merged, never adjacent
//! - A single-version range written as `v`, any other as `low-high`
//! - Ranges joined with `,`, entries joined with a single space
//!
//! The empty set encodes as the empty string.

use crate::entry::ProtocolEntry;
use crate::error::ParseError;
use crate::parse::parse_protocol_list;
use crate::set::ProtocolSet;

/// Encode a set to its canonical string.
pub fn encode_protocol_set(set: &ProtocolSet) -> String {
    let mut out = String::new();
    for entry in set.entries() {
        if !out.is_empty() {
            out.push(' ');
        }
        encode_entry_into(&mut out, entry);
    }
    out
}

/// Append `Name=spec` for one entry.
pub fn encode_entry_into(out: &mut String, entry: &ProtocolEntry) {
    use std::fmt::Write;
    // Writing to a String cannot fail.
    let _ = write!(out, "{}", entry);
}

/// Parse `s` and re-encode it canonically.
pub fn canonicalize(s: &str) -> Result<String, ParseError> {
    parse_protocol_list(s).map(|set| encode_protocol_set(&set))
}

/// Whether `s` is already in canonical form.
pub fn is_canonical(s: &str) -> bool {
    matches!(canonicalize(s), Ok(c) if c == s)
}
