//! Parser for exchangeable protocol lists.
//!
//! Grammar:
//!
//! ```text
//! list  ::= entry (" " entry)*
//! entry ::= name "=" spec
//! spec  ::= token ("," token)*
//! token ::= INTEGER | INTEGER "-" INTEGER
//! ```
//!
//! Input is untrusted. Any malformed token anywhere rejects the whole list;
//! there is never a partial result.

use crate::entry::{is_valid_name, ProtocolEntry};
use crate::error::ParseError;
use crate::range::VersionRange;
use crate::set::ProtocolSet;

/// Parse a protocol list into a [`ProtocolSet`].
///
/// Entries are separated by runs of whitespace; an empty or all-whitespace
/// string is the empty set. Repeated names are merged into one entry.
pub fn parse_protocol_list(s: &str) -> Result<ProtocolSet, ParseError> {
    let mut set = ProtocolSet::new();
    for chunk in s.split_whitespace() {
        set.insert_entry(parse_protocol_entry(chunk)?);
    }
    Ok(set)
}

/// Like [`parse_protocol_list`], but an empty list is an error.
pub fn parse_nonempty(s: &str) -> Result<ProtocolSet, ParseError> {
    let set = parse_protocol_list(s)?;
    if set.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(set)
}

/// Parse a single `Name=spec` entry.
pub fn parse_protocol_entry(s: &str) -> Result<ProtocolEntry, ParseError> {
    let (name, spec) = s
        .split_once('=')
        .ok_or_else(|| ParseError::MalformedInput(format!("missing '=' in {:?}", s)))?;

    if spec.contains('=') {
        return Err(ParseError::MalformedInput(format!(
            "more than one '=' in {:?}",
            s
        )));
    }
    if !is_valid_name(name) {
        return Err(ParseError::MalformedInput(format!(
            "invalid protocol name {:?}",
            name
        )));
    }
    if spec.is_empty() {
        return Err(ParseError::MalformedInput(format!(
            "no versions listed for {:?}",
            name
        )));
    }

    let mut entry = ProtocolEntry::new(name)?;
    for token in spec.split(',') {
        entry.merge_into(parse_range_token(token)?);
    }
    Ok(entry)
}

/// Parse `INTEGER` or `INTEGER-INTEGER`.
fn parse_range_token(token: &str) -> Result<VersionRange, ParseError> {
    match token.split_once('-') {
        Some((low, high)) => {
            let low = parse_version(low)?;
            let high = parse_version(high)?;
            VersionRange::new(low, high)
        }
        None => parse_version(token).map(VersionRange::single),
    }
}

/// Parse a non-negative decimal version number.
///
/// Only ASCII digits are accepted: `u32::from_str` alone would also take a
/// leading `+`.
fn parse_version(s: &str) -> Result<u32, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::MalformedInput(format!(
            "invalid version number {:?}",
            s
        )));
    }
    s.parse::<u32>()
        .map_err(|_| ParseError::IntegerOutOfRange(s.to_owned()))
}
