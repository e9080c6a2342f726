//! Error types for protocol list parsing.

use thiserror::Error;

/// Errors produced when parsing an exchangeable protocol list.
///
/// Only direct callers of the parser ever see these. Every boundary that
/// handles untrusted input treats a parse failure as "no support".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("protocol list is empty")]
    EmptyInput,

    #[error("malformed protocol entry: {0}")]
    MalformedInput(String),

    #[error("version number out of range: {0}")]
    IntegerOutOfRange(String),

    #[error("invalid version range: {low} is greater than {high}")]
    InvalidRange { low: u32, high: u32 },
}

/// Errors produced when parsing a release version identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReleaseError {
    #[error("empty release version")]
    Empty,

    #[error("malformed release version: {0}")]
    Malformed(String),
}
