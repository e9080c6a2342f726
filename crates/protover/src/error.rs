//! Error types for the protover API.

use protover_core::ParseError;
use thiserror::Error;

/// Errors raised while configuring or addressing the local support table.
///
/// None of these come from untrusted peer input: lists and ballots received
/// from the network degrade to "no support" instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtoverError {
    /// Supported-protocols configuration did not parse.
    #[error("invalid supported protocols: {0}")]
    Parse(#[from] ParseError),

    /// Ordinal outside the recognized protocol table.
    #[error("unknown protocol ordinal: {0}")]
    UnknownProtocol(u32),

    /// Name is not a recognized protocol type.
    #[error("unrecognized protocol name: {0}")]
    UnrecognizedName(String),

    /// Supported-protocols configuration is not in canonical form
    /// (overlapping or adjacent ranges, repeated names, unsorted entries).
    #[error("supported protocols not canonical: got {given:?}, expected {canonical:?}")]
    NonCanonical { given: String, canonical: String },
}

/// Result type for protover operations.
pub type Result<T> = std::result::Result<T, ProtoverError>;
