//! # Protover Core
//!
//! Pure primitives for subprotocol versioning: version ranges, protocol
//! entries, protocol sets, and their canonical string form.
//!
//! This crate contains no I/O and no global state. It is pure computation
//! over untrusted strings.
//!
//! ## Key Types
//!
//! - [`VersionRange`] - Inclusive range of versions
//! - [`ProtocolEntry`] - A protocol name and its merged, sorted ranges
//! - [`ProtocolSet`] - Entries keyed by name; the unit of exchange
//! - [`ReleaseVersion`] - Dotted release identifier with a total order
//!
//! ## Canonicalization
//!
//! Every set has exactly one string form. See [`canonical`] module.
//!
//! ```rust
//! use protover_core::{canonicalize, ProtocolSet};
//!
//! assert_eq!(canonicalize("Relay=2,1 Link=1-3,4").unwrap(), "Link=1-4 Relay=1-2");
//!
//! let set: ProtocolSet = "Link=1-4".parse().unwrap();
//! assert!(set.supports("Link", 3));
//! ```

pub mod canonical;
pub mod entry;
pub mod error;
pub mod parse;
pub mod range;
pub mod release;
pub mod set;

pub use canonical::{canonicalize, encode_protocol_set, is_canonical};
pub use entry::{is_valid_name, ProtocolEntry};
pub use error::{ParseError, ReleaseError};
pub use parse::{parse_nonempty, parse_protocol_entry, parse_protocol_list};
pub use range::VersionRange;
pub use release::{ReleaseStatus, ReleaseVersion};
pub use set::ProtocolSet;
