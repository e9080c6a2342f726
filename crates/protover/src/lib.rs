//! # Protover
//!
//! Versioned subprotocol advertisement and consensus for a network whose
//! participants do not share a software release.
//!
//! ## Overview
//!
//! Each participant advertises the subprotocol versions it speaks as a
//! canonical protocol list such as `"Cons=1-2 Link=1-4 LinkAuth=1,3"`. This
//! crate provides:
//!
//! - **Local queries**: does this build support a given protocol version?
//! - **Peer queries**: does an advertised list include a version? Which of
//!   its versions does this build lack?
//! - **Voting**: threshold consensus over many participants' lists
//! - **Legacy inference**: implied protocols for releases too old to
//!   advertise their own
//!
//! Lists received from peers are untrusted. A list that does not parse
//! supports nothing; it never causes an error.
//!
//! ## Usage
//!
//! ```rust
//! use protover::{compute_vote, Proto, Protover};
//!
//! let protover = Protover::native();
//! assert!(protover.is_supported_here(Proto::Link, 4));
//!
//! let (ok, missing) = protover.all_supported("Link=1-5 Wombat=2");
//! assert!(!ok);
//! assert_eq!(missing, "Link=5 Wombat=2");
//!
//! let vote = compute_vote(&["Link=3-4", "Link=3"], 2);
//! assert_eq!(vote, "Link=3");
//! ```
//!
//! ## Re-exports
//!
//! - `protover::core` - Ranges, entries, sets, parsing, canonical encoding

pub mod config;
pub mod defaults;
pub mod error;
pub mod global;
pub mod legacy;
pub mod local;
pub mod proto;
pub mod query;
pub mod support;
pub mod vote;

// Re-export component crate
pub use protover_core as core;

pub use config::ProtoverConfig;
pub use error::{ProtoverError, Result};
pub use global::{
    all_supported, free_all, is_supported_here, list_supports, native_table,
    supported_protocols_string,
};
pub use legacy::{infer_for_legacy_version, FIRST_VERSION_TO_ADVERTISE_PROTOCOLS};
pub use local::Protover;
pub use proto::Proto;
pub use support::SupportTable;
pub use vote::{compute_vote, tally, VoteReport};

pub use protover_core::{ParseError, ProtocolEntry, ProtocolSet, VersionRange};
