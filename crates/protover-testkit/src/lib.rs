//! # Protover Testkit
//!
//! Testing utilities for protover.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with their canonical forms, for cross-implementation verification
//! - **Generators**: Proptest strategies for lists, entries, and ballots
//! - **Fixtures**: A local instance plus a panel of voters
//!
//! ## Golden Vectors
//!
//! ```rust
//! use protover_testkit::vectors::verify_all_vectors;
//!
//! for (name, passed, detail) in verify_all_vectors() {
//!     assert!(passed, "{}: {}", name, detail);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use protover_testkit::generators::VoteParams;
//!
//! proptest! {
//!     #[test]
//!     fn vote_is_deterministic(params: VoteParams) {
//!         let a = protover::compute_vote(&params.ballots, params.threshold);
//!         let b = protover::compute_vote(&params.ballots, params.threshold);
//!         prop_assert_eq!(a, b);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use protover_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! fixture.cast("Link=1-3").cast("Link=2-4");
//! assert_eq!(fixture.vote(2), "Link=2-3");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{staggered_ballots, TestFixture};
pub use generators::VoteParams;
pub use vectors::{all_vectors, verify_all_vectors, verify_vector, GoldenVector};
