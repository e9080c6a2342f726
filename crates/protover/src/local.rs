//! The Protover handle: queries and voting over one local support table.

use std::sync::OnceLock;

use protover_core::ProtocolSet;

use crate::config::ProtoverConfig;
use crate::error::Result;
use crate::proto::Proto;
use crate::query;
use crate::support::SupportTable;
use crate::vote::{self, VoteReport};

/// A local support table plus its lazily computed canonical string.
///
/// Cheap to share by reference across threads: every method takes `&self`
/// and the only interior state is set at most once.
#[derive(Debug)]
pub struct Protover {
    table: SupportTable,
    supported: OnceLock<String>,
}

impl Protover {
    /// Create an instance from configuration.
    ///
    /// Fails if the configured table is malformed. Callers should treat
    /// that as fatal at startup.
    pub fn new(config: &ProtoverConfig) -> Result<Self> {
        Ok(Self::with_table(SupportTable::from_config(config)?))
    }

    /// Create an instance over the table compiled into this build.
    pub fn native() -> Self {
        Self::with_table(SupportTable::native())
    }

    pub fn with_table(table: SupportTable) -> Self {
        Self {
            table,
            supported: OnceLock::new(),
        }
    }

    pub fn table(&self) -> &SupportTable {
        &self.table
    }

    /// Whether this instance supports `version` of `proto`.
    pub fn is_supported_here(&self, proto: Proto, version: u32) -> bool {
        query::is_supported_here(&self.table, proto, version)
    }

    /// Canonical string of everything this instance supports. Computed on
    /// first call.
    pub fn supported_protocols(&self) -> &str {
        self.supported
            .get_or_init(|| self.table.to_protocol_set().encode())
    }

    /// Whether the peer list `list` advertises `version` of `proto`.
    pub fn list_supports(&self, list: &str, proto: Proto, version: u32) -> bool {
        query::list_supports(list, proto, version)
    }

    /// Check every version in `list` against this instance's table.
    pub fn all_supported(&self, list: &str) -> (bool, String) {
        query::all_supported(&self.table, list)
    }

    /// The part of `requested` this instance does not support.
    pub fn missing_protocols(&self, requested: &ProtocolSet) -> ProtocolSet {
        query::missing_protocols(&self.table, requested)
    }

    /// Consensus over `ballots` at `threshold`.
    pub fn compute_vote<S: AsRef<str>>(&self, ballots: &[S], threshold: i32) -> String {
        vote::compute_vote(ballots, threshold)
    }

    /// Consensus over `ballots` with ballot accounting.
    pub fn tally<S: AsRef<str>>(&self, ballots: &[S], threshold: i32) -> VoteReport {
        vote::tally(ballots, threshold)
    }
}

impl Default for Protover {
    fn default() -> Self {
        Self::native()
    }
}
