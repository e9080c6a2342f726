//! Test fixtures for common scenarios.

use protover::{Protover, ProtoverConfig, Result, VoteReport};

/// A local instance plus the ballots of the voters it hears from.
pub struct TestFixture {
    pub protover: Protover,
    pub ballots: Vec<String>,
}

impl TestFixture {
    /// A fixture over the native support table with no ballots.
    pub fn new() -> Self {
        Self {
            protover: Protover::native(),
            ballots: Vec::new(),
        }
    }

    /// A fixture whose local table is `supported`.
    pub fn with_supported(supported: &str) -> Result<Self> {
        let config = ProtoverConfig {
            supported: supported.to_string(),
        };
        Ok(Self {
            protover: Protover::new(&config)?,
            ballots: Vec::new(),
        })
    }

    /// Add a voter's ballot.
    pub fn cast(&mut self, ballot: &str) -> &mut Self {
        self.ballots.push(ballot.to_string());
        self
    }

    /// Add a voter advertising exactly what the local instance supports.
    pub fn cast_local(&mut self) -> &mut Self {
        let own = self.protover.supported_protocols().to_string();
        self.ballots.push(own);
        self
    }

    /// Consensus string over the ballots cast so far.
    pub fn vote(&self, threshold: i32) -> String {
        self.protover.compute_vote(&self.ballots, threshold)
    }

    /// Consensus over the ballots cast so far, with accounting.
    pub fn tally(&self, threshold: i32) -> VoteReport {
        self.protover.tally(&self.ballots, threshold)
    }

    /// Whether the local instance supports everything the consensus
    /// at `threshold` lists.
    pub fn supports_consensus(&self, threshold: i32) -> bool {
        self.protover.all_supported(&self.vote(threshold)).0
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Ballots from `count` voters, each one release behind the next.
///
/// Voter `i` advertises `Link=1-(i+1) Relay=1-2`, so at threshold `t` the
/// consensus is `Link=1-(count-t+1) Relay=1-2`.
pub fn staggered_ballots(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("Link=1-{} Relay=1-2", i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_native() {
        let mut fixture = TestFixture::new();
        fixture.cast_local().cast_local().cast("Link=1");
        assert_eq!(fixture.vote(2), fixture.protover.supported_protocols());
        assert!(fixture.supports_consensus(2));
        assert!(fixture.supports_consensus(3));
    }

    #[test]
    fn test_fixture_with_supported() {
        let mut fixture = TestFixture::with_supported("Link=1-2").unwrap();
        fixture.cast("Link=1-3").cast("Link=1-3");
        assert_eq!(fixture.vote(2), "Link=1-3");
        assert!(!fixture.supports_consensus(2));
    }

    #[test]
    fn test_fixture_rejects_noncanonical_table() {
        assert!(TestFixture::with_supported("Link=2,1").is_err());
    }

    #[test]
    fn test_fixture_tally_counts_malformed() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let mut fixture = TestFixture::new();
        fixture.cast("Link=1").cast("Link=").cast("Link=1");
        let report = fixture.tally(2);
        assert_eq!(report.ballots, 3);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.result.encode(), "Link=1");
    }

    #[test]
    fn test_staggered_ballots() {
        let ballots = staggered_ballots(5);
        assert_eq!(ballots.len(), 5);

        let mut fixture = TestFixture::new();
        for b in &ballots {
            fixture.cast(b);
        }
        assert_eq!(fixture.vote(1), "Link=1-5 Relay=1-2");
        assert_eq!(fixture.vote(3), "Link=1-3 Relay=1-2");
        assert_eq!(fixture.vote(5), "Link=1 Relay=1-2");
        assert_eq!(fixture.vote(6), "");
    }
}
