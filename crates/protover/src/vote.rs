//! Threshold voting over protocol lists.
//!
//! Each voter submits one protocol list (a ballot). A (name, version) pair
//! is in the consensus when at least `threshold` ballots cover it.
//!
//! Properties the tally keeps:
//! - Names need not be recognized; unknown protocols are voted on like any
//!   other, so the network can adopt new subprotocols before every
//!   implementation knows them.
//! - A ballot that does not parse counts as an empty ballot. It cannot
//!   abort the vote or change how the other ballots are weighted.
//! - The result depends only on the multiset of ballots and the threshold.
//!
//! Counting sweeps over range boundaries, so cost follows the number of
//! ranges on the ballots, not how many versions they span.

use std::collections::BTreeMap;

use protover_core::{parse_protocol_list, ProtocolEntry, ProtocolSet, VersionRange};

/// Outcome of a vote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteReport {
    /// Pairs that met the threshold.
    pub result: ProtocolSet,
    /// Number of ballots submitted.
    pub ballots: usize,
    /// Number of ballots discarded because they did not parse.
    pub rejected: usize,
}

/// Per-name boundary events: `(position, delta)`. Positions are widened
/// to u64 so the end of a range reaching u32::MAX is representable.
struct Tally {
    /// Empty entry carrying the protocol name.
    entry: ProtocolEntry,
    events: Vec<(u64, i64)>,
}

/// Tally `ballots` at `threshold`.
///
/// A threshold of zero or less includes every pair that appears on any
/// ballot. A threshold above the number of ballots yields an empty result.
pub fn tally<S: AsRef<str>>(ballots: &[S], threshold: i32) -> VoteReport {
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    let mut rejected = 0;

    for (index, ballot) in ballots.iter().enumerate() {
        let set = match parse_protocol_list(ballot.as_ref()) {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!("Discarding malformed ballot {}: {}", index, e);
                rejected += 1;
                continue;
            }
        };

        // A parsed set has at most one entry per name with disjoint ranges,
        // so each ballot adds at most one to any version's count.
        for entry in set.entries() {
            let tally = tallies
                .entry(entry.name().to_owned())
                .or_insert_with(|| Tally {
                    entry: entry.to_empty(),
                    events: Vec::new(),
                });
            for range in entry.ranges() {
                tally.events.push((range.low() as u64, 1));
                tally.events.push((range.high() as u64 + 1, -1));
            }
        }
    }

    let needed = i64::from(threshold.max(1));
    let result: ProtocolSet = tallies
        .into_values()
        .map(|tally| sweep(tally, needed))
        .collect();

    tracing::trace!(
        "Vote over {} ballots ({} rejected) at threshold {}: {:?}",
        ballots.len(),
        rejected,
        threshold,
        result
    );

    VoteReport {
        result,
        ballots: ballots.len(),
        rejected,
    }
}

/// Walk boundary events in order and keep the spans where the running
/// count is at least `needed`.
fn sweep(mut tally: Tally, needed: i64) -> ProtocolEntry {
    tally.events.sort_unstable();

    let mut entry = tally.entry;
    let mut count: i64 = 0;
    let mut open: Option<u64> = None;
    let mut i = 0;

    while i < tally.events.len() {
        let position = tally.events[i].0;
        while i < tally.events.len() && tally.events[i].0 == position {
            count += tally.events[i].1;
            i += 1;
        }

        match (open, count >= needed) {
            (None, true) => open = Some(position),
            (Some(start), false) => {
                entry.merge_into(VersionRange::span(start as u32, (position - 1) as u32));
                open = None;
            }
            _ => {}
        }
    }

    entry
}

/// Compute the consensus protocol list for `ballots` at `threshold`, in
/// canonical form.
pub fn compute_vote<S: AsRef<str>>(ballots: &[S], threshold: i32) -> String {
    tally(ballots, threshold).result.encode()
}
