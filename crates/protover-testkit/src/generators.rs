//! Proptest generators for property-based testing.

use proptest::prelude::*;

use protover_core::{ProtocolEntry, ProtocolSet, VersionRange};

/// Names drawn from recognized protocols plus a few unknown ones.
pub fn protocol_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Link".to_string()),
        Just("LinkAuth".to_string()),
        Just("Relay".to_string()),
        Just("Cons".to_string()),
        Just("HSIntro".to_string()),
        "[A-Z][a-z]{0,7}",
    ]
}

/// A small version range. Kept near zero so ranges collide often.
pub fn version_range() -> impl Strategy<Value = VersionRange> {
    (0u32..32, 0u32..6).prop_map(|(low, width)| VersionRange::span(low, low + width))
}

/// A version range anywhere in the version space, including the top.
pub fn wide_version_range() -> impl Strategy<Value = VersionRange> {
    prop_oneof![
        version_range(),
        (any::<u32>(), any::<u32>()).prop_map(|(a, b)| VersionRange::span(a.min(b), a.max(b))),
        Just(VersionRange::single(u32::MAX)),
    ]
}

/// A non-empty entry.
pub fn protocol_entry() -> impl Strategy<Value = ProtocolEntry> {
    (protocol_name(), prop::collection::vec(version_range(), 1..5)).prop_map(|(name, ranges)| {
        ProtocolEntry::with_ranges(name, ranges).expect("generated names are valid")
    })
}

/// A canonical protocol set.
pub fn protocol_set() -> impl Strategy<Value = ProtocolSet> {
    prop::collection::vec(protocol_entry(), 0..6).prop_map(|entries| entries.into_iter().collect())
}

/// A valid but usually non-canonical protocol list: entries in any order,
/// names repeated, tokens overlapping, singletons written as `v-v`.
pub fn protocol_list_text() -> impl Strategy<Value = String> {
    let token = (0u32..32, 0u32..6, 0u8..3).prop_map(|(low, width, style)| match style {
        0 => low.to_string(),
        1 => format!("{}-{}", low, low + width),
        _ => format!("{}-{}", low, low),
    });
    let entry = (protocol_name(), prop::collection::vec(token, 1..5))
        .prop_map(|(name, tokens)| format!("{}={}", name, tokens.join(",")));
    prop::collection::vec(entry, 0..6).prop_map(|entries| entries.join(" "))
}

/// A string that fails to parse.
pub fn malformed_list_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Link".to_string()),
        Just("=1".to_string()),
        Just("Link=".to_string()),
        Just("Link=3-1".to_string()),
        Just("Link=1,,2".to_string()),
        Just("Link=4294967296".to_string()),
        Just("not-a-valid-entry".to_string()),
        protocol_list_text().prop_map(|s| format!("{} Bad=x", s)),
    ]
}

/// A ballot: valid most of the time, sometimes malformed.
pub fn ballot() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => protocol_list_text(),
        1 => malformed_list_text(),
    ]
}

/// Parameters for a vote.
#[derive(Debug, Clone)]
pub struct VoteParams {
    pub ballots: Vec<String>,
    pub threshold: i32,
}

impl Arbitrary for VoteParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (prop::collection::vec(ballot(), 0..8), -1i32..10)
            .prop_map(|(ballots, threshold)| VoteParams { ballots, threshold })
            .boxed()
    }
}
