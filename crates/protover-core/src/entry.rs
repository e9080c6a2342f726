//! Protocol entries: a name plus its canonical set of version ranges.

use std::fmt;

use crate::error::ParseError;
use crate::range::VersionRange;

/// Whether `name` is usable as a protocol name.
///
/// Names are opaque tokens: anything non-empty without `=`, `,`, `-` or
/// whitespace. They do not have to be a recognized protocol type.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c == '=' || c == ',' || c == '-' || c.is_whitespace())
}

/// A named subprotocol and the versions of it that are supported.
///
/// `ranges` is always sorted by low bound, and no two ranges overlap or
/// are adjacent. Every mutation goes through [`ProtocolEntry::merge_into`],
/// which keeps that true.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ProtocolEntry {
    name: String,
    ranges: Vec<VersionRange>,
}

impl ProtocolEntry {
    /// Create an empty entry. Fails if `name` is not a valid protocol name.
    pub fn new(name: impl Into<String>) -> Result<Self, ParseError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(ParseError::MalformedInput(format!(
                "invalid protocol name {:?}",
                name
            )));
        }
        Ok(Self {
            name,
            ranges: Vec::new(),
        })
    }

    /// Create an entry from any collection of ranges, in any order.
    pub fn with_ranges(
        name: impl Into<String>,
        ranges: impl IntoIterator<Item = VersionRange>,
    ) -> Result<Self, ParseError> {
        let mut entry = Self::new(name)?;
        for range in ranges {
            entry.merge_into(range);
        }
        Ok(entry)
    }

    /// An entry with the same name and no ranges.
    pub fn to_empty(&self) -> ProtocolEntry {
        ProtocolEntry {
            name: self.name.clone(),
            ranges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical ranges, ascending.
    pub fn ranges(&self) -> &[VersionRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Insert `range`, merging with every range it overlaps or touches.
    ///
    /// The resulting ranges depend only on the set of versions inserted,
    /// never on insertion order.
    pub fn merge_into(&mut self, range: VersionRange) {
        // First range that could touch `range`: everything before it ends
        // at least two below `range.low()`.
        let start = self
            .ranges
            .partition_point(|r| (r.high() as u64) + 1 < range.low() as u64);

        let mut merged = range;
        let mut end = start;
        while end < self.ranges.len() && self.ranges[end].touches(&merged) {
            merged = merged.union(&self.ranges[end]);
            end += 1;
        }

        self.ranges.splice(start..end, std::iter::once(merged));
    }

    /// Merge every range of `other` into this entry.
    pub fn merge_entry(&mut self, other: &ProtocolEntry) {
        for range in &other.ranges {
            self.merge_into(*range);
        }
    }

    /// Whether `version` is covered by any range.
    pub fn supports(&self, version: u32) -> bool {
        let idx = self.ranges.partition_point(|r| r.high() < version);
        self.ranges
            .get(idx)
            .map(|r| r.contains(version))
            .unwrap_or(false)
    }

    /// The versions of this entry that `other` does not cover, under this
    /// entry's name. `other` must be sorted ascending and non-overlapping,
    /// as the ranges of any entry are.
    pub fn subtract(&self, other: &[VersionRange]) -> ProtocolEntry {
        let mut out = self.to_empty();

        for range in &self.ranges {
            // Work in u64 so stepping past u32::MAX is representable.
            let mut cursor = range.low() as u64;
            let high = range.high() as u64;

            for cover in other {
                let (c_low, c_high) = (cover.low() as u64, cover.high() as u64);
                if c_high < cursor || c_low > high {
                    continue;
                }
                if c_low > cursor {
                    out.ranges
                        .push(VersionRange::span(cursor as u32, (c_low - 1) as u32));
                }
                cursor = cursor.max(c_high + 1);
                if cursor > high {
                    break;
                }
            }

            if cursor <= high {
                out.ranges
                    .push(VersionRange::span(cursor as u32, high as u32));
            }
        }

        out
    }

    /// Total number of versions covered.
    pub fn version_count(&self) -> u64 {
        self.ranges.iter().map(VersionRange::len).sum()
    }
}

impl fmt::Debug for ProtocolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProtocolEntry({})", self)
    }
}

impl fmt::Display for ProtocolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.name)?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(ranges: &[(u32, u32)]) -> ProtocolEntry {
        ProtocolEntry::with_ranges(
            "Link",
            ranges.iter().map(|&(l, h)| VersionRange::span(l, h)),
        )
        .unwrap()
    }

    #[test]
    fn test_adjacent_ranges_merge() {
        let e = entry(&[(1, 2), (3, 4)]);
        assert_eq!(e.ranges(), &[VersionRange::span(1, 4)]);
    }

    #[test]
    fn test_gapped_ranges_stay_separate() {
        let e = entry(&[(1, 2), (4, 5)]);
        assert_eq!(
            e.ranges(),
            &[VersionRange::span(1, 2), VersionRange::span(4, 5)]
        );
    }

    #[test]
    fn test_merge_bridges_several_ranges() {
        let e = entry(&[(1, 1), (5, 5), (9, 9), (2, 8)]);
        assert_eq!(e.ranges(), &[VersionRange::span(1, 9)]);
    }

    #[test]
    fn test_merge_out_of_order() {
        let e = entry(&[(10, 12), (1, 1), (5, 6)]);
        assert_eq!(e.to_string(), "Link=1,5-6,10-12");
    }

    #[test]
    fn test_merge_contained_range() {
        let e = entry(&[(1, 10), (3, 4)]);
        assert_eq!(e.ranges(), &[VersionRange::span(1, 10)]);
    }

    #[test]
    fn test_merge_at_upper_bound() {
        let e = entry(&[(u32::MAX, u32::MAX), (0, 0), (u32::MAX - 1, u32::MAX - 1)]);
        assert_eq!(
            e.ranges(),
            &[VersionRange::single(0), VersionRange::span(u32::MAX - 1, u32::MAX)]
        );
    }

    #[test]
    fn test_supports() {
        let e = entry(&[(1, 3), (7, 7)]);
        assert!(!e.supports(0));
        assert!(e.supports(1));
        assert!(e.supports(3));
        assert!(!e.supports(4));
        assert!(e.supports(7));
        assert!(!e.supports(8));
    }

    #[test]
    fn test_subtract() {
        let e = entry(&[(1, 10)]);
        let missing = e.subtract(&[VersionRange::span(2, 3), VersionRange::span(6, 7)]);
        assert_eq!(missing.to_string(), "Link=1,4-5,8-10");

        let none = e.subtract(&[VersionRange::span(0, 20)]);
        assert!(none.is_empty());

        let all = e.subtract(&[]);
        assert_eq!(all, e);
    }

    #[test]
    fn test_subtract_at_upper_bound() {
        let e = entry(&[(u32::MAX - 2, u32::MAX)]);
        let missing = e.subtract(&[VersionRange::single(u32::MAX)]);
        assert_eq!(
            missing.ranges(),
            &[VersionRange::span(u32::MAX - 2, u32::MAX - 1)]
        );
    }

    #[test]
    fn test_invalid_names() {
        assert!(ProtocolEntry::new("").is_err());
        assert!(ProtocolEntry::new("Li-nk").is_err());
        assert!(ProtocolEntry::new("Li nk").is_err());
        assert!(ProtocolEntry::new("Li,nk").is_err());
        assert!(ProtocolEntry::new("Li=nk").is_err());
        assert!(ProtocolEntry::new("Wombat").is_ok());
    }

    proptest! {
        #[test]
        fn test_merge_order_independent(
            mut ranges in prop::collection::vec((0u32..200, 0u32..8), 0..12)
        ) {
            let spans: Vec<(u32, u32)> = ranges.iter().map(|&(l, w)| (l, l + w)).collect();
            let forward = entry(&spans);
            ranges.reverse();
            let spans_rev: Vec<(u32, u32)> = ranges.iter().map(|&(l, w)| (l, l + w)).collect();
            let backward = entry(&spans_rev);
            prop_assert_eq!(&forward, &backward);

            for pair in forward.ranges().windows(2) {
                prop_assert!((pair[0].high() as u64) + 1 < pair[1].low() as u64);
            }
        }

        #[test]
        fn test_supports_matches_inserted(
            spans in prop::collection::vec((0u32..100, 0u32..5), 1..8),
            probe in 0u32..110,
        ) {
            let spans: Vec<(u32, u32)> = spans.iter().map(|&(l, w)| (l, l + w)).collect();
            let e = entry(&spans);
            let expected = spans.iter().any(|&(l, h)| l <= probe && probe <= h);
            prop_assert_eq!(e.supports(probe), expected);
        }
    }
}
