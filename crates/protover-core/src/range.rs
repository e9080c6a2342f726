//! Inclusive version ranges.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParseError;

/// An inclusive range of protocol versions, `[low, high]`.
///
/// The constructor enforces `low <= high`, so every value of this type
/// describes at least one version.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct VersionRange {
    low: u32,
    high: u32,
}

impl VersionRange {
    /// Create a range covering `[low, high]`.
    pub fn new(low: u32, high: u32) -> Result<Self, ParseError> {
        if low > high {
            return Err(ParseError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Create a range from compile-time bounds.
    ///
    /// Panics if `low > high`; in a `const` item that is a build error.
    pub const fn span(low: u32, high: u32) -> Self {
        assert!(low <= high, "version range low bound exceeds high bound");
        Self { low, high }
    }

    /// A range covering exactly one version.
    pub const fn single(version: u32) -> Self {
        Self {
            low: version,
            high: version,
        }
    }

    pub const fn low(&self) -> u32 {
        self.low
    }

    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Whether `version` lies inside this range.
    pub const fn contains(&self, version: u32) -> bool {
        self.low <= version && version <= self.high
    }

    /// Whether this range covers exactly one version.
    pub const fn is_single(&self) -> bool {
        self.low == self.high
    }

    /// Number of versions covered. Widened so `[0, u32::MAX]` fits.
    pub const fn len(&self) -> u64 {
        self.high as u64 - self.low as u64 + 1
    }

    /// Whether the two ranges share a version or sit right next to each
    /// other, i.e. whether their union is a single range.
    pub fn touches(&self, other: &VersionRange) -> bool {
        let (first, second) = if self.low <= other.low {
            (self, other)
        } else {
            (other, self)
        };
        // Widen so a high bound of u32::MAX cannot overflow.
        second.low as u64 <= first.high as u64 + 1
    }

    /// The smallest range covering both. Only meaningful when they touch.
    pub fn union(&self, other: &VersionRange) -> VersionRange {
        VersionRange {
            low: self.low.min(other.low),
            high: self.high.max(other.high),
        }
    }
}

impl fmt::Debug for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VersionRange({}-{})", self.low, self.high)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

impl TryFrom<(u32, u32)> for VersionRange {
    type Error = ParseError;

    fn try_from((low, high): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<VersionRange> for (u32, u32) {
    fn from(range: VersionRange) -> Self {
        (range.low, range.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert_eq!(
            VersionRange::new(3, 1),
            Err(ParseError::InvalidRange { low: 3, high: 1 })
        );
        assert!(VersionRange::new(1, 1).is_ok());
    }

    #[test]
    fn test_contains() {
        let range = VersionRange::span(2, 4);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
    }

    #[test]
    fn test_touches_overlap_and_adjacency() {
        let a = VersionRange::span(1, 2);
        assert!(a.touches(&VersionRange::span(3, 4)));
        assert!(a.touches(&VersionRange::span(2, 9)));
        assert!(!a.touches(&VersionRange::span(4, 5)));
        assert!(VersionRange::span(4, 5).touches(&a) == a.touches(&VersionRange::span(4, 5)));
    }

    #[test]
    fn test_touches_at_upper_bound() {
        let top = VersionRange::span(u32::MAX - 1, u32::MAX);
        assert!(top.touches(&VersionRange::single(u32::MAX)));
        assert!(!top.touches(&VersionRange::single(0)));
    }

    #[test]
    fn test_len_full_width() {
        assert_eq!(VersionRange::span(0, u32::MAX).len(), 1u64 << 32);
        assert_eq!(VersionRange::single(7).len(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(VersionRange::single(5).to_string(), "5");
        assert_eq!(VersionRange::span(1, 3).to_string(), "1-3");
    }

    #[test]
    fn test_serde_rejects_inverted() {
        let ok: VersionRange = serde_json::from_str("[1,4]").unwrap();
        assert_eq!(ok, VersionRange::span(1, 4));
        assert!(serde_json::from_str::<VersionRange>("[4,1]").is_err());
    }
}
