use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{FpviewError, FpviewResult};

/// Represent a genomic range `[start, end]`.
/// 1-based, inclusive on both ends
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenomicInterval {
    pub start: u32,
    pub end: u32,
}

impl GenomicInterval {
    pub const fn new(start: u32, end: u32) -> Self {
        GenomicInterval { start, end }
    }

    ///
    /// An interval is well formed when `start <= end`.
    ///
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    ///
    /// Number of positions covered: `end - start + 1`, as `u64` so that
    /// `(0, u32::MAX)` does not overflow. Malformed intervals have length 0.
    ///
    #[inline]
    pub fn len(&self) -> u64 {
        if self.is_valid() {
            u64::from(self.end) - u64::from(self.start) + 1
        } else {
            0
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if two inclusive intervals share at least one position
    #[inline]
    pub fn overlaps(&self, other: &GenomicInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    #[inline]
    pub fn contains(&self, position: u32) -> bool {
        self.start <= position && position <= self.end
    }

    /// Compute the intersection of two intervals, if any
    pub fn intersection(&self, other: &GenomicInterval) -> Option<GenomicInterval> {
        if !self.overlaps(other) {
            return None;
        }
        Some(GenomicInterval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    ///
    /// Check that this interval can be used as a render window.
    ///
    pub fn validate_region(&self) -> FpviewResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(FpviewError::InvalidRegionError {
                start: self.start,
                end: self.end,
            })
        }
    }
}

impl Ord for GenomicInterval {
    #[inline]
    fn cmp(&self, other: &GenomicInterval) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ordering => ordering,
        }
    }
}

impl PartialOrd for GenomicInterval {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for GenomicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<(u32, u32)> for GenomicInterval {
    fn from(value: (u32, u32)) -> Self {
        GenomicInterval::new(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case((100, 200), 101)]
    #[case((5, 5), 1)]
    #[case((500, 100), 0)]
    #[case((0, u32::MAX), 1 << 32)]
    #[case((1, u32::MAX), u32::MAX as u64)]
    fn test_len(#[case] bounds: (u32, u32), #[case] expected: u64) {
        assert_eq!(GenomicInterval::from(bounds).len(), expected);
    }

    #[rstest]
    #[case((1, 10), (10, 20), true)]
    #[case((1, 10), (11, 20), false)]
    #[case((5, 8), (1, 20), true)]
    fn test_overlaps(#[case] a: (u32, u32), #[case] b: (u32, u32), #[case] expected: bool) {
        let a = GenomicInterval::from(a);
        let b = GenomicInterval::from(b);
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }

    #[rstest]
    fn test_intersection() {
        let a = GenomicInterval::new(100, 200);
        let b = GenomicInterval::new(150, 300);
        assert_eq!(a.intersection(&b), Some(GenomicInterval::new(150, 200)));
        assert_eq!(a.intersection(&GenomicInterval::new(201, 300)), None);
    }

    #[rstest]
    fn test_validate_region_rejects_reversed_bounds() {
        let region = GenomicInterval::new(500, 100);
        assert_eq!(
            region.validate_region(),
            Err(FpviewError::InvalidRegionError {
                start: 500,
                end: 100
            })
        );
    }

    #[rstest]
    fn test_ordering_by_start_then_end() {
        let mut intervals = vec![
            GenomicInterval::new(10, 30),
            GenomicInterval::new(5, 50),
            GenomicInterval::new(10, 20),
        ];
        intervals.sort();
        assert_eq!(
            intervals,
            vec![
                GenomicInterval::new(5, 50),
                GenomicInterval::new(10, 20),
                GenomicInterval::new(10, 30),
            ]
        );
    }
}
