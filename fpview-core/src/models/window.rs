use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::FpviewResult;
use crate::models::GenomicInterval;

///
/// The genomic window of one render call: a chromosome name and an
/// inclusive 1-based interval on it.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct Window {
    pub chrom: String,
    pub interval: GenomicInterval,
}

impl Window {
    pub fn new(chrom: &str, start: u32, end: u32) -> FpviewResult<Self> {
        let interval = GenomicInterval::new(start, end);
        interval.validate_region()?;
        Ok(Window {
            chrom: chrom.to_string(),
            interval,
        })
    }

    pub fn start(&self) -> u32 {
        self.interval.start
    }

    pub fn end(&self) -> u32 {
        self.interval.end
    }

    pub fn len(&self) -> u64 {
        self.interval.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interval.is_empty()
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chrom, self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FpviewError;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_window_display() {
        let window = Window::new("Chr1", 3631, 5899).unwrap();
        assert_eq!(window.to_string(), "Chr1:3631-5899");
        assert_eq!(window.len(), 2269);
    }

    #[rstest]
    fn test_window_rejects_reversed_bounds() {
        let result = Window::new("Chr1", 500, 100);
        assert!(matches!(
            result,
            Err(FpviewError::InvalidRegionError { start: 500, end: 100 })
        ));
    }
}
