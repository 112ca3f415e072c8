use std::collections::BTreeSet;
use std::num::NonZeroU32;

use fxhash::FxHashMap;
use ndarray::Array2;

use fpview_core::errors::FpviewResult;
use fpview_core::models::GenomicInterval;

use crate::matrix::{Cell, FootprintMatrix, column_count};
use crate::record::FootprintRecord;

///
/// Mean of a non-empty set of finite scores, summed in ascending order so the
/// result does not depend on the order records arrived in.
///
/// When the plain sum overflows, each score is divided first. The result is
/// clamped to the score range, so it is always finite.
///
pub(crate) fn ordered_mean(scores: &mut [f64]) -> f64 {
    scores.sort_by(f64::total_cmp);
    let (lowest, highest) = (scores[0], scores[scores.len() - 1]);
    let n = scores.len() as f64;

    let sum: f64 = scores.iter().sum();
    let mean = if sum.is_finite() {
        sum / n
    } else {
        scores.iter().map(|score| score / n).sum()
    };
    mean.clamp(lowest, highest)
}

///
/// Turns sparse footprint records into a dense [`FootprintMatrix`] over a
/// window.
///
/// Duplicate `(position, radius)` records, and records sharing a bin when
/// `bin_width > 1`, are reduced with the arithmetic mean. Cells with no
/// record stay [`Cell::Missing`].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootprintMatrixBuilder {
    bin_width: NonZeroU32,
    radius_range: Option<(u32, u32)>,
}

impl Default for FootprintMatrixBuilder {
    fn default() -> Self {
        FootprintMatrixBuilder {
            bin_width: NonZeroU32::MIN,
            radius_range: None,
        }
    }
}

impl FootprintMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate `bin_width` consecutive positions into one column.
    pub fn with_bin_width(mut self, bin_width: NonZeroU32) -> Self {
        self.bin_width = bin_width;
        self
    }

    /// Keep only radii within `[min, max]` (inclusive).
    pub fn with_radius_range(mut self, min: u32, max: u32) -> Self {
        self.radius_range = Some((min, max));
        self
    }

    pub fn bin_width(&self) -> u32 {
        self.bin_width.get()
    }

    pub fn radius_range(&self) -> Option<(u32, u32)> {
        self.radius_range
    }

    fn keeps_radius(&self, radius: u32) -> bool {
        match self.radius_range {
            Some((min, max)) => (min..=max).contains(&radius),
            None => true,
        }
    }

    ///
    /// Build the matrix for `region`.
    ///
    /// Every record is validated, including those outside the window, so a
    /// malformed input is reported regardless of which window is viewed.
    /// Records outside the window or radius range are dropped, as are records
    /// with a NaN score.
    ///
    /// # Errors
    /// - `InvalidRegionError` if `region.start > region.end`
    /// - `RecordFieldError` for a non-positive radius or infinite score
    ///
    pub fn build(
        &self,
        records: &[FootprintRecord],
        region: &GenomicInterval,
    ) -> FpviewResult<FootprintMatrix> {
        region.validate_region()?;
        for record in records {
            record.validate()?;
        }

        let bin_width = self.bin_width.get();
        let mut accumulator: FxHashMap<(u32, usize), Vec<f64>> = FxHashMap::default();
        let mut radii: BTreeSet<u32> = BTreeSet::new();
        let mut skipped_nan = 0usize;

        for record in records {
            if !region.contains(record.position) {
                continue;
            }
            // validated positive above
            let radius = record.radius as u32;
            if !self.keeps_radius(radius) {
                continue;
            }
            if record.score.is_nan() {
                skipped_nan += 1;
                continue;
            }
            let col = ((record.position - region.start) / bin_width) as usize;
            radii.insert(radius);
            accumulator
                .entry((radius, col))
                .or_default()
                .push(record.score);
        }

        if skipped_nan > 0 {
            log::debug!("skipped {skipped_nan} footprint records with NaN scores");
        }

        if radii.is_empty() {
            log::warn!("no footprint records in {region}; returning empty matrix");
            return Ok(FootprintMatrix::empty(*region, bin_width));
        }

        let radii: Vec<u32> = radii.into_iter().collect();
        let row_index: FxHashMap<u32, usize> =
            radii.iter().enumerate().map(|(i, r)| (*r, i)).collect();

        let n_cols = column_count(region, bin_width);
        let mut cells = Array2::from_elem((radii.len(), n_cols), Cell::Missing);

        for ((radius, col), mut scores) in accumulator {
            let row = row_index[&radius];
            cells[[row, col]] = Cell::Present(ordered_mean(&mut scores));
        }

        log::debug!(
            "built {}x{} footprint matrix over {} (bin width {})",
            radii.len(),
            n_cols,
            region,
            bin_width
        );

        Ok(FootprintMatrix::from_parts(*region, bin_width, radii, cells))
    }
}
