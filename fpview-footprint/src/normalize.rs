use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use fpview_core::errors::{FpviewError, FpviewResult};

use crate::matrix::FootprintMatrix;

/// Colour-scale bounds shared by every heatmap of one figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedScaleRange {
    pub min: f64,
    pub max: f64,
}

impl Default for NormalizedScaleRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl NormalizedScaleRange {
    /// Used when there is nothing to scale.
    pub const DEFAULT: NormalizedScaleRange = NormalizedScaleRange { min: 0.0, max: 1.0 };

    ///
    /// Min and max of `values`, or [`Self::DEFAULT`] when `values` is empty.
    ///
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })
            .map_or(Self::DEFAULT, |(min, max)| NormalizedScaleRange { min, max })
    }

    /// Range of the present cells of a single matrix.
    pub fn from_matrix(matrix: &FootprintMatrix) -> Self {
        Self::from_values(matrix.present_values())
    }

    ///
    /// Limit the upper bound to `cap`, never dropping below `min`.
    ///
    pub fn capped(self, cap: f64) -> Self {
        NormalizedScaleRange {
            min: self.min,
            max: self.max.min(cap).max(self.min),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    ///
    /// Position of `score` on the scale in `[0, 1]`. A degenerate range
    /// (`max == min`) maps every score to `1.0`.
    ///
    pub fn fraction(&self, score: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 1.0;
        }
        ((score - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Matrices sharing one row axis and one colour scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSamples {
    pub matrices: IndexMap<String, FootprintMatrix>,
    pub range: NormalizedScaleRange,
}

impl NormalizedSamples {
    /// The shared row axis, empty when there are no samples or no data.
    pub fn radii(&self) -> &[u32] {
        self.matrices
            .values()
            .next()
            .map(FootprintMatrix::radii)
            .unwrap_or(&[])
    }

    pub fn get(&self, sample: &str) -> Option<&FootprintMatrix> {
        self.matrices.get(sample)
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}

///
/// Aligns several samples' matrices to a common radius axis and computes the
/// colour range they share.
///
pub struct CrossSampleNormalizer;

impl CrossSampleNormalizer {
    ///
    /// Re-express every sample on the union of all radii and compute the
    /// global min/max over all present cells.
    ///
    /// Sample order is kept. Inputs are not modified. Rows a sample lacks
    /// come back entirely missing.
    ///
    /// # Errors
    /// `RegionMismatchError` if a sample's window or bin width differs from
    /// the first sample's.
    ///
    pub fn normalize(
        samples: &IndexMap<String, FootprintMatrix>,
    ) -> FpviewResult<NormalizedSamples> {
        let Some((_, reference)) = samples.first() else {
            return Ok(NormalizedSamples {
                matrices: IndexMap::new(),
                range: NormalizedScaleRange::DEFAULT,
            });
        };

        for (sample, matrix) in samples {
            if !matrix.same_columns(reference) {
                return Err(FpviewError::RegionMismatchError {
                    sample: sample.clone(),
                    expected: *reference.region(),
                    expected_bin_width: reference.bin_width(),
                    found: *matrix.region(),
                    found_bin_width: matrix.bin_width(),
                });
            }
        }

        let radii: Vec<u32> = samples
            .values()
            .flat_map(|m| m.radii().iter().copied())
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .collect();

        let range = NormalizedScaleRange::from_values(
            samples.values().flat_map(FootprintMatrix::present_values),
        );

        let matrices: IndexMap<String, FootprintMatrix> = samples
            .iter()
            .map(|(sample, matrix)| (sample.clone(), matrix.align_to_radii(&radii)))
            .collect();

        log::debug!(
            "normalized {} samples onto {} radii, range {}..{}",
            matrices.len(),
            radii.len(),
            range.min,
            range.max
        );

        Ok(NormalizedSamples { matrices, range })
    }
}
