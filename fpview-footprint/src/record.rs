use serde::{Deserialize, Serialize};

use fpview_core::errors::{FpviewError, FpviewResult};

/// One footprint measurement: the score of a detection window of `radius`
/// centred on `position`.
///
/// Records for the same `(position, radius)` may repeat; the matrix builder
/// averages them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintRecord {
    pub position: u32,
    pub radius: i32,
    pub score: f64,
}

impl FootprintRecord {
    pub fn new(position: u32, radius: i32, score: f64) -> Self {
        FootprintRecord {
            position,
            radius,
            score,
        }
    }

    ///
    /// Reject records that cannot be placed on a matrix: a non-positive
    /// radius or an infinite score. NaN scores pass; they mean "not measured"
    /// and are skipped later.
    ///
    pub fn validate(&self) -> FpviewResult<()> {
        if self.radius <= 0 {
            return Err(FpviewError::RecordFieldError(format!(
                "radius {} at position {} must be positive",
                self.radius, self.position
            )));
        }
        if self.score.is_infinite() {
            return Err(FpviewError::RecordFieldError(format!(
                "score at position {} radius {} is infinite",
                self.position, self.radius
            )));
        }
        Ok(())
    }
}

///
/// Parse a wide-table column header such as `r12` into its radius.
///
pub fn parse_radius_column(name: &str) -> Option<i32> {
    name.strip_prefix('r')?.parse().ok()
}

/// One row of a wide footprint table: a position and one score per radius
/// column. `None` marks a cell without a measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct WideFootprintRow {
    pub position: u32,
    pub scores: Vec<Option<f64>>,
}

///
/// Footprint scores laid out with one column per radius (`r2` … `r100`),
/// as some score files store them.
///
#[derive(Debug, Clone, PartialEq)]
pub struct WideFootprintTable {
    pub radii: Vec<i32>,
    pub rows: Vec<WideFootprintRow>,
}

impl WideFootprintTable {
    ///
    /// Build the radius header from column names, ignoring columns that are
    /// not radius columns (`chrom`, `pos`, ...).
    ///
    pub fn radii_from_columns<S: AsRef<str>>(columns: &[S]) -> Vec<i32> {
        columns
            .iter()
            .filter_map(|c| parse_radius_column(c.as_ref()))
            .collect()
    }

    ///
    /// Flatten into long `(position, radius, score)` records.
    ///
    /// # Errors
    /// `RecordFieldError` if a row does not have exactly one score per radius.
    ///
    pub fn into_records(self) -> FpviewResult<Vec<FootprintRecord>> {
        let mut records = Vec::with_capacity(self.rows.len() * self.radii.len());

        for row in self.rows {
            if row.scores.len() != self.radii.len() {
                return Err(FpviewError::RecordFieldError(format!(
                    "row at position {} has {} scores for {} radius columns",
                    row.position,
                    row.scores.len(),
                    self.radii.len()
                )));
            }
            for (radius, score) in self.radii.iter().zip(row.scores) {
                if let Some(score) = score {
                    records.push(FootprintRecord::new(row.position, *radius, score));
                }
            }
        }

        Ok(records)
    }
}
