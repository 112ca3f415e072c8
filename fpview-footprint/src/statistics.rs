use serde::Serialize;

use crate::matrix::FootprintMatrix;

/// Summary of one footprint matrix, for reporting alongside a figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixStatistics {
    pub total_cells: usize,
    pub present_cells: usize,
    /// Share of cells without a score; `1.0` for a matrix with no cells.
    pub missing_ratio: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    /// Population standard deviation of the present scores.
    pub std_dev: Option<f64>,
}

impl MatrixStatistics {
    pub fn from_matrix(matrix: &FootprintMatrix) -> Self {
        let values: Vec<f64> = matrix.present_values().collect();
        let total_cells = matrix.n_rows() * matrix.n_cols();
        let present_cells = values.len();

        let missing_ratio = if total_cells == 0 {
            1.0
        } else {
            (total_cells - present_cells) as f64 / total_cells as f64
        };

        if values.is_empty() {
            return MatrixStatistics {
                total_cells,
                present_cells,
                missing_ratio,
                min: None,
                max: None,
                mean: None,
                std_dev: None,
            };
        }

        let n = values.len() as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        MatrixStatistics {
            total_cells,
            present_cells,
            missing_ratio,
            min: Some(min),
            max: Some(max),
            mean: Some(mean),
            std_dev: Some(variance.sqrt()),
        }
    }
}
