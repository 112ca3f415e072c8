use ndarray::Array2;
use serde::Serialize;

use fpview_core::models::GenomicInterval;

/// A single heatmap cell.
///
/// `Missing` means no record covered the cell and is distinct from a real
/// score of zero; renderers draw it as background. Serializes as `null` or a
/// plain number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Missing,
    Present(f64),
}

impl Cell {
    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Present(score) => Some(*score),
            Cell::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

/// Number of columns needed to cover `region` with bins of `bin_width`.
pub(crate) fn column_count(region: &GenomicInterval, bin_width: u32) -> usize {
    let width = u64::from(bin_width.max(1));
    region.len().div_ceil(width) as usize
}

///
/// Dense radius × position grid of footprint scores for one sample.
///
/// Rows are the distinct radii present in the data, ascending. Columns
/// cover the window from left to right, one per position or, when binned,
/// one per `bin_width` positions (the last bin may be shorter).
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintMatrix {
    region: GenomicInterval,
    bin_width: u32,
    radii: Vec<u32>,
    cells: Array2<Cell>,
}

impl FootprintMatrix {
    pub(crate) fn from_parts(
        region: GenomicInterval,
        bin_width: u32,
        radii: Vec<u32>,
        cells: Array2<Cell>,
    ) -> Self {
        debug_assert_eq!(cells.nrows(), radii.len());
        debug_assert_eq!(cells.ncols(), column_count(&region, bin_width));
        FootprintMatrix {
            region,
            bin_width,
            radii,
            cells,
        }
    }

    ///
    /// A matrix with no rows over the full column domain of `region`.
    ///
    pub fn empty(region: GenomicInterval, bin_width: u32) -> Self {
        let n_cols = column_count(&region, bin_width);
        FootprintMatrix {
            region,
            bin_width: bin_width.max(1),
            radii: Vec::new(),
            cells: Array2::from_elem((0, n_cols), Cell::Missing),
        }
    }

    pub fn region(&self) -> &GenomicInterval {
        &self.region
    }

    pub fn bin_width(&self) -> u32 {
        self.bin_width
    }

    /// Row axis: radii in ascending order.
    pub fn radii(&self) -> &[u32] {
        &self.radii
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    pub fn n_rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.cells.ncols()
    }

    /// True when the matrix has no rows, i.e. no data fell in the window.
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Two matrices share a column domain when they cover the same window
    /// with the same bin width.
    pub fn same_columns(&self, other: &FootprintMatrix) -> bool {
        self.region == other.region && self.bin_width == other.bin_width
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get((row, col)).copied()
    }

    pub fn row_of(&self, radius: u32) -> Option<usize> {
        self.radii.binary_search(&radius).ok()
    }

    pub fn column_of(&self, position: u32) -> Option<usize> {
        if !self.region.contains(position) {
            return None;
        }
        Some(((position - self.region.start) / self.bin_width) as usize)
    }

    ///
    /// Cell covering `position` at `radius`, or `None` when either lies
    /// outside the matrix axes.
    ///
    pub fn value_at(&self, radius: u32, position: u32) -> Option<Cell> {
        let row = self.row_of(radius)?;
        let col = self.column_of(position)?;
        self.get(row, col)
    }

    /// Genomic positions covered by column `col`.
    pub fn column_interval(&self, col: usize) -> Option<GenomicInterval> {
        if col >= self.n_cols() {
            return None;
        }
        // col < n_cols keeps start within the region
        let start = self.region.start + col as u32 * self.bin_width;
        let end = start
            .saturating_add(self.bin_width - 1)
            .min(self.region.end);
        Some(GenomicInterval::new(start, end))
    }

    pub fn column_intervals(&self) -> Vec<GenomicInterval> {
        (0..self.n_cols())
            .filter_map(|col| self.column_interval(col))
            .collect()
    }

    ///
    /// Column boundaries as `n_cols + 1` positions: the start of every column
    /// followed by `region.end + 1`. Widened to `u64` so a window ending at
    /// `u32::MAX` still has a closing edge.
    ///
    pub fn bin_edges(&self) -> Vec<u64> {
        let mut edges: Vec<u64> = self
            .column_intervals()
            .iter()
            .map(|c| u64::from(c.start))
            .collect();
        edges.push(u64::from(self.region.end) + 1);
        edges
    }

    ///
    /// Iterate over present cells as `(row, col, score)`.
    ///
    pub fn present_cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((row, col), cell)| cell.value().map(|score| (row, col, score)))
    }

    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().filter_map(Cell::value)
    }

    ///
    /// Re-express this matrix on the row axis `radii` (ascending). Rows for
    /// radii this matrix lacks are all `Missing`; rows for radii not listed
    /// are dropped. Columns are untouched.
    ///
    pub fn align_to_radii(&self, radii: &[u32]) -> FootprintMatrix {
        let mut cells = Array2::from_elem((radii.len(), self.n_cols()), Cell::Missing);
        for (target_row, radius) in radii.iter().enumerate() {
            if let Some(source_row) = self.row_of(*radius) {
                cells.row_mut(target_row).assign(&self.cells.row(source_row));
            }
        }
        FootprintMatrix::from_parts(self.region, self.bin_width, radii.to_vec(), cells)
    }
}
