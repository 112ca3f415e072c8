//! Footprint heatmap assembly.
//!
//! Footprint scores arrive as sparse `(position, radius, score)` records.
//! [`FootprintMatrixBuilder`] lays them onto a dense radius × position grid
//! over a window, averaging duplicates and marking uncovered cells
//! [`Cell::Missing`]. For multi-sample figures, [`CrossSampleNormalizer`]
//! puts every sample on the same radius axis and colour scale.
//!
//! ## Quick Start
//!
//! ```rust
//! use fpview_core::models::GenomicInterval;
//! use fpview_footprint::{Cell, FootprintMatrixBuilder, FootprintRecord};
//!
//! let records = vec![
//!     FootprintRecord::new(150, 10, 2.0),
//!     FootprintRecord::new(150, 10, 4.0),
//!     FootprintRecord::new(160, 20, 1.0),
//! ];
//!
//! let matrix = FootprintMatrixBuilder::new()
//!     .build(&records, &GenomicInterval::new(100, 200))
//!     .unwrap();
//!
//! assert_eq!(matrix.radii(), &[10, 20]);
//! assert_eq!(matrix.n_cols(), 101);
//! assert_eq!(matrix.value_at(10, 150), Some(Cell::Present(3.0)));
//! assert_eq!(matrix.value_at(20, 150), Some(Cell::Missing));
//! ```

pub mod builder;
pub mod matrix;
pub mod normalize;
pub mod record;
pub mod statistics;

// re-exports
pub use self::builder::FootprintMatrixBuilder;
pub use self::matrix::{Cell, FootprintMatrix};
pub use self::normalize::{CrossSampleNormalizer, NormalizedSamples, NormalizedScaleRange};
pub use self::record::{FootprintRecord, WideFootprintRow, WideFootprintTable, parse_radius_column};
pub use self::statistics::MatrixStatistics;
