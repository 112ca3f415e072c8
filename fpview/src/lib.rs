//! # fpview
//!
//! Assembles gene-structure tracks and footprint heatmaps over a shared
//! genomic axis. Annotation and footprint parsing, and the drawing itself,
//! happen outside this crate; `fpview` turns already-parsed records into a
//! serializable [`Figure`].
//!
//! ```rust
//! use fpview::{render_single, RenderConfig};
//! use fpview::core::models::{GenomicFeatureModel, Segment, SegmentKind, Strand, Transcript, Window};
//! use fpview::footprint::FootprintRecord;
//!
//! let window = Window::new("Chr1", 3600, 4300).unwrap();
//! let transcript = Transcript::new(
//!     "AT1G01010.1",
//!     Strand::Forward,
//!     vec![
//!         Segment::new(SegmentKind::FivePrimeUtr, 3631, 3759),
//!         Segment::new(SegmentKind::Cds, 3996, 4276),
//!     ],
//! )
//! .unwrap();
//! let model = GenomicFeatureModel::new(window, vec![transcript]).unwrap();
//!
//! let records = vec![FootprintRecord::new(3700, 10, 0.8)];
//! let figure = render_single(&model, "leaf", &records, &[], &RenderConfig::default()).unwrap();
//!
//! assert_eq!(figure.gene_track.lane_count, 1);
//! assert_eq!(figure.heatmaps[0].cells.len(), 1);
//! ```

#[doc(inline)]
pub use fpview_core as core;

#[doc(inline)]
pub use fpview_layout as layout;

#[doc(inline)]
pub use fpview_footprint as footprint;

#[doc(inline)]
pub use fpview_compose as compose;

pub mod config;
pub mod render;

// re-exports
pub use self::config::{ConfigError, ConfigResult, RenderConfig};
pub use self::render::{Figure, RenderError, RenderResult, render_multi, render_single};
