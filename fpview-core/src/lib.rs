//! Core models shared by the footprint track engines.
//!
//! Coordinates are 1-based and inclusive throughout: a [`models::GenomicInterval`]
//! `(100, 200)` covers 101 positions. Every fallible operation in the workspace
//! reports through [`errors::FpviewError`].
//!
//! ```rust
//! use fpview_core::models::{Segment, SegmentKind, Strand, Transcript};
//!
//! let transcript = Transcript::new(
//!     "AT1G01010.1",
//!     Strand::Forward,
//!     vec![
//!         Segment::new(SegmentKind::FivePrimeUtr, 3631, 3759),
//!         Segment::new(SegmentKind::Cds, 3996, 4276),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(transcript.introns().len(), 1);
//! ```
pub mod errors;
pub mod models;

// re-exports
pub use errors::{FpviewError, FpviewResult};
