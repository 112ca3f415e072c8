//! Overlap resolution for the gene track.
//!
//! Transcripts that share genomic coordinates cannot be drawn on the same
//! horizontal row. This crate assigns every transcript a lane such that
//! overlapping transcripts never share one, while keeping the number of lanes
//! minimal.
//!
//! ## Quick Start
//!
//! ```rust
//! use fpview_core::models::{GenomicInterval, Segment, SegmentKind, Strand, Transcript};
//! use fpview_layout::OverlapResolver;
//!
//! let transcripts = vec![
//!     Transcript::new("t1", Strand::Forward, vec![Segment::new(SegmentKind::Cds, 100, 400)]).unwrap(),
//!     Transcript::new("t2", Strand::Reverse, vec![Segment::new(SegmentKind::Cds, 300, 600)]).unwrap(),
//!     Transcript::new("t3", Strand::Forward, vec![Segment::new(SegmentKind::Cds, 500, 700)]).unwrap(),
//! ];
//!
//! let lanes = OverlapResolver::resolve(&transcripts, &GenomicInterval::new(1, 1000)).unwrap();
//!
//! assert_eq!(lanes.lane_count(), 2);
//! assert_eq!(lanes.lane("t3"), Some(0));
//! ```

/// Span-level greedy lane assignment.
pub mod lanes;

/// Transcript-level resolver and its result type.
pub mod resolver;

// re-exports
pub use self::lanes::{assign_lanes, max_overlap_depth};
pub use self::resolver::{LaneAssignment, OverlapResolver, Placement};
