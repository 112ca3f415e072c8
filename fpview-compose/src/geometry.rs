//! Renderer-facing primitives.
//!
//! Every type here is plain data in genomic coordinates plus a lane or row
//! index; turning them into pixels is the renderer's job.

use serde::Serialize;

use fpview_core::models::{GenomicInterval, SegmentKind, Strand};

/// A filled box for one UTR or CDS segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentRect {
    pub transcript: String,
    pub kind: SegmentKind,
    pub strand: Strand,
    pub interval: GenomicInterval,
    pub lane: usize,
    pub color: &'static str,
}

/// A dashed line joining two consecutive segments across an intron.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntronConnector {
    pub transcript: String,
    /// Last position of the upstream segment.
    pub from: u32,
    /// First position of the downstream segment.
    pub to: u32,
    pub lane: usize,
    pub dashed: bool,
    pub color: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeneTrack {
    pub lane_count: usize,
    pub segments: Vec<SegmentRect>,
    pub introns: Vec<IntronConnector>,
}

impl GeneTrack {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// One present heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    pub interval: GenomicInterval,
    pub radius: u32,
    pub score: f64,
    /// Score on the shared colour scale, in `[0, 1]`.
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTrack {
    pub sample: String,
    pub radii: Vec<u32>,
    pub bin_edges: Vec<u64>,
    pub n_cols: usize,
    pub cells: Vec<GridCell>,
}

impl HeatmapTrack {
    /// A track with no rows is drawn as a blank panel.
    pub fn is_blank(&self) -> bool {
        self.radii.is_empty()
    }
}
