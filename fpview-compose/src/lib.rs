//! Track composition.
//!
//! The last step before drawing: lane assignments become segment rectangles
//! and intron connectors, footprint matrices become coloured grid cells, and
//! highlight regions are clipped to the window. Everything produced here is
//! `serde::Serialize`, so the renderer can live outside Rust.

pub mod composer;
pub mod geometry;
pub mod layout;
pub mod palette;

// re-exports
pub use self::composer::TrackComposer;
pub use self::geometry::{GeneTrack, GridCell, HeatmapTrack, IntronConnector, SegmentRect};
pub use self::layout::FigureLayout;
