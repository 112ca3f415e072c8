pub mod feature_model;
pub mod interval;
pub mod transcript;
pub mod window;

// re-export for cleaner imports
pub use self::feature_model::{GenomicFeatureModel, SegmentFeature};
pub use self::interval::GenomicInterval;
pub use self::transcript::{Segment, SegmentKind, Strand, Transcript};
pub use self::window::Window;
