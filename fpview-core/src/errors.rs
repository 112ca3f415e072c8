use thiserror::Error;

use crate::models::GenomicInterval;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FpviewError {
    #[error("Invalid interval: {0}")]
    InvalidIntervalError(String),

    #[error("Invalid region {start}-{end}: start must not exceed end")]
    InvalidRegionError { start: u32, end: u32 },

    #[error("Invalid footprint record: {0}")]
    RecordFieldError(String),

    #[error(
        "Region mismatch for sample `{sample}`: expected {expected} (bin width {expected_bin_width}), found {found} (bin width {found_bin_width})"
    )]
    RegionMismatchError {
        sample: String,
        expected: GenomicInterval,
        expected_bin_width: u32,
        found: GenomicInterval,
        found_bin_width: u32,
    },

    #[error("Transcript `{0}` appears more than once")]
    DuplicateTranscriptError(String),
}

pub type FpviewResult<T> = std::result::Result<T, FpviewError>;
