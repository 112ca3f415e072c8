use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{FpviewError, FpviewResult};
use crate::models::GenomicInterval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    ///
    /// Parse a GFF3 strand column. Unstranded features (`.`) are drawn
    /// as forward.
    ///
    pub fn from_symbol(symbol: char) -> Option<Strand> {
        match symbol {
            '+' | '.' => Some(Strand::Forward),
            '-' => Some(Strand::Reverse),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    FivePrimeUtr,
    Cds,
    ThreePrimeUtr,
}

impl SegmentKind {
    ///
    /// Map a GFF3 feature type onto a segment kind. Feature types that are
    /// not part of a transcript's drawn structure return `None`.
    ///
    pub fn from_feature_type(feature_type: &str) -> Option<SegmentKind> {
        match feature_type {
            "five_prime_UTR" | "five_prime_utr" | "5UTR" => Some(SegmentKind::FivePrimeUtr),
            "CDS" | "cds" => Some(SegmentKind::Cds),
            "three_prime_UTR" | "three_prime_utr" | "3UTR" => Some(SegmentKind::ThreePrimeUtr),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::FivePrimeUtr => "5UTR",
            SegmentKind::Cds => "CDS",
            SegmentKind::ThreePrimeUtr => "3UTR",
        }
    }
}

impl Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub interval: GenomicInterval,
}

impl Segment {
    pub fn new(kind: SegmentKind, start: u32, end: u32) -> Self {
        Segment {
            kind,
            interval: GenomicInterval::new(start, end),
        }
    }
}

///
/// A transcript: an ordered run of UTR/CDS segments on one strand.
/// Gaps between consecutive segments are introns.
///
/// Built once from annotation and never modified afterwards.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    id: String,
    strand: Strand,
    segments: Vec<Segment>,
}

impl Transcript {
    ///
    /// Build a transcript, sorting its segments by start.
    ///
    /// # Errors
    /// `InvalidIntervalError` when there are no segments, when a segment has
    /// `start > end`, or when two segments share a position.
    ///
    pub fn new(id: &str, strand: Strand, mut segments: Vec<Segment>) -> FpviewResult<Self> {
        if segments.is_empty() {
            return Err(FpviewError::InvalidIntervalError(format!(
                "transcript `{}` has no segments",
                id
            )));
        }

        if let Some(bad) = segments.iter().find(|s| !s.interval.is_valid()) {
            return Err(FpviewError::InvalidIntervalError(format!(
                "{} segment {} of transcript `{}` has start > end",
                bad.kind, bad.interval, id
            )));
        }

        segments.sort_by_key(|s| s.interval);

        for pair in segments.windows(2) {
            if pair[1].interval.start <= pair[0].interval.end {
                return Err(FpviewError::InvalidIntervalError(format!(
                    "segments {} and {} of transcript `{}` overlap",
                    pair[0].interval, pair[1].interval, id
                )));
            }
        }

        Ok(Transcript {
            id: id.to_string(),
            strand,
            segments,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    ///
    /// Genomic span from the first segment start to the last segment end.
    ///
    pub fn span(&self) -> GenomicInterval {
        // segments are non-empty and sorted, see `Transcript::new`
        let start = self.segments[0].interval.start;
        let end = self.segments[self.segments.len() - 1].interval.end;
        GenomicInterval::new(start, end)
    }

    ///
    /// The implicit introns: gaps of at least one position between
    /// consecutive segments. Abutting segments produce no intron.
    ///
    pub fn introns(&self) -> Vec<GenomicInterval> {
        self.segments
            .windows(2)
            .filter(|pair| pair[1].interval.start > pair[0].interval.end + 1)
            .map(|pair| GenomicInterval::new(pair[0].interval.end + 1, pair[1].interval.start - 1))
            .collect()
    }
}
