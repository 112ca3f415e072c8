use indexmap::IndexMap;
use serde::Serialize;

use fpview_core::errors::{FpviewError, FpviewResult};
use fpview_core::models::{GenomicFeatureModel, GenomicInterval, Transcript};

use crate::lanes::assign_lanes;

/// Where a single transcript ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub lane: usize,
    pub span: GenomicInterval,
}

///
/// Mapping from transcript identifier to display lane.
///
/// Lanes are dense and start at 0. Entries iterate in the order the
/// transcripts were handed to the resolver.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaneAssignment {
    placements: IndexMap<String, Placement>,
    lane_count: usize,
}

impl LaneAssignment {
    pub fn lane(&self, id: &str) -> Option<usize> {
        self.placements.get(id).map(|p| p.lane)
    }

    pub fn placement(&self, id: &str) -> Option<&Placement> {
        self.placements.get(id)
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Placement)> {
        self.placements.iter().map(|(id, p)| (id.as_str(), p))
    }

    ///
    /// Transcript identifiers grouped by lane, each lane ordered by
    /// transcript start.
    ///
    pub fn rows(&self) -> Vec<Vec<&str>> {
        let mut rows: Vec<Vec<(&GenomicInterval, &str)>> = vec![Vec::new(); self.lane_count];
        for (id, placement) in &self.placements {
            rows[placement.lane].push((&placement.span, id.as_str()));
        }
        rows.into_iter()
            .map(|mut row| {
                row.sort_by_key(|(span, _)| **span);
                row.into_iter().map(|(_, id)| id).collect()
            })
            .collect()
    }
}

///
/// Greedy interval-graph colouring of transcripts into display lanes.
///
pub struct OverlapResolver;

impl OverlapResolver {
    ///
    /// Assign a lane to every transcript so that transcripts with overlapping
    /// spans never share a lane, using as few lanes as possible.
    ///
    /// # Arguments
    /// - transcripts: transcripts of the window, in annotation order
    /// - region: the render window
    ///
    /// # Errors
    /// - `InvalidRegionError` if `region.start > region.end`
    /// - `InvalidIntervalError` if a transcript span is malformed or lies
    ///   entirely outside `region`
    /// - `DuplicateTranscriptError` if two transcripts share an identifier
    ///
    pub fn resolve(
        transcripts: &[Transcript],
        region: &GenomicInterval,
    ) -> FpviewResult<LaneAssignment> {
        let spans: Vec<(String, GenomicInterval)> = transcripts
            .iter()
            .map(|t| (t.id().to_string(), t.span()))
            .collect();
        Self::resolve_spans(spans, region)
    }

    ///
    /// Resolve lanes for every transcript of a feature model, against the
    /// model's own window.
    ///
    pub fn resolve_model(model: &GenomicFeatureModel) -> FpviewResult<LaneAssignment> {
        Self::resolve(model.transcripts(), &model.window().interval)
    }

    ///
    /// Span-level entry point; `spans` pairs an identifier with the genomic
    /// extent to lay out.
    ///
    pub fn resolve_spans(
        spans: Vec<(String, GenomicInterval)>,
        region: &GenomicInterval,
    ) -> FpviewResult<LaneAssignment> {
        region.validate_region()?;

        for (id, span) in &spans {
            if !span.is_valid() {
                return Err(FpviewError::InvalidIntervalError(format!(
                    "transcript `{}` has span {} with start > end",
                    id, span
                )));
            }
            if !span.overlaps(region) {
                return Err(FpviewError::InvalidIntervalError(format!(
                    "transcript `{}` at {} lies outside region {}",
                    id, span, region
                )));
            }
        }

        let bounds: Vec<(u32, u32)> = spans.iter().map(|(_, s)| (s.start, s.end)).collect();
        let lanes = assign_lanes(&bounds);
        let lane_count = lanes.iter().max().map_or(0, |&max| max + 1);

        let mut placements: IndexMap<String, Placement> = IndexMap::with_capacity(spans.len());
        for ((id, span), lane) in spans.into_iter().zip(lanes) {
            if placements.contains_key(&id) {
                return Err(FpviewError::DuplicateTranscriptError(id));
            }
            placements.insert(id, Placement { lane, span });
        }

        log::debug!(
            "placed {} transcripts on {} lanes in {}",
            placements.len(),
            lane_count,
            region
        );

        Ok(LaneAssignment {
            placements,
            lane_count,
        })
    }
}
