use fpview_core::models::{GenomicFeatureModel, GenomicInterval};
use fpview_footprint::{FootprintMatrix, NormalizedScaleRange};
use fpview_layout::LaneAssignment;

use crate::geometry::{GeneTrack, GridCell, HeatmapTrack, IntronConnector, SegmentRect};
use crate::palette::{INTRON_COLOR, segment_color};

///
/// Maps already-resolved lanes and already-built matrices onto drawable
/// primitives. It makes no layout decisions of its own; its only editing is
/// clipping geometry to the viewed window.
///
pub struct TrackComposer;

impl TrackComposer {
    ///
    /// One rectangle per segment and one dashed connector per intron, each at
    /// its transcript's lane. Transcripts without a lane are skipped.
    ///
    pub fn gene_track(model: &GenomicFeatureModel, lanes: &LaneAssignment) -> GeneTrack {
        let window = model.window().interval;
        let mut track = GeneTrack {
            lane_count: lanes.lane_count(),
            ..Default::default()
        };

        for transcript in model.transcripts() {
            let Some(lane) = lanes.lane(transcript.id()) else {
                log::warn!("transcript `{}` has no lane; not drawn", transcript.id());
                continue;
            };

            for segment in transcript.segments() {
                if let Some(interval) = segment.interval.intersection(&window) {
                    track.segments.push(SegmentRect {
                        transcript: transcript.id().to_string(),
                        kind: segment.kind,
                        strand: transcript.strand(),
                        interval,
                        lane,
                        color: segment_color(segment.kind),
                    });
                }
            }

            for pair in transcript.segments().windows(2) {
                let (upstream, downstream) = (pair[0].interval, pair[1].interval);
                // abutting segments have no intron between them
                if downstream.start <= upstream.end.saturating_add(1) {
                    continue;
                }
                let gap = GenomicInterval::new(upstream.end, downstream.start);
                if let Some(visible) = gap.intersection(&window) {
                    track.introns.push(IntronConnector {
                        transcript: transcript.id().to_string(),
                        from: visible.start,
                        to: visible.end,
                        lane,
                        dashed: true,
                        color: INTRON_COLOR,
                    });
                }
            }
        }

        track
    }

    ///
    /// One grid cell per present matrix entry, coloured on `range`. Missing
    /// cells produce nothing, leaving the background visible.
    ///
    pub fn heatmap_track(
        sample: &str,
        matrix: &FootprintMatrix,
        range: &NormalizedScaleRange,
    ) -> HeatmapTrack {
        let columns = matrix.column_intervals();
        let cells = matrix
            .present_cells()
            .map(|(row, col, score)| GridCell {
                row,
                col,
                interval: columns[col],
                radius: matrix.radii()[row],
                score,
                intensity: range.fraction(score),
            })
            .collect();

        HeatmapTrack {
            sample: sample.to_string(),
            radii: matrix.radii().to_vec(),
            bin_edges: matrix.bin_edges(),
            n_cols: matrix.n_cols(),
            cells,
        }
    }

    ///
    /// Clip highlight regions to `window`, dropping those entirely outside
    /// and those with `start > end`.
    ///
    pub fn highlights(highlights: &[GenomicInterval], window: &GenomicInterval) -> Vec<GenomicInterval> {
        highlights
            .iter()
            .filter(|h| h.is_valid())
            .filter_map(|h| h.intersection(window))
            .collect()
    }
}
