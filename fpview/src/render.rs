use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use fpview_compose::{FigureLayout, GeneTrack, HeatmapTrack, TrackComposer};
use fpview_core::errors::FpviewError;
use fpview_core::models::{GenomicFeatureModel, GenomicInterval, Window};
use fpview_footprint::{
    CrossSampleNormalizer, FootprintMatrix, FootprintRecord, MatrixStatistics,
    NormalizedScaleRange,
};
use fpview_layout::OverlapResolver;

use crate::config::{ConfigError, RenderConfig};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Model(#[from] FpviewError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

///
/// Everything a renderer needs to draw one figure: the gene track, one
/// heatmap per sample sharing a colour scale, clipped highlight regions and
/// panel layout hints.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub window: Window,
    pub gene_track: GeneTrack,
    pub heatmaps: Vec<HeatmapTrack>,
    pub scale: NormalizedScaleRange,
    pub statistics: IndexMap<String, MatrixStatistics>,
    pub highlights: Vec<GenomicInterval>,
    pub layout: FigureLayout,
    /// Non-fatal conditions, e.g. a window without transcripts.
    pub warnings: Vec<String>,
}

///
/// Render one sample's footprints under the gene track.
///
/// # Errors
/// Any model, record or configuration error; no partial figure is returned.
///
pub fn render_single(
    model: &GenomicFeatureModel,
    sample: &str,
    records: &[FootprintRecord],
    highlights: &[GenomicInterval],
    config: &RenderConfig,
) -> RenderResult<Figure> {
    let builder = config.matrix_builder()?;
    let matrix = builder.build(records, &model.window().interval)?;
    let scale = NormalizedScaleRange::from_matrix(&matrix);

    let mut matrices = IndexMap::new();
    matrices.insert(sample.to_string(), matrix);

    assemble(model, matrices, scale, highlights, config)
}

///
/// Render several samples' footprints under one gene track, on a shared
/// radius axis and colour scale. Heatmaps keep the order of `samples`.
///
/// # Errors
/// Any model, record or configuration error; no partial figure is returned.
///
pub fn render_multi(
    model: &GenomicFeatureModel,
    samples: &IndexMap<String, Vec<FootprintRecord>>,
    highlights: &[GenomicInterval],
    config: &RenderConfig,
) -> RenderResult<Figure> {
    let builder = config.matrix_builder()?;
    let region = model.window().interval;

    let mut matrices = IndexMap::with_capacity(samples.len());
    for (sample, records) in samples {
        matrices.insert(sample.clone(), builder.build(records, &region)?);
    }

    let normalized = CrossSampleNormalizer::normalize(&matrices)?;

    assemble(model, normalized.matrices, normalized.range, highlights, config)
}

fn assemble(
    model: &GenomicFeatureModel,
    matrices: IndexMap<String, FootprintMatrix>,
    scale: NormalizedScaleRange,
    highlights: &[GenomicInterval],
    config: &RenderConfig,
) -> RenderResult<Figure> {
    let window = model.window();
    let mut warnings = Vec::new();

    log::info!(
        "rendering {} with {} transcripts and {} samples",
        window,
        model.len(),
        matrices.len()
    );

    if model.is_empty() {
        let message = format!("no transcripts in {window}; gene track is blank");
        log::warn!("{message}");
        warnings.push(message);
    }

    let lanes = OverlapResolver::resolve_model(model)?;
    let gene_track = TrackComposer::gene_track(model, &lanes);

    let scale = match config.score_cap {
        Some(cap) => scale.capped(cap),
        None => scale,
    };

    let mut heatmaps = Vec::with_capacity(matrices.len());
    let mut statistics = IndexMap::with_capacity(matrices.len());
    for (sample, matrix) in &matrices {
        if matrix.present_cells().next().is_none() {
            let message = format!("no footprint data for sample `{sample}` in {window}");
            log::warn!("{message}");
            warnings.push(message);
        }
        heatmaps.push(TrackComposer::heatmap_track(sample, matrix, &scale));
        statistics.insert(sample.clone(), MatrixStatistics::from_matrix(matrix));
    }

    let layout = FigureLayout::for_tracks(lanes.lane_count(), heatmaps.len());

    log::info!(
        "figure has {} lanes, {} heatmaps, scale {}..{}",
        lanes.lane_count(),
        heatmaps.len(),
        scale.min,
        scale.max
    );

    Ok(Figure {
        window: window.clone(),
        gene_track,
        heatmaps,
        scale,
        statistics,
        highlights: TrackComposer::highlights(highlights, &window.interval),
        layout,
        warnings,
    })
}
