use std::fs::read_to_string;
use std::path::Path;

use indexmap::IndexMap;
use rstest::*;

use fpview::core::models::{GenomicFeatureModel, SegmentFeature, Window};
use fpview::footprint::FootprintRecord;

#[fixture]
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[fixture]
fn path_to_features() -> &'static str {
    "tests/data/features.json"
}

#[fixture]
fn path_to_leaf_footprints() -> &'static str {
    "tests/data/footprints_leaf.json"
}

#[fixture]
fn path_to_root_footprints() -> &'static str {
    "tests/data/footprints_root.json"
}

#[fixture]
fn path_to_render_config() -> &'static str {
    "tests/data/render.toml"
}

fn read_features(path: &str) -> Vec<SegmentFeature> {
    serde_json::from_str(&read_to_string(Path::new(path)).unwrap()).unwrap()
}

fn read_records(path: &str) -> Vec<FootprintRecord> {
    serde_json::from_str(&read_to_string(Path::new(path)).unwrap()).unwrap()
}

fn chr1_model(path_to_features: &str) -> GenomicFeatureModel {
    let window = Window::new("Chr1", 3600, 6000).unwrap();
    GenomicFeatureModel::from_features(window, read_features(path_to_features)).unwrap()
}

mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use fpview::core::errors::FpviewError;
    use fpview::core::models::GenomicInterval;
    use fpview::footprint::{Cell, NormalizedScaleRange};
    use fpview::layout::OverlapResolver;
    use fpview::{RenderConfig, RenderError, render_multi, render_single};

    #[rstest]
    fn test_model_from_features(#[from(init_logging)] _logging: (), path_to_features: &str) {
        let model = chr1_model(path_to_features);

        let ids: Vec<&str> = model.transcripts().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["AT1G01010.1", "AT1G01010.2", "AT1G01020.1"]);
        assert_eq!(model.get("AT1G01010.2").unwrap().introns().len(), 2);
        // mRNA and exon rows carry no segment of their own
        assert_eq!(model.get("AT1G01010.1").unwrap().segments().len(), 4);
        assert_eq!(model.get("AT1G01010.2").unwrap().segments().len(), 3);
    }

    #[rstest]
    fn test_lanes_for_fixture(path_to_features: &str) {
        let model = chr1_model(path_to_features);

        let lanes = OverlapResolver::resolve_model(&model).unwrap();

        assert_eq!(lanes.lane_count(), 2);
        assert_eq!(lanes.lane("AT1G01010.1"), Some(0));
        assert_eq!(lanes.lane("AT1G01010.2"), Some(1));
        assert_eq!(lanes.lane("AT1G01020.1"), Some(0));
        assert_eq!(
            lanes.rows(),
            vec![vec!["AT1G01010.1", "AT1G01020.1"], vec!["AT1G01010.2"]]
        );
    }

    #[rstest]
    fn test_render_single(
        #[from(init_logging)] _logging: (),
        path_to_features: &str,
        path_to_leaf_footprints: &str,
    ) {
        let model = chr1_model(path_to_features);
        let records = read_records(path_to_leaf_footprints);
        let highlights = vec![GenomicInterval::new(3650, 3700), GenomicInterval::new(100, 200)];

        let figure =
            render_single(&model, "leaf", &records, &highlights, &RenderConfig::default()).unwrap();

        assert_eq!(figure.gene_track.lane_count, 2);
        assert_eq!(figure.heatmaps.len(), 1);

        let leaf = &figure.heatmaps[0];
        assert_eq!(leaf.radii, vec![10, 20]);
        assert_eq!(leaf.n_cols, 2401);
        assert_eq!(leaf.cells.len(), 3);
        let averaged = leaf
            .cells
            .iter()
            .find(|c| c.radius == 10 && c.interval.start == 3700)
            .unwrap();
        assert_eq!(averaged.score, 2.0);

        assert_eq!(figure.scale, NormalizedScaleRange { min: 0.5, max: 4.0 });
        assert_eq!(figure.highlights, vec![GenomicInterval::new(3650, 3700)]);
        assert_eq!(figure.layout.height_ratios, vec![1.2, 1.2, 2.0]);
        assert_eq!(figure.statistics["leaf"].present_cells, 3);
        assert!(figure.warnings.is_empty());
    }

    #[rstest]
    fn test_render_multi_shares_axis_and_scale(
        #[from(init_logging)] _logging: (),
        path_to_features: &str,
        path_to_leaf_footprints: &str,
        path_to_root_footprints: &str,
    ) {
        let model = chr1_model(path_to_features);
        let mut samples = IndexMap::new();
        samples.insert("leaf".to_string(), read_records(path_to_leaf_footprints));
        samples.insert("root".to_string(), read_records(path_to_root_footprints));

        let figure = render_multi(&model, &samples, &[], &RenderConfig::default()).unwrap();

        let names: Vec<&str> = figure.heatmaps.iter().map(|h| h.sample.as_str()).collect();
        assert_eq!(names, vec!["leaf", "root"]);
        assert!(figure.heatmaps.iter().all(|h| h.radii == vec![10, 20, 30]));
        assert_eq!(figure.scale, NormalizedScaleRange { min: -1.0, max: 6.0 });
        assert_eq!(figure.layout.n_panels(), 4);
    }

    #[rstest]
    fn test_render_multi_with_config_file(
        path_to_features: &str,
        path_to_leaf_footprints: &str,
        path_to_root_footprints: &str,
        path_to_render_config: &str,
    ) {
        let model = chr1_model(path_to_features);
        let config = RenderConfig::try_from(Path::new(path_to_render_config)).unwrap();
        let mut samples = IndexMap::new();
        samples.insert("leaf".to_string(), read_records(path_to_leaf_footprints));
        samples.insert("root".to_string(), read_records(path_to_root_footprints));

        let figure = render_multi(&model, &samples, &[], &config).unwrap();

        // 2401 positions in bins of 5
        assert_eq!(figure.heatmaps[0].n_cols, 481);
        assert_eq!(figure.scale, NormalizedScaleRange { min: -1.0, max: 5.0 });
        let root_peak = figure.heatmaps[1]
            .cells
            .iter()
            .find(|c| c.radius == 30)
            .unwrap();
        assert_eq!(root_peak.interval, GenomicInterval::new(3700, 3704));
        assert_eq!(root_peak.intensity, 1.0);
    }

    #[rstest]
    fn test_blank_window_warns(#[from(init_logging)] _logging: (), path_to_features: &str) {
        let window = Window::new("Chr1", 20000, 20100).unwrap();
        let model = GenomicFeatureModel::from_features(window, read_features(path_to_features))
            .unwrap();

        let figure = render_single(&model, "leaf", &[], &[], &RenderConfig::default()).unwrap();

        assert!(figure.gene_track.is_empty());
        assert!(figure.heatmaps[0].is_blank());
        assert_eq!(figure.heatmaps[0].n_cols, 101);
        assert_eq!(figure.scale, NormalizedScaleRange::DEFAULT);
        assert_eq!(figure.warnings.len(), 2);
    }

    #[rstest]
    fn test_bad_record_aborts_render(path_to_features: &str) {
        let model = chr1_model(path_to_features);
        let records = vec![
            FootprintRecord::new(3700, 10, 1.0),
            FootprintRecord::new(3800, 0, 1.0),
        ];

        let result = render_single(&model, "leaf", &records, &[], &RenderConfig::default());

        assert!(matches!(
            result,
            Err(RenderError::Model(FpviewError::RecordFieldError(_)))
        ));
    }

    #[rstest]
    fn test_invalid_config_aborts_render(path_to_features: &str) {
        let model = chr1_model(path_to_features);
        let config = RenderConfig {
            bin_width: 0,
            ..Default::default()
        };

        let result = render_single(&model, "leaf", &[], &[], &config);

        assert!(matches!(result, Err(RenderError::Config(_))));
    }

    #[rstest]
    fn test_figure_json_shape(path_to_features: &str, path_to_leaf_footprints: &str) {
        let model = chr1_model(path_to_features);
        let records = read_records(path_to_leaf_footprints);

        let figure =
            render_single(&model, "leaf", &records, &[], &RenderConfig::default()).unwrap();
        let json = serde_json::to_value(&figure).unwrap();

        assert_eq!(json["window"]["chrom"], "Chr1");
        assert_eq!(json["heatmaps"][0]["sample"], "leaf");
        assert_eq!(json["gene_track"]["segments"][0]["kind"], "five_prime_utr");
        assert_eq!(json["gene_track"]["segments"][0]["strand"], "+");
        assert_eq!(json["gene_track"]["introns"][0]["dashed"], true);
    }

    #[rstest]
    fn test_leaf_matrix_cells_missing_outside_records(path_to_leaf_footprints: &str) {
        let records = read_records(path_to_leaf_footprints);
        let matrix = fpview::footprint::FootprintMatrixBuilder::new()
            .build(&records, &GenomicInterval::new(3600, 6000))
            .unwrap();

        assert_eq!(matrix.value_at(20, 3700), Some(Cell::Missing));
        assert_eq!(matrix.value_at(10, 7000), None);
    }
}
