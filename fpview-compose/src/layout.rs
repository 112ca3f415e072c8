use serde::Serialize;

const LANE_HEIGHT: f64 = 1.2;
const SINGLE_GENE_TRACK_HEIGHT: f64 = 3.0;
const HEATMAP_HEIGHT: f64 = 2.0;

///
/// Suggested panel arrangement for a figure: one panel per gene lane (or a
/// single gene panel when everything fits on one lane) followed by one
/// panel per heatmap.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    /// Relative panel heights, top to bottom.
    pub height_ratios: Vec<f64>,
    /// Suggested figure size in inches.
    pub width: f64,
    pub height: f64,
}

impl FigureLayout {
    pub fn for_tracks(lane_count: usize, heatmap_count: usize) -> Self {
        let mut height_ratios = if lane_count > 1 {
            vec![LANE_HEIGHT; lane_count]
        } else {
            vec![SINGLE_GENE_TRACK_HEIGHT]
        };
        height_ratios.extend(std::iter::repeat_n(HEATMAP_HEIGHT, heatmap_count));

        let (width, height) = figure_size(height_ratios.len());

        FigureLayout {
            height_ratios,
            width,
            height,
        }
    }

    pub fn n_panels(&self) -> usize {
        self.height_ratios.len()
    }
}

fn figure_size(n_panels: usize) -> (f64, f64) {
    match n_panels {
        0..=2 => (12.0, 4.0),
        3..=4 => (12.0, 6.0),
        n => (14.0, 1.5 * n as f64 + 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_single_lane_single_sample() {
        let layout = FigureLayout::for_tracks(1, 1);
        assert_eq!(layout.height_ratios, vec![3.0, 2.0]);
        assert_eq!((layout.width, layout.height), (12.0, 4.0));
    }

    #[rstest]
    fn test_stacked_lanes() {
        let layout = FigureLayout::for_tracks(3, 1);
        assert_eq!(layout.height_ratios, vec![1.2, 1.2, 1.2, 2.0]);
        assert_eq!((layout.width, layout.height), (12.0, 6.0));
    }

    #[rstest]
    #[case(0, 3, 4)]
    #[case(2, 4, 6)]
    fn test_panel_count(#[case] lanes: usize, #[case] samples: usize, #[case] panels: usize) {
        assert_eq!(FigureLayout::for_tracks(lanes, samples).n_panels(), panels);
    }

    #[rstest]
    fn test_large_figure_grows_with_panels() {
        let layout = FigureLayout::for_tracks(2, 4);
        assert_eq!((layout.width, layout.height), (14.0, 10.0));
    }
}
