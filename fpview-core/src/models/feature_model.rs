use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{FpviewError, FpviewResult};
use crate::models::{GenomicInterval, Segment, SegmentKind, Strand, Transcript, Window};

///
/// One annotation feature as handed over by the GFF3 parser, tagged with the
/// name of the transcript it belongs to.
///
/// `feature_type` is the raw type column (`CDS`, `five_prime_UTR`, `exon`,
/// ...). Only UTR and CDS types become segments; see
/// [`SegmentKind::from_feature_type`].
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentFeature {
    pub transcript: String,
    #[serde(alias = "kind")]
    pub feature_type: String,
    pub strand: Strand,
    pub interval: GenomicInterval,
}

impl SegmentFeature {
    pub fn new(transcript: &str, feature_type: &str, strand: Strand, start: u32, end: u32) -> Self {
        SegmentFeature {
            transcript: transcript.to_string(),
            feature_type: feature_type.to_string(),
            strand,
            interval: GenomicInterval::new(start, end),
        }
    }

    /// Segment kind of this feature, or `None` for types that are not drawn.
    pub fn kind(&self) -> Option<SegmentKind> {
        SegmentKind::from_feature_type(&self.feature_type)
    }
}

///
/// Gene structures of one genomic window, owned for the duration of a
/// single render call.
///
#[derive(Debug, Clone, Serialize)]
pub struct GenomicFeatureModel {
    window: Window,
    transcripts: Vec<Transcript>,
}

impl GenomicFeatureModel {
    ///
    /// Wrap already-built transcripts.
    ///
    /// # Errors
    /// `DuplicateTranscriptError` if two transcripts share an identifier.
    ///
    pub fn new(window: Window, transcripts: Vec<Transcript>) -> FpviewResult<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(transcripts.len());
        for transcript in &transcripts {
            if !seen.insert(transcript.id()) {
                return Err(FpviewError::DuplicateTranscriptError(
                    transcript.id().to_string(),
                ));
            }
        }

        Ok(GenomicFeatureModel {
            window,
            transcripts,
        })
    }

    ///
    /// Group raw segment features into transcripts.
    ///
    /// Features that do not touch the window, and features whose type is not
    /// a UTR or CDS (`exon`, `mRNA`, `gene`, ...), are dropped. Transcripts
    /// keep the order in which their first kept feature was seen; the strand
    /// of a transcript is the strand of that feature.
    ///
    pub fn from_features<I>(window: Window, features: I) -> FpviewResult<Self>
    where
        I: IntoIterator<Item = SegmentFeature>,
    {
        let mut grouped: IndexMap<String, (Strand, Vec<Segment>)> = IndexMap::new();
        let mut dropped = 0usize;
        let mut ignored = 0usize;

        for feature in features {
            let Some(kind) = feature.kind() else {
                ignored += 1;
                continue;
            };
            if !feature.interval.overlaps(&window.interval) {
                dropped += 1;
                continue;
            }
            grouped
                .entry(feature.transcript)
                .or_insert_with(|| (feature.strand, Vec::new()))
                .1
                .push(Segment {
                    kind,
                    interval: feature.interval,
                });
        }

        if dropped > 0 {
            log::debug!("dropped {} features outside {}", dropped, window);
        }
        if ignored > 0 {
            log::debug!("ignored {} features that are not UTR or CDS", ignored);
        }

        let transcripts = grouped
            .into_iter()
            .map(|(id, (strand, segments))| Transcript::new(&id, strand, segments))
            .collect::<FpviewResult<Vec<Transcript>>>()?;

        log::debug!("{} transcripts in {}", transcripts.len(), window);

        Ok(GenomicFeatureModel {
            window,
            transcripts,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn transcripts(&self) -> &[Transcript] {
        &self.transcripts
    }

    pub fn get(&self, id: &str) -> Option<&Transcript> {
        self.transcripts.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn feature(transcript: &str, kind: SegmentKind, start: u32, end: u32) -> SegmentFeature {
        SegmentFeature::new(transcript, kind.label(), Strand::Forward, start, end)
    }

    #[fixture]
    fn window() -> Window {
        Window::new("Chr1", 1000, 2000).unwrap()
    }

    #[rstest]
    fn test_from_features_groups_by_transcript(window: Window) {
        let features = vec![
            feature("tB", SegmentKind::Cds, 1500, 1600),
            feature("tA", SegmentKind::FivePrimeUtr, 1000, 1099),
            feature("tB", SegmentKind::FivePrimeUtr, 1400, 1450),
            feature("tA", SegmentKind::Cds, 1200, 1300),
        ];

        let model = GenomicFeatureModel::from_features(window, features).unwrap();
        let ids: Vec<&str> = model.transcripts().iter().map(|t| t.id()).collect();

        assert_eq!(ids, vec!["tB", "tA"]);
        assert_eq!(model.get("tB").unwrap().span(), GenomicInterval::new(1400, 1600));
        assert_eq!(model.get("tA").unwrap().segments().len(), 2);
    }

    #[rstest]
    fn test_from_features_drops_features_outside_window(window: Window) {
        let features = vec![
            feature("tA", SegmentKind::Cds, 1900, 2100),
            feature("tA", SegmentKind::ThreePrimeUtr, 2200, 2300),
            feature("tC", SegmentKind::Cds, 10, 20),
        ];

        let model = GenomicFeatureModel::from_features(window, features).unwrap();

        assert_eq!(model.len(), 1);
        assert_eq!(model.transcripts()[0].segments().len(), 1);
    }

    #[rstest]
    fn test_from_features_accepts_gff3_types_and_skips_others(window: Window) {
        let features = vec![
            SegmentFeature::new("tA", "mRNA", Strand::Forward, 1000, 1500),
            SegmentFeature::new("tA", "five_prime_UTR", Strand::Forward, 1000, 1099),
            SegmentFeature::new("tA", "exon", Strand::Forward, 1000, 1300),
            SegmentFeature::new("tA", "CDS", Strand::Forward, 1200, 1300),
            SegmentFeature::new("tA", "3UTR", Strand::Forward, 1301, 1500),
            SegmentFeature::new("gA", "gene", Strand::Forward, 1000, 1500),
        ];

        let model = GenomicFeatureModel::from_features(window, features).unwrap();
        let kinds: Vec<SegmentKind> = model.transcripts()[0]
            .segments()
            .iter()
            .map(|s| s.kind)
            .collect();

        assert_eq!(model.len(), 1);
        assert_eq!(
            kinds,
            vec![SegmentKind::FivePrimeUtr, SegmentKind::Cds, SegmentKind::ThreePrimeUtr]
        );
    }

    #[rstest]
    #[case(r#"{"transcript": "tA", "feature_type": "five_prime_UTR", "strand": "+", "interval": {"start": 1, "end": 9}}"#, Some(SegmentKind::FivePrimeUtr))]
    #[case(r#"{"transcript": "tA", "kind": "CDS", "strand": "-", "interval": {"start": 1, "end": 9}}"#, Some(SegmentKind::Cds))]
    #[case(r#"{"transcript": "tA", "feature_type": "exon", "strand": "+", "interval": {"start": 1, "end": 9}}"#, None)]
    fn test_deserialize_feature_type(#[case] json: &str, #[case] expected: Option<SegmentKind>) {
        let feature: SegmentFeature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.kind(), expected);
    }

    #[rstest]
    fn test_new_rejects_duplicate_ids(window: Window) {
        let t = Transcript::new(
            "tA",
            Strand::Forward,
            vec![Segment::new(SegmentKind::Cds, 1100, 1200)],
        )
        .unwrap();

        let result = GenomicFeatureModel::new(window, vec![t.clone(), t]);
        assert_eq!(
            result.unwrap_err(),
            FpviewError::DuplicateTranscriptError("tA".to_string())
        );
    }
}
