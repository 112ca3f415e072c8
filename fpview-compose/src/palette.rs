use fpview_core::models::SegmentKind;

pub const FIVE_PRIME_UTR_COLOR: &str = "#FFB6C1";
pub const CDS_COLOR: &str = "#87CEEB";
pub const THREE_PRIME_UTR_COLOR: &str = "#98FB98";
pub const INTRON_COLOR: &str = "#D3D3D3";

/// Fill colour for a segment of the given kind.
pub fn segment_color(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::FivePrimeUtr => FIVE_PRIME_UTR_COLOR,
        SegmentKind::Cds => CDS_COLOR,
        SegmentKind::ThreePrimeUtr => THREE_PRIME_UTR_COLOR,
    }
}
