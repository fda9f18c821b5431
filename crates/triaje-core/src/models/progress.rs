use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Completion state of one form section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionProgress {
    pub section_id: String,
    pub filled: usize,
    pub total: usize,
    /// filled / total × 100, rounded.
    pub percent: u8,
    /// True once any field in the section is filled.
    pub touched: bool,
}

/// Completion state of the whole exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressState {
    pub sections: Vec<SectionProgress>,
    /// Sections with at least one filled field / total sections × 100,
    /// rounded. A single filled field counts its whole section — the
    /// documented (coarse) completion policy, kept as-is pending
    /// product-owner review. Per-section percentages stay
    /// fine-grained.
    pub overall_percent: u8,
}
