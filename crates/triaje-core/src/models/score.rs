use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One computed clinical score, clamped to its published range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub max_value: f64,
    pub classification: String,
    pub interpretation: String,
}

impl ScoreResult {
    /// Build a result with `value` clamped into `[0, max_value]`.
    /// Implausible inputs may push a raw sum past the published
    /// maximum; the stored value never exceeds it.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        value: f64,
        max_value: f64,
        classification: impl Into<String>,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.clamp(0.0, max_value),
            max_value,
            classification: classification.into(),
            interpretation: interpretation.into(),
        }
    }
}
