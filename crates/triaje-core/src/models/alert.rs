use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::urgency::UrgencyLevel;

/// Alert tier. Ordered so that `max` picks the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// The minimum triage level this tier forces on the exam.
    pub fn urgency_floor(self) -> UrgencyLevel {
        match self {
            Severity::Critical => UrgencyLevel::Critico,
            Severity::Warning => UrgencyLevel::Prioritario,
            Severity::Info => UrgencyLevel::Observacion,
        }
    }
}

/// A fired triage alert. Recreated on every evaluation; `rule_id`
/// names the catalog rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Alert {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub recommended_action: String,
    pub rule_id: String,
}
