use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::alert::Alert;
use crate::models::progress::ProgressState;
use crate::models::score::ScoreResult;
use crate::models::urgency::UrgencyLevel;

/// The full derived state of one exam session, recomputed from
/// scratch on every evaluation. No identity, no persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub scores: Vec<ScoreResult>,
    pub alerts: Vec<Alert>,
    pub urgency: UrgencyLevel,
    pub progress: ProgressState,
    pub report: String,
}
