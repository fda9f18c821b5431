use triaje_core::models::alert::Alert;
use triaje_core::models::score::ScoreResult;
use triaje_core::models::urgency::UrgencyLevel;

/// A standalone rule that forces a minimum triage level directly off
/// a score, with no alert object involved.
#[derive(Debug, Clone)]
pub struct RiskFloor {
    pub scale_id: String,
    pub threshold: f64,
    pub level: UrgencyLevel,
}

impl RiskFloor {
    pub fn new(scale_id: &str, threshold: f64, level: UrgencyLevel) -> Self {
        Self {
            scale_id: scale_id.to_string(),
            threshold,
            level,
        }
    }
}

/// Fold alerts and risk floors into one triage level.
///
/// An associative max over the `UrgencyLevel` order: starting at
/// `Normal`, each alert contributes its severity floor and each
/// risk floor whose score meets its threshold contributes its level.
/// Order-independent and monotonic — nothing can lower a level
/// already reached within the same evaluation.
pub fn aggregate(
    alerts: &[Alert],
    scores: &[ScoreResult],
    floors: &[RiskFloor],
) -> UrgencyLevel {
    let mut level = UrgencyLevel::Normal;

    for alert in alerts {
        level = level.max(alert.severity.urgency_floor());
    }

    for floor in floors {
        if let Some(score) = scores.iter().find(|s| s.id == floor.scale_id)
            && score.value >= floor.threshold
        {
            level = level.max(floor.level);
        }
    }

    level
}

/// Built-in score-keyed floors, applied even when no discrete-field
/// rule matches.
pub fn default_risk_floors() -> Vec<RiskFloor> {
    vec![
        RiskFloor::new("malignancy_risk", 50.0, UrgencyLevel::Prioritario),
        RiskFloor::new("melanoma_risk", 60.0, UrgencyLevel::Prioritario),
        RiskFloor::new("stroke_risk", 70.0, UrgencyLevel::Prioritario),
        RiskFloor::new("glasgow_blatchford", 6.0, UrgencyLevel::Prioritario),
        RiskFloor::new("cardiovascular_risk", 25.0, UrgencyLevel::Observacion),
    ]
}
