use tracing::warn;

use triaje_core::models::alert::{Alert, Severity};
use triaje_core::models::score::ScoreResult;
use triaje_core::observation::{FieldValue, ObservationRecord};

/// One predicate of an alert rule.
///
/// Field conditions follow the absence policy: a field that was never
/// recorded simply does not satisfy the condition. Score conditions
/// reference the materialized score snapshot; an unknown scale id
/// there is a programming error, handled in [`evaluate_alerts`].
#[derive(Debug, Clone)]
pub enum Condition {
    FlagSet {
        section: String,
        field: String,
    },
    FieldEquals {
        section: String,
        field: String,
        value: String,
    },
    ChoiceSelected {
        section: String,
        field: String,
        option: String,
    },
    FieldFilled {
        section: String,
        field: String,
    },
    NumberAtLeast {
        section: String,
        field: String,
        min: f64,
    },
    /// Satisfied only when the field is recorded and below `max`.
    NumberBelow {
        section: String,
        field: String,
        max: f64,
    },
    ScoreAtLeast {
        scale: String,
        min: f64,
    },
    /// Satisfied while the score stays under `max`. Scores only grow
    /// as findings are recorded, so a rule built on this condition
    /// alone can unfire, and lower urgency, when the exam is merely
    /// completed further. Pair it with `FieldFilled` conditions on
    /// every component the scale sums, so a below-threshold score is
    /// a finished measurement and not a half-recorded one.
    ScoreBelow {
        scale: String,
        max: f64,
    },
}

impl Condition {
    pub fn flag(section: &str, field: &str) -> Self {
        Condition::FlagSet {
            section: section.to_string(),
            field: field.to_string(),
        }
    }

    pub fn equals(section: &str, field: &str, value: &str) -> Self {
        Condition::FieldEquals {
            section: section.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn choice(section: &str, field: &str, option: &str) -> Self {
        Condition::ChoiceSelected {
            section: section.to_string(),
            field: field.to_string(),
            option: option.to_string(),
        }
    }

    pub fn filled(section: &str, field: &str) -> Self {
        Condition::FieldFilled {
            section: section.to_string(),
            field: field.to_string(),
        }
    }

    pub fn number_at_least(section: &str, field: &str, min: f64) -> Self {
        Condition::NumberAtLeast {
            section: section.to_string(),
            field: field.to_string(),
            min,
        }
    }

    pub fn number_below(section: &str, field: &str, max: f64) -> Self {
        Condition::NumberBelow {
            section: section.to_string(),
            field: field.to_string(),
            max,
        }
    }

    pub fn score_at_least(scale: &str, min: f64) -> Self {
        Condition::ScoreAtLeast {
            scale: scale.to_string(),
            min,
        }
    }

    pub fn score_below(scale: &str, max: f64) -> Self {
        Condition::ScoreBelow {
            scale: scale.to_string(),
            max,
        }
    }

    /// `None` means the condition references a score that is not in
    /// the snapshot — a broken rule, not a clinical outcome.
    fn eval(&self, record: &ObservationRecord, scores: &[ScoreResult]) -> Option<bool> {
        let score_value = |scale: &str| scores.iter().find(|s| s.id == scale).map(|s| s.value);

        let met = match self {
            Condition::FlagSet { section, field } => record.flag(section, field),
            Condition::FieldEquals {
                section,
                field,
                value,
            } => record.text(section, field) == value,
            Condition::ChoiceSelected {
                section,
                field,
                option,
            } => record.has_choice(section, field, option),
            Condition::FieldFilled { section, field } => record
                .get(section, field)
                .is_some_and(FieldValue::is_filled),
            Condition::NumberAtLeast {
                section,
                field,
                min,
            } => record.number(section, field) >= *min,
            Condition::NumberBelow {
                section,
                field,
                max,
            } => match record.get(section, field) {
                Some(FieldValue::Number(n)) => n < max,
                _ => false,
            },
            Condition::ScoreAtLeast { scale, min } => score_value(scale)? >= *min,
            Condition::ScoreBelow { scale, max } => score_value(scale)? < *max,
        };
        Some(met)
    }

    fn broken_reference(&self, scores: &[ScoreResult]) -> Option<&str> {
        match self {
            Condition::ScoreAtLeast { scale, .. } | Condition::ScoreBelow { scale, .. } => {
                if scores.iter().any(|s| s.id == *scale) {
                    None
                } else {
                    Some(scale.as_str())
                }
            }
            _ => None,
        }
    }
}

/// A named alert rule: a conjunction of conditions plus the alert it
/// emits when every condition holds.
#[derive(Debug, Clone)]
pub struct AlertRule {
    pub id: String,
    pub severity: Severity,
    pub category: String,
    pub title: String,
    pub message: String,
    pub recommended_action: String,
    pub conditions: Vec<Condition>,
}

impl AlertRule {
    fn to_alert(&self) -> Alert {
        Alert {
            id: self.id.clone(),
            severity: self.severity,
            title: self.title.clone(),
            message: self.message.clone(),
            recommended_action: self.recommended_action.clone(),
            rule_id: self.id.clone(),
        }
    }
}

/// Evaluate every rule against one immutable snapshot of the record
/// and the fully-materialized score set.
///
/// Never short-circuits: all applicable alerts fire simultaneously, so
/// one detected emergency cannot suppress another. Output order is
/// reproducible: critical tier first, then warning, then info, catalog
/// order within a tier.
///
/// A rule whose condition references an unknown score id is a
/// programming error: it trips a `debug_assert!` in development; in
/// release it is skipped and logged so the rest of the alert set
/// still evaluates.
pub fn evaluate_alerts(
    record: &ObservationRecord,
    scores: &[ScoreResult],
    rules: &[AlertRule],
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for tier in [Severity::Critical, Severity::Warning, Severity::Info] {
        for rule in rules.iter().filter(|r| r.severity == tier) {
            if let Some(scale) = rule
                .conditions
                .iter()
                .find_map(|c| c.broken_reference(scores))
            {
                debug_assert!(
                    false,
                    "rule '{}' references unknown scale '{scale}'",
                    rule.id
                );
                warn!(rule = %rule.id, scale = %scale, "rule references unknown scale, skipping");
                continue;
            }

            let fires = rule
                .conditions
                .iter()
                .all(|c| c.eval(record, scores).unwrap_or(false));
            if fires && !rule.conditions.is_empty() {
                alerts.push(rule.to_alert());
            }
        }
    }

    alerts
}
