use triaje_core::models::alert::{Alert, Severity};
use triaje_core::models::score::ScoreResult;
use triaje_core::models::urgency::UrgencyLevel;
use triaje_engine::urgency::{aggregate, default_risk_floors, RiskFloor};

fn alert(severity: Severity) -> Alert {
    Alert {
        id: "a".to_string(),
        severity,
        title: "t".to_string(),
        message: "m".to_string(),
        recommended_action: "r".to_string(),
        rule_id: "a".to_string(),
    }
}

#[test]
fn empty_inputs_stay_normal() {
    assert_eq!(aggregate(&[], &[], &[]), UrgencyLevel::Normal);
}

#[test]
fn alert_severities_force_their_floors() {
    assert_eq!(
        aggregate(&[alert(Severity::Info)], &[], &[]),
        UrgencyLevel::Observacion
    );
    assert_eq!(
        aggregate(&[alert(Severity::Warning)], &[], &[]),
        UrgencyLevel::Prioritario
    );
    assert_eq!(
        aggregate(&[alert(Severity::Critical)], &[], &[]),
        UrgencyLevel::Critico
    );
}

#[test]
fn maximum_wins_regardless_of_order() {
    let forward = [alert(Severity::Info), alert(Severity::Critical)];
    let backward = [alert(Severity::Critical), alert(Severity::Info)];
    assert_eq!(aggregate(&forward, &[], &[]), UrgencyLevel::Critico);
    assert_eq!(aggregate(&backward, &[], &[]), UrgencyLevel::Critico);
}

#[test]
fn score_floor_applies_without_any_alert() {
    // A malignancy risk of 65% alone, no discrete-field rule matched.
    let scores = [ScoreResult::new(
        "malignancy_risk",
        "Riesgo de malignidad",
        65.0,
        100.0,
        "Riesgo alto",
        "",
    )];
    let level = aggregate(&[], &scores, &default_risk_floors());
    assert!(level >= UrgencyLevel::Prioritario);
}

#[test]
fn score_below_threshold_does_not_trip_its_floor() {
    let scores = [ScoreResult::new(
        "malignancy_risk",
        "Riesgo de malignidad",
        40.0,
        100.0,
        "Riesgo moderado",
        "",
    )];
    assert_eq!(
        aggregate(&[], &scores, &default_risk_floors()),
        UrgencyLevel::Normal
    );
}

#[test]
fn floors_never_lower_a_reached_level() {
    let scores = [ScoreResult::new(
        "cardiovascular_risk",
        "Riesgo cardiovascular",
        30.0,
        100.0,
        "Riesgo moderado",
        "",
    )];
    // The Observacion-level floor matches, but a critical alert has
    // already pushed the level higher.
    let level = aggregate(
        &[alert(Severity::Critical)],
        &scores,
        &default_risk_floors(),
    );
    assert_eq!(level, UrgencyLevel::Critico);
}

#[test]
fn adding_an_alert_is_monotonic() {
    let base = [alert(Severity::Warning)];
    let extended = [alert(Severity::Warning), alert(Severity::Info)];
    assert!(aggregate(&extended, &[], &[]) >= aggregate(&base, &[], &[]));

    let with_critical = [alert(Severity::Warning), alert(Severity::Critical)];
    assert!(aggregate(&with_critical, &[], &[]) >= aggregate(&base, &[], &[]));
}

#[test]
fn custom_floor_levels_are_respected() {
    let scores = [ScoreResult::new("imc", "IMC", 42.0, 80.0, "Obesidad grado III", "")];
    let floors = [RiskFloor::new("imc", 40.0, UrgencyLevel::Observacion)];
    assert_eq!(aggregate(&[], &scores, &floors), UrgencyLevel::Observacion);
}
