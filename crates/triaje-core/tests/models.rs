use triaje_core::models::alert::Severity;
use triaje_core::models::score::ScoreResult;
use triaje_core::models::urgency::UrgencyLevel;

#[test]
fn urgency_levels_are_totally_ordered() {
    assert!(UrgencyLevel::Normal < UrgencyLevel::Observacion);
    assert!(UrgencyLevel::Observacion < UrgencyLevel::Prioritario);
    assert!(UrgencyLevel::Prioritario < UrgencyLevel::Critico);
    assert_eq!(UrgencyLevel::default(), UrgencyLevel::Normal);
}

#[test]
fn urgency_labels_render_in_spanish() {
    assert_eq!(UrgencyLevel::Observacion.to_string(), "Observación");
    assert_eq!(UrgencyLevel::Critico.to_string(), "Crítico");
}

#[test]
fn severity_maps_to_urgency_floor() {
    assert_eq!(Severity::Critical.urgency_floor(), UrgencyLevel::Critico);
    assert_eq!(Severity::Warning.urgency_floor(), UrgencyLevel::Prioritario);
    assert_eq!(Severity::Info.urgency_floor(), UrgencyLevel::Observacion);
}

#[test]
fn score_result_clamps_into_published_range() {
    let over = ScoreResult::new("pasi", "PASI", 120.0, 72.0, "Severa", "");
    assert_eq!(over.value, 72.0);

    let under = ScoreResult::new("pasi", "PASI", -5.0, 72.0, "Leve", "");
    assert_eq!(under.value, 0.0);
}
