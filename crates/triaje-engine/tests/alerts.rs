use triaje_core::models::alert::Severity;
use triaje_core::models::score::ScoreResult;
use triaje_core::observation::{FieldValue, ObservationRecord};
use triaje_core::schema::{flag, number, section, ExamSchema};
use triaje_engine::catalog::default_rules;
use triaje_engine::rules::{evaluate_alerts, AlertRule, Condition};
use triaje_scales::all_scales;

fn schema() -> ExamSchema {
    ExamSchema::new(
        "Urgencias",
        vec![
            section(
                "skin_lesions",
                "Lesiones cutáneas",
                vec![
                    flag("nikolsky_sign", "Signo de Nikolsky"),
                    flag("mucosal_involvement", "Afectación mucosa"),
                ],
            ),
            section("general", "Estado general", vec![flag("fever", "Fiebre")]),
            section(
                "gi_bleeding",
                "Hemorragia digestiva",
                vec![
                    flag("melena", "Melena"),
                    flag("syncope", "Síncope"),
                    number("systolic_bp", "TA sistólica"),
                ],
            ),
            section(
                "eczema",
                "Eccema",
                vec![number("intensity", "Intensidad (0-10)")],
            ),
            section(
                "neurological",
                "Exploración neurológica",
                vec![
                    number("gcs_eye", "Apertura ocular"),
                    number("gcs_verbal", "Respuesta verbal"),
                    number("gcs_motor", "Respuesta motora"),
                ],
            ),
        ],
    )
}

fn snapshot(record: &ObservationRecord) -> Vec<ScoreResult> {
    all_scales().iter().map(|s| s.compute(record)).collect()
}

fn set_flag(record: &mut ObservationRecord, schema: &ExamSchema, s: &str, f: &str) {
    record.set_field(schema, s, f, FieldValue::Flag(true)).unwrap();
}

#[test]
fn ten_alert_requires_all_three_findings() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    set_flag(&mut record, &schema, "skin_lesions", "nikolsky_sign");
    set_flag(&mut record, &schema, "general", "fever");
    set_flag(&mut record, &schema, "skin_lesions", "mucosal_involvement");

    let alerts = evaluate_alerts(&record, &snapshot(&record), &default_rules());
    assert!(alerts.iter().any(|a| a.rule_id == "ten_suspected"));

    // Removing any single one of the three findings suppresses it.
    for (s, f) in [
        ("skin_lesions", "nikolsky_sign"),
        ("general", "fever"),
        ("skin_lesions", "mucosal_involvement"),
    ] {
        let mut partial = record.clone();
        partial.clear_field(s, f);
        let alerts = evaluate_alerts(&partial, &snapshot(&partial), &default_rules());
        assert!(
            !alerts.iter().any(|a| a.rule_id == "ten_suspected"),
            "alert should not fire without {s}.{f}"
        );
    }
}

#[test]
fn empty_record_fires_nothing() {
    let record = ObservationRecord::new();
    let alerts = evaluate_alerts(&record, &snapshot(&record), &default_rules());
    assert!(alerts.is_empty());
}

#[test]
fn critical_tier_precedes_warning_tier_in_output() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    set_flag(&mut record, &schema, "gi_bleeding", "melena");
    set_flag(&mut record, &schema, "gi_bleeding", "syncope");
    record
        .set_field(&schema, "gi_bleeding", "systolic_bp", FieldValue::Number(80.0))
        .unwrap();

    let alerts = evaluate_alerts(&record, &snapshot(&record), &default_rules());
    let critical_pos = alerts
        .iter()
        .position(|a| a.rule_id == "gi_bleed_unstable")
        .expect("unstable bleed alert");
    let warning_pos = alerts
        .iter()
        .position(|a| a.rule_id == "blatchford_high")
        .expect("blatchford alert");
    assert!(critical_pos < warning_pos);
    assert_eq!(alerts[critical_pos].severity, Severity::Critical);
    assert_eq!(alerts[warning_pos].severity, Severity::Warning);
}

#[test]
fn one_emergency_does_not_suppress_another() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    set_flag(&mut record, &schema, "skin_lesions", "nikolsky_sign");
    set_flag(&mut record, &schema, "general", "fever");
    set_flag(&mut record, &schema, "skin_lesions", "mucosal_involvement");
    set_flag(&mut record, &schema, "gi_bleeding", "melena");
    record
        .set_field(&schema, "gi_bleeding", "systolic_bp", FieldValue::Number(80.0))
        .unwrap();

    let alerts = evaluate_alerts(&record, &snapshot(&record), &default_rules());
    assert!(alerts.iter().any(|a| a.rule_id == "ten_suspected"));
    assert!(alerts.iter().any(|a| a.rule_id == "gi_bleed_unstable"));
}

#[test]
fn unrelated_field_does_not_change_fired_state() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    set_flag(&mut record, &schema, "skin_lesions", "nikolsky_sign");
    set_flag(&mut record, &schema, "general", "fever");
    set_flag(&mut record, &schema, "skin_lesions", "mucosal_involvement");

    let before = evaluate_alerts(&record, &snapshot(&record), &default_rules());

    record
        .set_field(&schema, "eczema", "intensity", FieldValue::Number(4.0))
        .unwrap();
    let with_unrelated = evaluate_alerts(&record, &snapshot(&record), &default_rules());

    assert_eq!(
        before.iter().any(|a| a.rule_id == "ten_suspected"),
        with_unrelated.iter().any(|a| a.rule_id == "ten_suspected")
    );

    record.clear_field("eczema", "intensity");
    let after = evaluate_alerts(&record, &snapshot(&record), &default_rules());
    assert_eq!(before, after);
}

#[test]
fn number_below_condition_needs_a_recorded_value() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    set_flag(&mut record, &schema, "gi_bleeding", "melena");

    // Blood pressure never measured: the hypotension conjunct cannot
    // be satisfied by absence.
    let alerts = evaluate_alerts(&record, &snapshot(&record), &default_rules());
    assert!(!alerts.iter().any(|a| a.rule_id == "gi_bleed_unstable"));
}

#[test]
fn gcs_alert_needs_a_complete_glasgow_exam() {
    let schema = schema();
    let mut record = ObservationRecord::new();

    // One recorded component totals 4, but the exam is unfinished.
    record
        .set_field(&schema, "neurological", "gcs_eye", FieldValue::Number(4.0))
        .unwrap();
    let alerts = evaluate_alerts(&record, &snapshot(&record), &default_rules());
    assert!(!alerts.iter().any(|a| a.rule_id == "gcs_low"));

    // Completed exam above threshold: still silent.
    record
        .set_field(&schema, "neurological", "gcs_verbal", FieldValue::Number(5.0))
        .unwrap();
    record
        .set_field(&schema, "neurological", "gcs_motor", FieldValue::Number(6.0))
        .unwrap();
    let alerts = evaluate_alerts(&record, &snapshot(&record), &default_rules());
    assert!(!alerts.iter().any(|a| a.rule_id == "gcs_low"));

    // Completed exam below threshold fires.
    record
        .set_field(&schema, "neurological", "gcs_eye", FieldValue::Number(2.0))
        .unwrap();
    record
        .set_field(&schema, "neurological", "gcs_verbal", FieldValue::Number(2.0))
        .unwrap();
    record
        .set_field(&schema, "neurological", "gcs_motor", FieldValue::Number(3.0))
        .unwrap();
    let alerts = evaluate_alerts(&record, &snapshot(&record), &default_rules());
    assert!(alerts.iter().any(|a| a.rule_id == "gcs_low"));
}

#[cfg(not(debug_assertions))]
#[test]
fn rule_referencing_unknown_scale_is_skipped_in_release() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    set_flag(&mut record, &schema, "general", "fever");

    let broken = AlertRule {
        id: "broken".to_string(),
        severity: Severity::Warning,
        category: "test".to_string(),
        title: "broken".to_string(),
        message: String::new(),
        recommended_action: String::new(),
        conditions: vec![Condition::score_at_least("ghost_scale", 1.0)],
    };
    let fever = AlertRule {
        id: "fever_present".to_string(),
        severity: Severity::Warning,
        category: "test".to_string(),
        title: "Fiebre registrada".to_string(),
        message: String::new(),
        recommended_action: String::new(),
        conditions: vec![Condition::flag("general", "fever")],
    };

    let alerts = evaluate_alerts(&record, &snapshot(&record), &[broken, fever]);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].rule_id, "fever_present");
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "unknown scale")]
fn rule_referencing_unknown_scale_is_fatal_in_debug() {
    let record = ObservationRecord::new();
    let broken = AlertRule {
        id: "broken".to_string(),
        severity: Severity::Warning,
        category: "test".to_string(),
        title: "broken".to_string(),
        message: String::new(),
        recommended_action: String::new(),
        conditions: vec![Condition::score_at_least("ghost_scale", 1.0)],
    };
    evaluate_alerts(&record, &snapshot(&record), &[broken]);
}
