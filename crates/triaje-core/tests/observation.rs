use triaje_core::error::CoreError;
use triaje_core::observation::{FieldValue, ObservationRecord};
use triaje_core::schema::{enumerated, flag, multi_select, number, section, text, ExamSchema};

fn schema() -> ExamSchema {
    ExamSchema::new(
        "Exploración dermatológica",
        vec![
            section(
                "skin_lesions",
                "Lesiones cutáneas",
                vec![
                    enumerated(
                        "distribution",
                        "Distribución",
                        &["localized", "moderate", "extensive"],
                    ),
                    number("erythema", "Eritema (0-4)"),
                    flag("pruritus", "Prurito"),
                    multi_select("locations", "Localizaciones", &["scalp", "trunk", "limbs"]),
                    text("notes", "Notas"),
                ],
            ),
            section("general", "Estado general", vec![flag("fever", "Fiebre")]),
        ],
    )
}

#[test]
fn accepted_value_is_stored() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    record
        .set_field(
            &schema,
            "skin_lesions",
            "distribution",
            FieldValue::Text("extensive".into()),
        )
        .unwrap();
    assert_eq!(record.text("skin_lesions", "distribution"), "extensive");
}

#[test]
fn enumerated_value_outside_domain_is_rejected_and_prior_retained() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    record
        .set_field(
            &schema,
            "skin_lesions",
            "distribution",
            FieldValue::Text("localized".into()),
        )
        .unwrap();

    let err = record
        .set_field(
            &schema,
            "skin_lesions",
            "distribution",
            FieldValue::Text("everywhere".into()),
        )
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidFieldValue { .. }));
    assert_eq!(record.text("skin_lesions", "distribution"), "localized");
}

#[test]
fn kind_mismatch_is_rejected() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    let err = record
        .set_field(
            &schema,
            "skin_lesions",
            "erythema",
            FieldValue::Text("three".into()),
        )
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidFieldValue { .. }));
    assert!(record.get("skin_lesions", "erythema").is_none());
}

#[test]
fn non_finite_number_is_rejected() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    let err = record
        .set_field(
            &schema,
            "skin_lesions",
            "erythema",
            FieldValue::Number(f64::NAN),
        )
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidFieldValue { .. }));
}

#[test]
fn unknown_section_and_field_are_rejected() {
    let schema = schema();
    let mut record = ObservationRecord::new();

    let err = record
        .set_field(&schema, "cardio", "pulse", FieldValue::Number(80.0))
        .unwrap_err();
    assert!(matches!(err, CoreError::UnknownSection(_)));

    let err = record
        .set_field(&schema, "general", "pulse", FieldValue::Number(80.0))
        .unwrap_err();
    assert!(matches!(err, CoreError::UnknownField { .. }));
}

#[test]
fn multi_select_option_outside_domain_is_rejected() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    let err = record
        .set_field(
            &schema,
            "skin_lesions",
            "locations",
            FieldValue::choices(&["trunk", "face"]),
        )
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidFieldValue { .. }));
}

#[test]
fn absent_fields_read_as_empty_contributions() {
    let record = ObservationRecord::new();
    assert_eq!(record.text("skin_lesions", "distribution"), "");
    assert_eq!(record.number("skin_lesions", "erythema"), 0.0);
    assert!(!record.flag("general", "fever"));
    assert!(!record.has_choice("skin_lesions", "locations", "trunk"));
    assert_eq!(record.choice_count("skin_lesions", "locations"), 0);
}

#[test]
fn clear_field_removes_value_and_empty_section() {
    let schema = schema();
    let mut record = ObservationRecord::new();
    record
        .set_field(&schema, "general", "fever", FieldValue::Flag(true))
        .unwrap();
    record.clear_field("general", "fever");
    assert!(record.get("general", "fever").is_none());
    assert!(record.section("general").is_none());
    assert!(record.is_empty());
}

#[test]
fn is_filled_semantics() {
    assert!(!FieldValue::Text(String::new()).is_filled());
    assert!(FieldValue::Text("x".into()).is_filled());
    assert!(!FieldValue::Number(0.0).is_filled());
    assert!(FieldValue::Number(1.5).is_filled());
    assert!(!FieldValue::Flag(false).is_filled());
    assert!(FieldValue::Flag(true).is_filled());
    assert!(!FieldValue::choices(&[]).is_filled());
    assert!(FieldValue::choices(&["a"]).is_filled());
}
