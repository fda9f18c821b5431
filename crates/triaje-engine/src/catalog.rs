use triaje_core::models::alert::Severity;

use crate::rules::{AlertRule, Condition};

fn rule(
    id: &str,
    severity: Severity,
    category: &str,
    title: &str,
    message: &str,
    recommended_action: &str,
    conditions: Vec<Condition>,
) -> AlertRule {
    AlertRule {
        id: id.to_string(),
        severity,
        category: category.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        recommended_action: recommended_action.to_string(),
        conditions,
    }
}

/// The built-in rule catalog. Hosts may replace or extend it per
/// specialty; evaluation order is fixed by tier, then by position
/// here.
pub fn default_rules() -> Vec<AlertRule> {
    vec![
        // --- critical tier ---
        rule(
            "ten_suspected",
            Severity::Critical,
            "dermatology",
            "Sospecha de necrólisis epidérmica tóxica",
            "Signo de Nikolsky positivo con fiebre y afectación mucosa simultánea.",
            "Suspender fármacos sospechosos y derivar de inmediato a unidad de quemados.",
            vec![
                Condition::flag("skin_lesions", "nikolsky_sign"),
                Condition::flag("general", "fever"),
                Condition::flag("skin_lesions", "mucosal_involvement"),
            ],
        ),
        rule(
            "anaphylaxis",
            Severity::Critical,
            "allergy",
            "Sospecha de anafilaxia",
            "Urticaria generalizada de inicio súbito con compromiso de vía aérea.",
            "Adrenalina intramuscular inmediata y monitorización.",
            vec![
                Condition::flag("allergy", "generalized_urticaria"),
                Condition::flag("allergy", "airway_compromise"),
            ],
        ),
        rule(
            "stroke_code",
            Severity::Critical,
            "neurology",
            "Código ictus",
            "Déficit neurológico agudo de inicio súbito con NIHSS ≥4.",
            "Activar código ictus y TAC craneal urgente.",
            vec![
                Condition::score_at_least("nihss", 4.0),
                Condition::flag("neurological", "sudden_onset"),
            ],
        ),
        rule(
            "gcs_low",
            Severity::Critical,
            "neurology",
            "Disminución grave del nivel de conciencia",
            "Glasgow <9 en la exploración actual.",
            "Asegurar vía aérea y traslado a críticos.",
            // All three components must be recorded: a low total from a
            // half-finished Glasgow exam is an artifact, and an alert
            // based on it would unfire (lowering urgency) as the
            // remaining components are captured.
            vec![
                Condition::filled("neurological", "gcs_eye"),
                Condition::filled("neurological", "gcs_verbal"),
                Condition::filled("neurological", "gcs_motor"),
                Condition::score_below("glasgow_coma", 9.0),
            ],
        ),
        rule(
            "gi_bleed_unstable",
            Severity::Critical,
            "digestive",
            "Hemorragia digestiva con inestabilidad",
            "Melena con tensión arterial sistólica inferior a 90 mmHg.",
            "Dos vías periféricas, reposición de volumen y endoscopia urgente.",
            vec![
                Condition::flag("gi_bleeding", "melena"),
                Condition::number_below("gi_bleeding", "systolic_bp", 90.0),
            ],
        ),
        rule(
            "meningitis_suspected",
            Severity::Critical,
            "neurology",
            "Sospecha de meningitis",
            "Rigidez de nuca con fiebre.",
            "Hemocultivos, antibioterapia empírica y punción lumbar.",
            vec![
                Condition::flag("neurological", "neck_stiffness"),
                Condition::flag("general", "fever"),
            ],
        ),
        // --- warning tier ---
        rule(
            "malignancy_risk_high",
            Severity::Warning,
            "oncology",
            "Riesgo de malignidad elevado",
            "La puntuación de riesgo de malignidad supera el umbral de estudio dirigido.",
            "Derivación preferente para biopsia o imagen.",
            vec![Condition::score_at_least("malignancy_risk", 50.0)],
        ),
        rule(
            "melanoma_risk_high",
            Severity::Warning,
            "dermatology",
            "Lesión melanocítica de alto riesgo",
            "Tres o más criterios ABCDE presentes.",
            "Dermatoscopia y valoración por dermatología en menos de dos semanas.",
            vec![Condition::score_at_least("melanoma_risk", 60.0)],
        ),
        rule(
            "child_pugh_c",
            Severity::Warning,
            "digestive",
            "Cirrosis descompensada",
            "Clasificación Child-Pugh C en la evaluación actual.",
            "Valoración por hepatología y estudio de trasplante.",
            vec![Condition::score_at_least("child_pugh", 10.0)],
        ),
        rule(
            "blatchford_high",
            Severity::Warning,
            "digestive",
            "Glasgow-Blatchford de alto riesgo",
            "Puntuación ≥6: probable necesidad de intervención.",
            "Ingreso y endoscopia en las primeras 24 horas.",
            vec![Condition::score_at_least("glasgow_blatchford", 6.0)],
        ),
        rule(
            "insulin_resistance",
            Severity::Warning,
            "metabolic",
            "Resistencia a la insulina significativa",
            "HOMA-IR por encima de 3.8.",
            "Estudio metabólico completo y consejo dietético.",
            vec![Condition::score_at_least("homa_ir", 3.8)],
        ),
        // --- info tier ---
        rule(
            "cardiovascular_moderate",
            Severity::Info,
            "cardiology",
            "Riesgo cardiovascular moderado",
            "Factores de riesgo cardiovascular acumulados.",
            "Consejo sobre estilo de vida y control de factores de riesgo.",
            vec![Condition::score_at_least("cardiovascular_risk", 25.0)],
        ),
        rule(
            "apnea_screen_positive",
            Severity::Info,
            "pneumology",
            "Cribado de apnea del sueño positivo",
            "Puntuación de riesgo de apnea en rango alto.",
            "Solicitar poligrafía respiratoria.",
            vec![Condition::score_at_least("sleep_apnea_risk", 50.0)],
        ),
        rule(
            "obesity",
            Severity::Info,
            "metabolic",
            "Obesidad",
            "IMC en rango de obesidad.",
            "Plan estructurado de dieta y ejercicio.",
            vec![Condition::score_at_least("imc", 30.0)],
        ),
    ]
}
