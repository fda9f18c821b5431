use crate::scoring::{Band, Contribution, WeightedScale};

/// Risk-percentage family: additive risk-factor membership tests,
/// each flag contributing a fixed point value, clamped to 0–100%.
/// All members share the same band layout; only the factor tables
/// differ.
fn membership_risk(
    id: &'static str,
    name: &'static str,
    section: &'static str,
    factors: &[(&'static str, f64)],
) -> WeightedScale {
    WeightedScale {
        id,
        name,
        max: 100.0,
        contributions: factors
            .iter()
            .map(|&(field, points)| Contribution::FlagSet {
                section,
                field,
                points,
            })
            .collect(),
        bands: vec![
            Band {
                min: 0.0,
                label: "Riesgo bajo",
                interpretation: "Sin factores de riesgo relevantes; control habitual.",
            },
            Band {
                min: 25.0,
                label: "Riesgo moderado",
                interpretation: "Factores de riesgo presentes; reforzar prevención y seguimiento.",
            },
            Band {
                min: 50.0,
                label: "Riesgo alto",
                interpretation: "Riesgo elevado; estudio dirigido y derivación preferente.",
            },
        ],
    }
}

pub fn cardiovascular() -> WeightedScale {
    membership_risk(
        "cardiovascular_risk",
        "Riesgo cardiovascular",
        "cardiovascular_risk",
        &[
            ("smoking", 15.0),
            ("hypertension", 15.0),
            ("diabetes", 20.0),
            ("dyslipidemia", 15.0),
            ("family_history", 10.0),
            ("obesity", 10.0),
            ("sedentary", 5.0),
            ("age_over_55", 10.0),
        ],
    )
}

/// ABCDE criteria, 20 points each.
pub fn melanoma() -> WeightedScale {
    membership_risk(
        "melanoma_risk",
        "Riesgo de melanoma (ABCDE)",
        "melanoma_screening",
        &[
            ("asymmetry", 20.0),
            ("irregular_border", 20.0),
            ("color_variation", 20.0),
            ("diameter_over_6mm", 20.0),
            ("evolution", 20.0),
        ],
    )
}

pub fn sti() -> WeightedScale {
    membership_risk(
        "sti_risk",
        "Riesgo de ITS",
        "sti_risk",
        &[
            ("unprotected_sex", 25.0),
            ("multiple_partners", 25.0),
            ("previous_sti", 20.0),
            ("partner_with_sti", 20.0),
            ("iv_drug_use", 10.0),
        ],
    )
}

pub fn malignancy() -> WeightedScale {
    membership_risk(
        "malignancy_risk",
        "Riesgo de malignidad",
        "oncology_screening",
        &[
            ("rapid_growth", 20.0),
            ("ulceration", 20.0),
            ("bleeding", 15.0),
            ("fixed_mass", 15.0),
            ("weight_loss", 15.0),
            ("adenopathy", 15.0),
        ],
    )
}

/// STOP-BANG-style obstructive sleep apnea screen.
pub fn sleep_apnea() -> WeightedScale {
    membership_risk(
        "sleep_apnea_risk",
        "Riesgo de apnea del sueño",
        "sleep_apnea",
        &[
            ("snoring", 15.0),
            ("daytime_tiredness", 15.0),
            ("observed_apnea", 20.0),
            ("hypertension", 10.0),
            ("bmi_over_35", 10.0),
            ("age_over_50", 10.0),
            ("large_neck", 10.0),
            ("male_sex", 10.0),
        ],
    )
}

pub fn dysphagia() -> WeightedScale {
    membership_risk(
        "dysphagia_risk",
        "Riesgo de disfagia",
        "swallowing",
        &[
            ("solids_difficulty", 20.0),
            ("liquids_difficulty", 15.0),
            ("odynophagia", 15.0),
            ("regurgitation", 10.0),
            ("weight_loss", 20.0),
            ("cough_on_swallowing", 20.0),
        ],
    )
}

pub fn stroke() -> WeightedScale {
    membership_risk(
        "stroke_risk",
        "Riesgo de ictus",
        "stroke_risk",
        &[
            ("hypertension", 20.0),
            ("atrial_fibrillation", 25.0),
            ("diabetes", 15.0),
            ("smoking", 15.0),
            ("prior_tia", 25.0),
        ],
    )
}
