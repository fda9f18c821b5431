use crate::scoring::{Band, GradedSumScale};

/// NIHSS: fifteen independently-rated neurological items summed to a
/// 0–42 stroke deficit score.
pub fn nihss() -> GradedSumScale {
    let items = [
        "nihss_consciousness",      // 0–3
        "nihss_orientation",        // 0–2
        "nihss_commands",           // 0–2
        "nihss_gaze",               // 0–2
        "nihss_visual_fields",      // 0–3
        "nihss_facial_palsy",       // 0–3
        "nihss_motor_arm_left",     // 0–4
        "nihss_motor_arm_right",    // 0–4
        "nihss_motor_leg_left",     // 0–4
        "nihss_motor_leg_right",    // 0–4
        "nihss_ataxia",             // 0–2
        "nihss_sensory",            // 0–2
        "nihss_language",           // 0–3
        "nihss_dysarthria",         // 0–2
        "nihss_extinction",         // 0–2
    ];

    GradedSumScale {
        id: "nihss",
        name: "NIHSS",
        max: 42.0,
        components: items.iter().map(|f| ("neurological", *f)).collect(),
        bands: vec![
            Band {
                min: 0.0,
                label: "Sin déficit",
                interpretation: "Sin signos de ictus agudo.",
            },
            Band {
                min: 1.0,
                label: "Déficit menor",
                interpretation: "NIHSS 1–4: déficit neurológico menor.",
            },
            Band {
                min: 5.0,
                label: "Déficit moderado",
                interpretation: "NIHSS 5–15: déficit moderado; candidato a reperfusión.",
            },
            Band {
                min: 16.0,
                label: "Déficit moderado-severo",
                interpretation: "NIHSS 16–20: déficit importante.",
            },
            Band {
                min: 21.0,
                label: "Déficit severo",
                interpretation: "NIHSS ≥21: ictus extenso; manejo en unidad de ictus.",
            },
        ],
    }
}
