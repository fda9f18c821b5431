use crate::scoring::{Band, Contribution, WeightedScale};

/// DLQI-like quality-of-life index: ten daily-life questions, each
/// answered on an ordinal impact level mapped to fixed points
/// (none 0, mild 1, moderate 2, severe 3). Total 0–30.
pub fn dlqi() -> WeightedScale {
    let questions = [
        "symptoms",
        "embarrassment",
        "shopping",
        "clothing",
        "social",
        "sport",
        "work",
        "relationships",
        "intimacy",
        "treatment_burden",
    ];

    let levels = [("mild", 1.0), ("moderate", 2.0), ("severe", 3.0)];

    let contributions = questions
        .iter()
        .flat_map(|&field| {
            levels
                .iter()
                .map(move |&(value, points)| Contribution::EnumChoice {
                    section: "quality_of_life",
                    field,
                    value,
                    points,
                })
        })
        .collect();

    WeightedScale {
        id: "dlqi",
        name: "Índice de calidad de vida (DLQI)",
        max: 30.0,
        contributions,
        bands: vec![
            Band {
                min: 0.0,
                label: "Sin impacto",
                interpretation: "La enfermedad no afecta la vida diaria.",
            },
            Band {
                min: 2.0,
                label: "Impacto leve",
                interpretation: "Efecto pequeño sobre la vida diaria.",
            },
            Band {
                min: 6.0,
                label: "Impacto moderado",
                interpretation: "Efecto moderado sobre la vida diaria.",
            },
            Band {
                min: 11.0,
                label: "Gran impacto",
                interpretation: "Efecto muy importante sobre la vida diaria.",
            },
            Band {
                min: 21.0,
                label: "Impacto extremo",
                interpretation: "Efecto extremadamente importante; priorizar tratamiento.",
            },
        ],
    }
}
