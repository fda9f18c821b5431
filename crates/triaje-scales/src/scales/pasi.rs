use crate::scoring::{Band, Contribution, WeightedScale};

/// PASI-like plaque severity index. Additive weighted findings
/// (distribution, morphology, induration on palpation, erythema,
/// scaling, pruritus) clamped to 0–72.
pub fn pasi() -> WeightedScale {
    use Contribution::{EnumChoice, FlagSet, Scaled};

    WeightedScale {
        id: "pasi",
        name: "Índice de severidad de placas (PASI)",
        max: 72.0,
        contributions: vec![
            EnumChoice {
                section: "skin_lesions",
                field: "distribution",
                value: "localized",
                points: 5.0,
            },
            EnumChoice {
                section: "skin_lesions",
                field: "distribution",
                value: "moderate",
                points: 12.0,
            },
            EnumChoice {
                section: "skin_lesions",
                field: "distribution",
                value: "extensive",
                points: 20.0,
            },
            EnumChoice {
                section: "skin_lesions",
                field: "morphology",
                value: "thin_plaques",
                points: 5.0,
            },
            EnumChoice {
                section: "skin_lesions",
                field: "morphology",
                value: "scaly_plaques",
                points: 8.0,
            },
            EnumChoice {
                section: "skin_lesions",
                field: "morphology",
                value: "thick_plaques",
                points: 15.0,
            },
            EnumChoice {
                section: "skin_lesions",
                field: "palpation",
                value: "elevated",
                points: 5.0,
            },
            EnumChoice {
                section: "skin_lesions",
                field: "palpation",
                value: "infiltrated",
                points: 10.0,
            },
            // Erythema and scaling rated 0–4 by the examiner.
            Scaled {
                section: "skin_lesions",
                field: "erythema",
                factor: 3.0,
            },
            Scaled {
                section: "skin_lesions",
                field: "scaling",
                factor: 2.5,
            },
            FlagSet {
                section: "skin_lesions",
                field: "pruritus",
                points: 5.0,
            },
        ],
        bands: vec![
            Band {
                min: 0.0,
                label: "Leve",
                interpretation: "Afectación limitada; tratamiento tópico.",
            },
            Band {
                min: 10.0,
                label: "Moderada",
                interpretation: "Considerar fototerapia o tratamiento sistémico.",
            },
            Band {
                min: 20.0,
                label: "Severa",
                interpretation: "Tratamiento sistémico indicado; valorar derivación.",
            },
        ],
    }
}
