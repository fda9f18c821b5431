use crate::scoring::{Band, Contribution, WeightedScale};

/// SCORAD-like composite eczema index, 0–103: weighted body-surface
/// percentage, subjective intensity (0–10, weight ×2), and morphology
/// flags. Implausible extents (>100%) stay in the record but the
/// score clamps at 103.
pub fn scorad() -> WeightedScale {
    use Contribution::{FlagSet, Scaled};

    WeightedScale {
        id: "scorad",
        name: "Índice compuesto de eccema (SCORAD)",
        max: 103.0,
        contributions: vec![
            Scaled {
                section: "eczema",
                field: "affected_area",
                factor: 0.7,
            },
            Scaled {
                section: "eczema",
                field: "intensity",
                factor: 2.0,
            },
            FlagSet {
                section: "eczema",
                field: "exudation",
                points: 7.0,
            },
            FlagSet {
                section: "eczema",
                field: "dryness",
                points: 6.0,
            },
        ],
        bands: vec![
            Band {
                min: 0.0,
                label: "Leve",
                interpretation: "Dermatitis leve; emolientes y seguimiento.",
            },
            Band {
                min: 25.0,
                label: "Moderado",
                interpretation: "Corticoides tópicos de potencia media.",
            },
            Band {
                min: 50.0,
                label: "Severo",
                interpretation: "Valorar tratamiento sistémico y derivación.",
            },
        ],
    }
}
