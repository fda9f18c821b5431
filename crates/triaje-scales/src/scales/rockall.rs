use crate::scoring::{Band, Criterion, PointBand, StagedScale};

/// Rockall rebleeding/mortality score for upper GI bleeding:
/// age tiers plus graded shock, comorbidity, diagnosis and stigmata
/// criteria, total 0–11.
pub fn rockall() -> StagedScale {
    StagedScale {
        id: "rockall",
        name: "Rockall",
        max: 11.0,
        criteria: vec![
            Criterion::NumberBands {
                section: "gi_bleeding",
                field: "age_years",
                bands: vec![
                    PointBand {
                        min: 60.0,
                        max: 80.0,
                        points: 1.0,
                    },
                    PointBand {
                        min: 80.0,
                        max: f64::INFINITY,
                        points: 2.0,
                    },
                ],
            },
            Criterion::EnumPoints {
                section: "gi_bleeding",
                field: "shock",
                map: vec![("tachycardia", 1.0), ("hypotension", 2.0)],
            },
            Criterion::EnumPoints {
                section: "gi_bleeding",
                field: "comorbidity",
                map: vec![
                    ("cardiac_or_major", 2.0),
                    ("renal_hepatic_metastatic", 3.0),
                ],
            },
            Criterion::EnumPoints {
                section: "gi_bleeding",
                field: "diagnosis",
                map: vec![("other_diagnosis", 1.0), ("upper_gi_malignancy", 2.0)],
            },
            Criterion::EnumPoints {
                section: "gi_bleeding",
                field: "stigmata",
                map: vec![("blood_or_clot", 2.0)],
            },
        ],
        classes: vec![
            Band {
                min: 0.0,
                label: "Riesgo bajo",
                interpretation: "Rockall ≤2: bajo riesgo de resangrado.",
            },
            Band {
                min: 3.0,
                label: "Riesgo intermedio",
                interpretation: "Rockall 3–7: vigilancia hospitalaria.",
            },
            Band {
                min: 8.0,
                label: "Riesgo alto",
                interpretation: "Rockall ≥8: alto riesgo de resangrado y mortalidad.",
            },
        ],
    }
}
