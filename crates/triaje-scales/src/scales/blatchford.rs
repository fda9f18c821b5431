use crate::scoring::{Band, Criterion, PointBand, StagedScale};

/// Glasgow-Blatchford upper-GI-bleeding score: graded urea,
/// hemoglobin and systolic pressure tiers plus discrete clinical
/// flags, total 0–23.
pub fn glasgow_blatchford() -> StagedScale {
    StagedScale {
        id: "glasgow_blatchford",
        name: "Glasgow-Blatchford",
        max: 23.0,
        criteria: vec![
            Criterion::NumberBands {
                section: "gi_bleeding",
                field: "urea_mmol_l",
                bands: vec![
                    PointBand {
                        min: 6.5,
                        max: 8.0,
                        points: 2.0,
                    },
                    PointBand {
                        min: 8.0,
                        max: 10.0,
                        points: 3.0,
                    },
                    PointBand {
                        min: 10.0,
                        max: 25.0,
                        points: 4.0,
                    },
                    PointBand {
                        min: 25.0,
                        max: f64::INFINITY,
                        points: 6.0,
                    },
                ],
            },
            Criterion::NumberBands {
                section: "gi_bleeding",
                field: "hemoglobin_g_dl",
                bands: vec![
                    PointBand {
                        min: 12.0,
                        max: 13.0,
                        points: 1.0,
                    },
                    PointBand {
                        min: 10.0,
                        max: 12.0,
                        points: 3.0,
                    },
                    PointBand {
                        min: 0.0,
                        max: 10.0,
                        points: 6.0,
                    },
                ],
            },
            Criterion::NumberBands {
                section: "gi_bleeding",
                field: "systolic_bp",
                bands: vec![
                    PointBand {
                        min: 100.0,
                        max: 110.0,
                        points: 1.0,
                    },
                    PointBand {
                        min: 90.0,
                        max: 100.0,
                        points: 2.0,
                    },
                    PointBand {
                        min: 0.1,
                        max: 90.0,
                        points: 3.0,
                    },
                ],
            },
            Criterion::FlagPoints {
                section: "gi_bleeding",
                field: "pulse_over_100",
                points: 1.0,
            },
            Criterion::FlagPoints {
                section: "gi_bleeding",
                field: "melena",
                points: 1.0,
            },
            Criterion::FlagPoints {
                section: "gi_bleeding",
                field: "syncope",
                points: 2.0,
            },
            Criterion::FlagPoints {
                section: "gi_bleeding",
                field: "hepatic_disease",
                points: 2.0,
            },
            Criterion::FlagPoints {
                section: "gi_bleeding",
                field: "cardiac_failure",
                points: 2.0,
            },
        ],
        classes: vec![
            Band {
                min: 0.0,
                label: "Riesgo bajo",
                interpretation: "Candidato a manejo ambulatorio.",
            },
            Band {
                min: 1.0,
                label: "Riesgo intermedio",
                interpretation: "Ingreso y endoscopia programada.",
            },
            Band {
                min: 6.0,
                label: "Riesgo alto",
                interpretation: "Endoscopia urgente; riesgo de intervención.",
            },
        ],
    }
}
