use crate::scoring::{Band, Criterion, PointBand, StagedScale};

/// Child-Pugh hepatic staging: five sub-criteria (bilirubin, albumin,
/// INR, ascites, encephalopathy) each banded into 1–3 points, summed
/// and mapped to class A/B/C.
pub fn child_pugh() -> StagedScale {
    StagedScale {
        id: "child_pugh",
        name: "Child-Pugh",
        max: 15.0,
        criteria: vec![
            Criterion::NumberBands {
                section: "hepatic",
                field: "bilirubin_mg_dl",
                bands: vec![
                    PointBand {
                        min: 0.0,
                        max: 2.0,
                        points: 1.0,
                    },
                    PointBand {
                        min: 2.0,
                        max: 3.0,
                        points: 2.0,
                    },
                    PointBand {
                        min: 3.0,
                        max: f64::INFINITY,
                        points: 3.0,
                    },
                ],
            },
            Criterion::NumberBands {
                section: "hepatic",
                field: "albumin_g_dl",
                bands: vec![
                    PointBand {
                        min: 3.5,
                        max: f64::INFINITY,
                        points: 1.0,
                    },
                    PointBand {
                        min: 2.8,
                        max: 3.5,
                        points: 2.0,
                    },
                    PointBand {
                        min: 0.0,
                        max: 2.8,
                        points: 3.0,
                    },
                ],
            },
            Criterion::NumberBands {
                section: "hepatic",
                field: "inr",
                bands: vec![
                    PointBand {
                        min: 0.0,
                        max: 1.7,
                        points: 1.0,
                    },
                    PointBand {
                        min: 1.7,
                        max: 2.3,
                        points: 2.0,
                    },
                    PointBand {
                        min: 2.3,
                        max: f64::INFINITY,
                        points: 3.0,
                    },
                ],
            },
            Criterion::EnumPoints {
                section: "hepatic",
                field: "ascites",
                map: vec![("none", 1.0), ("mild", 2.0), ("moderate_severe", 3.0)],
            },
            Criterion::EnumPoints {
                section: "hepatic",
                field: "encephalopathy",
                map: vec![("none", 1.0), ("grade_1_2", 2.0), ("grade_3_4", 3.0)],
            },
        ],
        classes: vec![
            Band {
                min: 0.0,
                label: "Child-Pugh A",
                interpretation: "5–6 puntos: enfermedad compensada.",
            },
            Band {
                min: 7.0,
                label: "Child-Pugh B",
                interpretation: "7–9 puntos: compromiso funcional significativo.",
            },
            Band {
                min: 10.0,
                label: "Child-Pugh C",
                interpretation: "10–15 puntos: enfermedad descompensada; valorar trasplante.",
            },
        ],
    }
}
