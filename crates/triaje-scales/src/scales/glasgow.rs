use crate::scoring::{Band, GradedSumScale};

/// Glasgow Coma Scale: ocular (1–4) + verbal (1–5) + motor (1–6),
/// total 15. Components not yet recorded contribute zero, so an
/// untouched record scores 0 rather than the clinical minimum of 3;
/// the host shows nothing until the section is examined.
pub fn glasgow_coma() -> GradedSumScale {
    GradedSumScale {
        id: "glasgow_coma",
        name: "Escala de coma de Glasgow",
        max: 15.0,
        components: vec![
            ("neurological", "gcs_eye"),
            ("neurological", "gcs_verbal"),
            ("neurological", "gcs_motor"),
        ],
        bands: vec![
            Band {
                min: 0.0,
                label: "TCE Severo",
                interpretation: "Glasgow <9: compromiso grave; asegurar vía aérea.",
            },
            Band {
                min: 9.0,
                label: "TCE Moderado",
                interpretation: "Glasgow 9–12: observación estrecha y TAC craneal.",
            },
            Band {
                min: 13.0,
                label: "Normal",
                interpretation: "Glasgow 13–15: sin compromiso significativo de conciencia.",
            },
        ],
    }
}
