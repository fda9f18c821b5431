use crate::scoring::{Band, FormulaScale};

/// HOMA-IR insulin resistance index: fasting insulin (µU/mL) ×
/// fasting glucose (mg/dL) / 22.5, hasta un tope de 50.
pub fn homa_ir() -> FormulaScale {
    FormulaScale {
        id: "homa_ir",
        name: "HOMA-IR",
        max: 50.0,
        formula: |record| {
            let insulin = record.number("metabolic_labs", "fasting_insulin");
            let glucose = record.number("metabolic_labs", "fasting_glucose");
            insulin * glucose / 22.5
        },
        bands: vec![
            Band {
                min: 0.0,
                label: "Normal",
                interpretation: "Sin evidencia de resistencia a la insulina.",
            },
            Band {
                min: 2.5,
                label: "Resistencia temprana",
                interpretation: "HOMA-IR 2.5–3.7: resistencia incipiente; medidas dietéticas.",
            },
            Band {
                min: 3.8,
                label: "Resistencia significativa",
                interpretation: "HOMA-IR ≥3.8: resistencia establecida; estudio metabólico completo.",
            },
        ],
    }
}
