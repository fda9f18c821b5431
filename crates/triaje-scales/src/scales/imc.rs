use crate::scoring::{Band, FormulaScale};

/// Body mass index: weight (kg) / height² (m). A zero height reads as
/// an unrecorded measurement and scores 0.
pub fn imc() -> FormulaScale {
    FormulaScale {
        id: "imc",
        name: "Índice de masa corporal",
        max: 80.0,
        formula: |record| {
            let weight = record.number("anthropometry", "weight_kg");
            let height = record.number("anthropometry", "height_m");
            if height > 0.0 {
                weight / (height * height)
            } else {
                0.0
            }
        },
        bands: vec![
            Band {
                min: 0.0,
                label: "Bajo peso",
                interpretation: "IMC <18.5: valorar estado nutricional.",
            },
            Band {
                min: 18.5,
                label: "Normopeso",
                interpretation: "IMC 18.5–24.9: dentro del rango saludable.",
            },
            Band {
                min: 25.0,
                label: "Sobrepeso",
                interpretation: "IMC 25–29.9: consejo dietético y actividad física.",
            },
            Band {
                min: 30.0,
                label: "Obesidad grado I",
                interpretation: "IMC 30–34.9: intervención estructurada.",
            },
            Band {
                min: 35.0,
                label: "Obesidad grado II",
                interpretation: "IMC 35–39.9: riesgo metabólico alto.",
            },
            Band {
                min: 40.0,
                label: "Obesidad grado III",
                interpretation: "IMC ≥40: valorar unidad especializada.",
            },
        ],
    }
}
