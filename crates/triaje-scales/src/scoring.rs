use triaje_core::models::score::ScoreResult;
use triaje_core::observation::{FieldValue, ObservationRecord};

use crate::Scale;

/// A classification band. Bands are listed in ascending `min` order;
/// the band with the highest `min` not exceeding the value applies.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub min: f64,
    pub label: &'static str,
    pub interpretation: &'static str,
}

/// Pick the applicable band for a (clamped) value.
///
/// `bands` are ascending; the first band's `min` should be 0 so every
/// value classifies. An empty table classifies everything as a
/// neutral "Sin clasificar" band, so host-built scales with no bands
/// still compute.
pub fn classify(bands: &[Band], value: f64) -> &Band {
    static NEUTRAL: Band = Band {
        min: 0.0,
        label: "Sin clasificar",
        interpretation: "",
    };
    let mut current = bands.first().unwrap_or(&NEUTRAL);
    for band in bands {
        if value >= band.min {
            current = band;
        }
    }
    current
}

/// One additive term of a weighted scale. Absent fields contribute
/// zero by policy — never an error.
#[derive(Debug, Clone)]
pub enum Contribution {
    /// Fixed points when an enumerated field holds a specific value.
    EnumChoice {
        section: &'static str,
        field: &'static str,
        value: &'static str,
        points: f64,
    },
    /// Fixed points when a flag is set.
    FlagSet {
        section: &'static str,
        field: &'static str,
        points: f64,
    },
    /// Fixed points when a multi-select contains a specific option.
    ChoiceSelected {
        section: &'static str,
        field: &'static str,
        option: &'static str,
        points: f64,
    },
    /// A numeric field multiplied by a weight factor.
    Scaled {
        section: &'static str,
        field: &'static str,
        factor: f64,
    },
}

impl Contribution {
    pub fn points(&self, record: &ObservationRecord) -> f64 {
        match self {
            Contribution::EnumChoice {
                section,
                field,
                value,
                points,
            } => {
                if record.text(section, field) == *value {
                    *points
                } else {
                    0.0
                }
            }
            Contribution::FlagSet {
                section,
                field,
                points,
            } => {
                if record.flag(section, field) {
                    *points
                } else {
                    0.0
                }
            }
            Contribution::ChoiceSelected {
                section,
                field,
                option,
                points,
            } => {
                if record.has_choice(section, field, option) {
                    *points
                } else {
                    0.0
                }
            }
            Contribution::Scaled {
                section,
                field,
                factor,
            } => record.number(section, field) * factor,
        }
    }
}

/// Additive weighted-findings scale (PASI-like, SCORAD-like, risk
/// percentages): sum every contribution, clamp, classify.
pub struct WeightedScale {
    pub id: &'static str,
    pub name: &'static str,
    pub max: f64,
    pub contributions: Vec<Contribution>,
    pub bands: Vec<Band>,
}

impl Scale for WeightedScale {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn max_value(&self) -> f64 {
        self.max
    }

    fn compute(&self, record: &ObservationRecord) -> ScoreResult {
        let raw: f64 = self.contributions.iter().map(|c| c.points(record)).sum();
        let band = classify(&self.bands, raw.clamp(0.0, self.max));
        ScoreResult::new(
            self.id,
            self.name,
            raw,
            self.max,
            band.label,
            band.interpretation,
        )
    }
}

/// Physiologic index (Glasgow Coma Scale, NIHSS): a plain sum of
/// independently-recorded ordinal sub-scores.
pub struct GradedSumScale {
    pub id: &'static str,
    pub name: &'static str,
    pub max: f64,
    /// (section, field) of each numeric component.
    pub components: Vec<(&'static str, &'static str)>,
    pub bands: Vec<Band>,
}

impl Scale for GradedSumScale {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn max_value(&self) -> f64 {
        self.max
    }

    fn compute(&self, record: &ObservationRecord) -> ScoreResult {
        let raw: f64 = self
            .components
            .iter()
            .map(|(section, field)| record.number(section, field))
            .sum();
        let band = classify(&self.bands, raw.clamp(0.0, self.max));
        ScoreResult::new(
            self.id,
            self.name,
            raw,
            self.max,
            band.label,
            band.interpretation,
        )
    }
}

/// Direct arithmetic formula (HOMA-IR, BMI) with interpretation bands.
pub struct FormulaScale {
    pub id: &'static str,
    pub name: &'static str,
    pub max: f64,
    pub formula: fn(&ObservationRecord) -> f64,
    pub bands: Vec<Band>,
}

impl Scale for FormulaScale {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn max_value(&self) -> f64 {
        self.max
    }

    fn compute(&self, record: &ObservationRecord) -> ScoreResult {
        let raw = (self.formula)(record);
        let raw = if raw.is_finite() { raw } else { 0.0 };
        let band = classify(&self.bands, raw.clamp(0.0, self.max));
        ScoreResult::new(
            self.id,
            self.name,
            raw,
            self.max,
            band.label,
            band.interpretation,
        )
    }
}

/// A numeric band of a staged criterion: `min` inclusive, `max`
/// exclusive (use `f64::INFINITY` for open-ended tiers).
#[derive(Debug, Clone, Copy)]
pub struct PointBand {
    pub min: f64,
    pub max: f64,
    pub points: f64,
}

/// One graded sub-criterion of a staged scale. Numeric criteria only
/// score once the field is actually recorded; an untouched lab value
/// contributes zero rather than its lowest tier.
#[derive(Debug, Clone)]
pub enum Criterion {
    NumberBands {
        section: &'static str,
        field: &'static str,
        bands: Vec<PointBand>,
    },
    EnumPoints {
        section: &'static str,
        field: &'static str,
        map: Vec<(&'static str, f64)>,
    },
    FlagPoints {
        section: &'static str,
        field: &'static str,
        points: f64,
    },
}

impl Criterion {
    pub fn points(&self, record: &ObservationRecord) -> f64 {
        match self {
            Criterion::NumberBands {
                section,
                field,
                bands,
            } => match record.get(section, field) {
                Some(FieldValue::Number(n)) => bands
                    .iter()
                    .find(|b| *n >= b.min && *n < b.max)
                    .map(|b| b.points)
                    .unwrap_or(0.0),
                _ => 0.0,
            },
            Criterion::EnumPoints {
                section,
                field,
                map,
            } => {
                let value = record.text(section, field);
                map.iter()
                    .find(|(option, _)| *option == value)
                    .map(|(_, points)| *points)
                    .unwrap_or(0.0)
            }
            Criterion::FlagPoints {
                section,
                field,
                points,
            } => {
                if record.flag(section, field) {
                    *points
                } else {
                    0.0
                }
            }
        }
    }
}

/// Staged scoring (Child-Pugh, Glasgow-Blatchford, Rockall): each
/// sub-criterion is independently banded into point tiers, the tiers
/// are summed, and the total maps to a named class.
pub struct StagedScale {
    pub id: &'static str,
    pub name: &'static str,
    pub max: f64,
    pub criteria: Vec<Criterion>,
    pub classes: Vec<Band>,
}

impl Scale for StagedScale {
    fn id(&self) -> &str {
        self.id
    }

    fn name(&self) -> &str {
        self.name
    }

    fn max_value(&self) -> f64 {
        self.max
    }

    fn compute(&self, record: &ObservationRecord) -> ScoreResult {
        let raw: f64 = self.criteria.iter().map(|c| c.points(record)).sum();
        let class = classify(&self.classes, raw.clamp(0.0, self.max));
        ScoreResult::new(
            self.id,
            self.name,
            raw,
            self.max,
            class.label,
            class.interpretation,
        )
    }
}
