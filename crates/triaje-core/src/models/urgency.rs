use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordinal triage classification of the whole exam.
/// Totally ordered: `Normal < Observacion < Prioritario < Critico`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UrgencyLevel {
    #[default]
    Normal,
    Observacion,
    Prioritario,
    Critico,
}

impl UrgencyLevel {
    pub fn label(self) -> &'static str {
        match self {
            UrgencyLevel::Normal => "Normal",
            UrgencyLevel::Observacion => "Observación",
            UrgencyLevel::Prioritario => "Prioritario",
            UrgencyLevel::Critico => "Crítico",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
