use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Read-only patient identity, supplied by the host and used only by
/// the report synthesizer. The engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientIdentity {
    pub name: String,
    pub age: u32,
    pub gender: String,
}
