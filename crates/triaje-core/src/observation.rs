use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::schema::ExamSchema;

/// One captured value. Ordered collections keep iteration (and thus
/// every derived computation) deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Choices(BTreeSet<String>),
}

impl FieldValue {
    /// Whether the value counts as a captured finding: non-empty text,
    /// non-zero number, true flag, or non-empty selection.
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => *n != 0.0,
            FieldValue::Flag(b) => *b,
            FieldValue::Choices(c) => !c.is_empty(),
        }
    }

    pub fn choices(options: &[&str]) -> Self {
        FieldValue::Choices(options.iter().map(|o| o.to_string()).collect())
    }
}

/// The session-scoped tree of captured clinical findings.
///
/// Created empty at session start and mutated only through
/// [`ObservationRecord::set_field`]; every derived value (scores,
/// alerts, urgency, progress, report) is a pure projection of this
/// record and carries no state of its own.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ObservationRecord {
    pub session_id: Uuid,
    sections: BTreeMap<String, BTreeMap<String, FieldValue>>,
}

impl ObservationRecord {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            sections: BTreeMap::new(),
        }
    }

    /// Validate `value` against the schema and store it.
    ///
    /// On rejection the record is untouched: the prior value (if any)
    /// is retained and the rejection is reported to the caller.
    pub fn set_field(
        &mut self,
        schema: &ExamSchema,
        section_id: &str,
        field_id: &str,
        value: FieldValue,
    ) -> Result<(), CoreError> {
        schema.validate_value(section_id, field_id, &value)?;
        self.sections
            .entry(section_id.to_string())
            .or_default()
            .insert(field_id.to_string(), value);
        Ok(())
    }

    pub fn clear_field(&mut self, section_id: &str, field_id: &str) {
        if let Some(fields) = self.sections.get_mut(section_id) {
            fields.remove(field_id);
            if fields.is_empty() {
                self.sections.remove(section_id);
            }
        }
    }

    pub fn get(&self, section_id: &str, field_id: &str) -> Option<&FieldValue> {
        self.sections.get(section_id)?.get(field_id)
    }

    pub fn section(&self, section_id: &str) -> Option<&BTreeMap<String, FieldValue>> {
        self.sections.get(section_id)
    }

    /// Absent or non-text fields read as the empty string.
    pub fn text(&self, section_id: &str, field_id: &str) -> &str {
        match self.get(section_id, field_id) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Absent or non-numeric fields read as zero.
    pub fn number(&self, section_id: &str, field_id: &str) -> f64 {
        match self.get(section_id, field_id) {
            Some(FieldValue::Number(n)) => *n,
            _ => 0.0,
        }
    }

    /// Absent or non-flag fields read as false.
    pub fn flag(&self, section_id: &str, field_id: &str) -> bool {
        matches!(self.get(section_id, field_id), Some(FieldValue::Flag(true)))
    }

    pub fn has_choice(&self, section_id: &str, field_id: &str, option: &str) -> bool {
        match self.get(section_id, field_id) {
            Some(FieldValue::Choices(c)) => c.contains(option),
            _ => false,
        }
    }

    pub fn choice_count(&self, section_id: &str, field_id: &str) -> usize {
        match self.get(section_id, field_id) {
            Some(FieldValue::Choices(c)) => c.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for ObservationRecord {
    fn default() -> Self {
        Self::new()
    }
}
