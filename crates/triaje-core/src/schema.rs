use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::observation::FieldValue;

/// The kind of value a field accepts, including its enumerated domain
/// where one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Exactly one of a fixed set of options.
    Enumerated { options: Vec<String> },
    /// A finite numeric value. Plausibility is not enforced here:
    /// out-of-range entries are preserved verbatim for audit fidelity
    /// and bounded downstream by score clamping.
    Number,
    /// A yes/no finding.
    Flag,
    /// Any subset of a fixed set of options.
    MultiSelect { options: Vec<String> },
}

/// One capturable field within a section.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
}

/// A named group of fields, matching one form section in the host UI.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionSpec {
    pub id: String,
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

/// Declarative description of everything one exam form captures.
/// Drives value validation, progress totals, and report section order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExamSchema {
    pub title: String,
    pub sections: Vec<SectionSpec>,
}

impl ExamSchema {
    pub fn new(title: impl Into<String>, sections: Vec<SectionSpec>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }

    pub fn section(&self, section_id: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn field(&self, section_id: &str, field_id: &str) -> Option<&FieldSpec> {
        self.section(section_id)
            .and_then(|s| s.fields.iter().find(|f| f.id == field_id))
    }

    /// Check a candidate value against the field's declared domain.
    ///
    /// Rejects unknown sections/fields, kind mismatches, non-finite
    /// numbers, and enumerated/multi-select values outside their
    /// option lists.
    pub fn validate_value(
        &self,
        section_id: &str,
        field_id: &str,
        value: &FieldValue,
    ) -> Result<(), CoreError> {
        let Some(section) = self.section(section_id) else {
            return Err(CoreError::UnknownSection(section_id.to_string()));
        };
        let Some(field) = section.fields.iter().find(|f| f.id == field_id) else {
            return Err(CoreError::UnknownField {
                section: section_id.to_string(),
                field: field_id.to_string(),
            });
        };

        let reject = |reason: String| CoreError::InvalidFieldValue {
            section: section_id.to_string(),
            field: field_id.to_string(),
            reason,
        };

        match (&field.kind, value) {
            (FieldKind::Text, FieldValue::Text(_)) => Ok(()),
            (FieldKind::Flag, FieldValue::Flag(_)) => Ok(()),
            (FieldKind::Number, FieldValue::Number(n)) => {
                if n.is_finite() {
                    Ok(())
                } else {
                    Err(reject(format!("non-finite number: {n}")))
                }
            }
            (FieldKind::Enumerated { options }, FieldValue::Text(v)) => {
                if v.is_empty() || options.iter().any(|o| o == v) {
                    Ok(())
                } else {
                    Err(reject(format!("'{v}' is not one of {options:?}")))
                }
            }
            (FieldKind::MultiSelect { options }, FieldValue::Choices(chosen)) => {
                match chosen.iter().find(|c| !options.contains(*c)) {
                    None => Ok(()),
                    Some(bad) => Err(reject(format!("'{bad}' is not one of {options:?}"))),
                }
            }
            (kind, value) => Err(reject(format!(
                "value {value:?} does not match declared kind {kind:?}"
            ))),
        }
    }
}

pub fn text(id: &str, name: &str) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        name: name.to_string(),
        kind: FieldKind::Text,
    }
}

pub fn enumerated(id: &str, name: &str, options: &[&str]) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        name: name.to_string(),
        kind: FieldKind::Enumerated {
            options: options.iter().map(|o| o.to_string()).collect(),
        },
    }
}

pub fn number(id: &str, name: &str) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        name: name.to_string(),
        kind: FieldKind::Number,
    }
}

pub fn flag(id: &str, name: &str) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        name: name.to_string(),
        kind: FieldKind::Flag,
    }
}

pub fn multi_select(id: &str, name: &str, options: &[&str]) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        name: name.to_string(),
        kind: FieldKind::MultiSelect {
            options: options.iter().map(|o| o.to_string()).collect(),
        },
    }
}

pub fn section(id: &str, name: &str, fields: Vec<FieldSpec>) -> SectionSpec {
    SectionSpec {
        id: id.to_string(),
        name: name.to_string(),
        fields,
    }
}
