use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("unknown field '{field}' in section '{section}'")]
    UnknownField { section: String, field: String },

    #[error("invalid value for '{section}.{field}': {reason}")]
    InvalidFieldValue {
        section: String,
        field: String,
        reason: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
