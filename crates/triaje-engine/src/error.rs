use thiserror::Error;

use triaje_core::error::CoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("field update rejected: {0}")]
    FieldUpdate(#[from] CoreError),

    #[error("unknown scale: {0}")]
    UnknownScale(String),
}
