use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),
}
