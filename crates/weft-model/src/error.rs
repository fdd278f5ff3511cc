use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown lifecycle state: {0}")]
    UnknownState(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
