use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid log format: {0} (expected: text|json)")]
    InvalidFormat(String),

    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("logger already initialized")]
    AlreadyInitialized,
}

pub type LogResult<T> = Result<T, LogError>;
