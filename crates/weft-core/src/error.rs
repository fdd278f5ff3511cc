use thiserror::Error;

use crate::naming::NamingError;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A skeleton handed out by the template provider is missing a piece the
    /// plan needs. This is operator configuration gone wrong, not input.
    #[error("template error: {0}")]
    Template(String),

    #[error("naming error: {0}")]
    Naming(#[from] NamingError),

    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),
}
