//! Naming convention linking supervisor and executor jobs.
//!
//! The supervisor job's name doubles as the task identifier for the task's
//! entire lifetime; every executor job name is derived from it. The inverse
//! direction recovers an executor's ordinal during status derivation, so a
//! name that does not follow the convention is a hard error, never a silent
//! skip.
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("job name {name:?} is not derived from supervisor {supervisor:?}")]
    ForeignName { supervisor: String, name: String },

    #[error("job name {name:?} carries a non-numeric ordinal")]
    BadOrdinal { name: String },
}

/// Naming collaborator: unique task identifiers plus the deterministic
/// supervisor-to-executor name mapping and its inverse.
pub trait JobNaming: Send + Sync {
    /// Produce a fresh unique task identifier, used as the supervisor job
    /// name.
    fn task_id(&self) -> String;

    /// Deterministic name of the executor job at `ordinal` under `task_id`.
    fn executor_name(&self, task_id: &str, ordinal: usize) -> String;

    /// Recover the ordinal encoded in an executor job name.
    fn executor_ordinal(&self, task_id: &str, name: &str) -> Result<usize, NamingError>;
}

const EXECUTOR_INFIX: &str = "-ex-";

/// Default convention: `task-<uuid>` identifiers and a zero-padded
/// `-ex-<NN>` suffix per executor ordinal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuffixNaming;

impl JobNaming for SuffixNaming {
    fn task_id(&self) -> String {
        format!("task-{}", Uuid::new_v4())
    }

    fn executor_name(&self, task_id: &str, ordinal: usize) -> String {
        format!("{task_id}{EXECUTOR_INFIX}{ordinal:02}")
    }

    fn executor_ordinal(&self, task_id: &str, name: &str) -> Result<usize, NamingError> {
        let prefix = format!("{task_id}{EXECUTOR_INFIX}");
        let digits = name
            .strip_prefix(prefix.as_str())
            .ok_or_else(|| NamingError::ForeignName {
                supervisor: task_id.to_string(),
                name: name.to_string(),
            })?;
        digits.parse::<usize>().map_err(|_| NamingError::BadOrdinal {
            name: name.to_string(),
        })
    }
}
