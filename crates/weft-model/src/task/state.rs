use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Lifecycle state of a task.
///
/// Never stored on its own: always derived from the currently observed
/// supervisor and executor job statuses, so a stale copy cannot drift from
/// reality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    /// Supervisor is up but no executor job exists yet.
    Initializing,
    /// Supervisor is up and executor jobs exist.
    Running,
    /// Supervisor finished and the last executor succeeded.
    Complete,
    /// Supervisor finished but the last executor failed.
    ExecutorError,
    /// Any combination outside the recognized healthy progression.
    SystemError,
}

impl LifecycleState {
    /// Returns the state as its canonical wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Initializing => "INITIALIZING",
            LifecycleState::Running => "RUNNING",
            LifecycleState::Complete => "COMPLETE",
            LifecycleState::ExecutorError => "EXECUTOR_ERROR",
            LifecycleState::SystemError => "SYSTEM_ERROR",
        }
    }

    /// `true` once no further state change is expected for the task.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LifecycleState::Complete | LifecycleState::ExecutorError | LifecycleState::SystemError
        )
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleState {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim() {
            "INITIALIZING" => Ok(LifecycleState::Initializing),
            "RUNNING" => Ok(LifecycleState::Running),
            "COMPLETE" => Ok(LifecycleState::Complete),
            "EXECUTOR_ERROR" => Ok(LifecycleState::ExecutorError),
            "SYSTEM_ERROR" => Ok(LifecycleState::SystemError),
            other => Err(ModelError::UnknownState(other.to_string())),
        }
    }
}
