use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::task::{definition::TaskDefinition, state::LifecycleState};

/// Task as reconstructed from the supervisor job and its executor jobs.
///
/// The minimal variant populates `id` and `state` only; the full variant
/// adds the recovered definition, the creation timestamp and one run log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskView {
    /// Task identifier; equal to the supervisor job name.
    pub id: String,

    /// Lifecycle state derived from the current job statuses.
    pub state: LifecycleState,

    /// Definition recovered from the supervisor job, or the empty definition
    /// when the recovery data is missing or unreadable.
    #[serde(flatten)]
    pub task: TaskDefinition,

    /// When the supervisor job was created.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<OffsetDateTime>,

    /// Observed execution records, one per supervisor run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<TaskRunLog>,
}

/// Observed timeline of one supervisor run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRunLog {
    /// When the supervisor started; absent until it has.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<OffsetDateTime>,

    /// When the supervisor completed; absent until it has.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<OffsetDateTime>,
}

/// Observed timeline and outcome of one executor job.
///
/// Captured process output is not part of this record; it is fetched by the
/// external log-retrieval collaborator keyed by the runtime unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutorRunLog {
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<OffsetDateTime>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<OffsetDateTime>,

    /// Exit code of the executor's runtime unit, absent until it terminated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

/// Submission receipt: the identifier under which the task can be queried.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreated {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn view_serializes_definition_inline() {
        let view = TaskView {
            id: "task-1".into(),
            state: LifecycleState::Running,
            task: TaskDefinition {
                name: "demo".into(),
                ..Default::default()
            },
            creation_time: None,
            logs: Vec::new(),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "task-1");
        assert_eq!(json["state"], "RUNNING");
        // flattened definition fields sit on the top level
        assert_eq!(json["name"], "demo");
    }

    #[test]
    fn creation_time_uses_rfc3339() {
        let view = TaskView {
            id: "task-1".into(),
            state: LifecycleState::Complete,
            task: TaskDefinition::default(),
            creation_time: Some(datetime!(2026-02-01 10:30:00 UTC)),
            logs: vec![TaskRunLog::default()],
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["creation_time"], "2026-02-01T10:30:00Z");
    }

    #[test]
    fn run_log_times_are_independently_optional() {
        let log = TaskRunLog {
            start_time: Some(datetime!(2026-02-01 10:30:00 UTC)),
            end_time: None,
        };

        let json = serde_json::to_value(log).unwrap();
        assert!(json.get("start_time").is_some());
        assert!(json.get("end_time").is_none());
    }

    #[test]
    fn executor_log_without_termination_has_no_exit_code() {
        let json = serde_json::to_value(ExecutorRunLog::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
