//! Reconstruction of task views from observed job objects.
//!
//! The supervisor job carries everything needed to answer queries: its name
//! is the task identifier, its `task-json` annotation holds the recovery
//! copy of the definition, and its status holds the run timeline. Nothing
//! here touches the scheduling substrate.
use tracing::warn;

use weft_model::{
    ANNOTATION_TASK_JSON, ExecutorRunLog, Job, Pod, TaskCreated, TaskDefinition, TaskRunLog,
    TaskView,
};

use crate::{error::CoreError, naming::JobNaming, state::derive_state};

/// Identifier and state only — the cheapest view of a task.
pub fn minimal_view(
    naming: &dyn JobNaming,
    supervisor: &Job,
    executors: &[Job],
) -> Result<TaskView, CoreError> {
    Ok(TaskView {
        id: supervisor.name().to_string(),
        state: derive_state(naming, supervisor, executors)?,
        task: TaskDefinition::default(),
        creation_time: None,
        logs: Vec::new(),
    })
}

/// Everything recoverable without touching runtime units: the stored
/// definition, the derived state and the supervisor's own timeline.
///
/// A missing or unreadable recovery annotation degrades to the empty
/// definition. With `redact_input_content`, inline input payloads are
/// cleared while the rest of each input stays intact, so large embedded
/// data is not re-transmitted on every query.
pub fn full_view(
    naming: &dyn JobNaming,
    supervisor: &Job,
    executors: &[Job],
    redact_input_content: bool,
) -> Result<TaskView, CoreError> {
    let mut task = recover_definition(supervisor);
    if redact_input_content {
        for input in &mut task.inputs {
            input.content = None;
        }
    }

    let mut view = minimal_view(naming, supervisor, executors)?;
    view.task = task;
    view.creation_time = supervisor.metadata.creation_timestamp;
    view.logs.push(TaskRunLog {
        start_time: supervisor.status.start_time,
        end_time: supervisor.status.completion_time,
    });
    Ok(view)
}

fn recover_definition(supervisor: &Job) -> TaskDefinition {
    let Some(json) = supervisor.metadata.annotations.get(ANNOTATION_TASK_JSON) else {
        warn!(task = %supervisor.name(), "supervisor job carries no recovery annotation");
        return TaskDefinition::default();
    };
    match serde_json::from_str(json) {
        Ok(task) => task,
        Err(err) => {
            warn!(task = %supervisor.name(), error = %err, "decoding the recovery annotation failed");
            TaskDefinition::default()
        }
    }
}

/// Timeline of one executor job plus the exit code of its runtime unit.
///
/// Start and end come from the job status, the exit code from the first
/// observed terminated container state; each is absent until observed.
/// Captured output is not part of this record — log retrieval is keyed by
/// the runtime unit and handled externally.
pub fn executor_run_log(job: &Job, pod: &Pod) -> ExecutorRunLog {
    ExecutorRunLog {
        start_time: job.status.start_time,
        end_time: job.status.completion_time,
        exit_code: pod
            .status
            .as_ref()
            .and_then(|status| status.container_statuses.first())
            .and_then(|container| container.state.as_ref())
            .and_then(|state| state.terminated.as_ref())
            .map(|terminated| terminated.exit_code),
    }
}

/// Submission receipt for a freshly built plan.
pub fn task_created(supervisor: &Job) -> TaskCreated {
    TaskCreated {
        id: supervisor.name().to_string(),
    }
}
