//! Assembly of the supervisor's invocation payload.
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use weft_model::{Job, PAYLOAD_ENV_VAR, PAYLOAD_EXECUTORS_KEY, TaskDefinition, TaskInput, TaskOutput};

use crate::error::CoreError;

/// Slice of the task that rides in the payload alongside the executor jobs.
///
/// CPU and RAM are per-executor concerns already embedded in the executor
/// jobs; only the shared disk requirement travels here.
#[derive(Serialize)]
struct TaskSlice<'a> {
    inputs: &'a [TaskInput],
    outputs: &'a [TaskOutput],
    volumes: &'a [String],
    resources: DiskOnly,
}

#[derive(Serialize)]
struct DiskOnly {
    #[serde(skip_serializing_if = "Option::is_none")]
    disk_gb: Option<f64>,
}

/// Build the merged payload JSON: the task's I/O slice plus the serialized
/// executor jobs.
///
/// A slice that fails to encode is logged and skipped, leaving an
/// executors-only payload. The executors key is inserted last so no
/// colliding key from the slice can displace it.
pub(crate) fn invocation_payload(
    task_id: &str,
    task: &TaskDefinition,
    executors: &[Job],
) -> Result<String, CoreError> {
    let mut payload = Map::new();

    let slice = TaskSlice {
        inputs: &task.inputs,
        outputs: &task.outputs,
        volumes: &task.volumes,
        resources: DiskOnly {
            disk_gb: task.resources.as_ref().and_then(|r| r.disk_gb),
        },
    };
    match serde_json::to_value(&slice) {
        Ok(Value::Object(map)) => payload.extend(map),
        Ok(_) => warn!(task = task_id, "task I/O slice did not serialize to an object"),
        Err(err) => {
            warn!(task = task_id, error = %err, "serializing task I/O for the invocation payload failed");
        }
    }

    payload.insert(
        PAYLOAD_EXECUTORS_KEY.to_string(),
        serde_json::to_value(executors)?,
    );
    Ok(Value::Object(payload).to_string())
}

/// Write the payload into every supervisor container environment entry
/// reserved for it.
///
/// The skeleton must already carry the entry; when a templating slip left
/// several matches, each one receives the same value.
pub(crate) fn inject(supervisor: &mut Job, payload: &str) -> Result<(), CoreError> {
    let container = supervisor
        .first_container_mut()
        .ok_or_else(|| CoreError::Template("supervisor skeleton has no container".to_string()))?;

    for env in container.env.iter_mut().filter(|e| e.name == PAYLOAD_ENV_VAR) {
        env.value = payload.to_string();
    }
    Ok(())
}
