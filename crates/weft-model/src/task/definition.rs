use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::task::io::{TaskInput, TaskOutput};

/// Declarative description of a task: what to run and what it needs.
///
/// Immutable once submitted; the sole source of truth for planning. Executor
/// order is significant — the position in `executors` is the ordinal used
/// for job naming and status derivation.
///
/// `Default` yields the empty definition, which doubles as the fallback when
/// a stored copy cannot be recovered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Display name of the task.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Ordered executable steps. Must not be empty for a submittable task.
    #[serde(default)]
    pub executors: Vec<ExecutorDefinition>,

    /// Resource requirements shared by all steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequest>,

    /// Files staged into the task workspace before the first step runs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<TaskInput>,

    /// Files collected from the task workspace after the last step.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<TaskOutput>,

    /// Workspace paths shared between executors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
}

/// One executable step of a task.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutorDefinition {
    /// Container image reference (e.g. "alpine:3.20").
    pub image: String,

    /// Command tokens. Mapped to container arguments at plan time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    /// Working directory inside the container. If `None`, the image default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workdir: Option<PathBuf>,

    /// Environment variables for the step; keys are unique.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

/// Requested resources. An absent field emits no corresponding constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceRequest {
    /// CPU core count per executor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,

    /// RAM per executor, in gigabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_gb: Option<f64>,

    /// Disk size for the shared workspace, in gigabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_gb: Option<f64>,
}
