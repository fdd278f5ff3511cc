//! Well-known keys of the job-scheduling contract.
//!
//! Any external integration that submits, watches or queries the produced
//! jobs must honor these keys exactly. Keeping them here avoids scattering
//! magic strings throughout the codebase.

/// Supervisor (and executor) annotation carrying the task's display name.
pub const ANNOTATION_TASK_NAME: &str = "task-name";

/// Supervisor annotation carrying the full task definition as JSON.
///
/// This is the recovery copy used to rebuild task views without a separate
/// store; see `full_view` in the core crate.
pub const ANNOTATION_TASK_JSON: &str = "task-json";

/// Executor label carrying the task identifier, for correlation queries.
pub const LABEL_TASK_ID: &str = "task-id";

/// Executor label carrying the stringified executor ordinal.
pub const LABEL_EXECUTOR_NUMBER: &str = "executor-number";

/// Name of the supervisor container environment variable reserved for the
/// invocation payload.
pub const PAYLOAD_ENV_VAR: &str = "JSON_INPUT";

/// Key under which the serialized executor jobs sit inside the payload.
pub const PAYLOAD_EXECUTORS_KEY: &str = "executors";

/// Resource-request key for CPU cores.
pub const RESOURCE_CPU: &str = "cpu";

/// Resource-request key for memory.
pub const RESOURCE_MEMORY: &str = "memory";

/// Unit suffix appended to memory request values (gibibytes).
pub const MEMORY_UNIT: &str = "Gi";
