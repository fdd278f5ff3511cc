mod domain;
pub use domain::Observation;
pub use domain::{
    ANNOTATION_TASK_JSON, ANNOTATION_TASK_NAME, LABEL_EXECUTOR_NUMBER, LABEL_TASK_ID, MEMORY_UNIT,
    PAYLOAD_ENV_VAR, PAYLOAD_EXECUTORS_KEY, RESOURCE_CPU, RESOURCE_MEMORY,
};

mod error;
pub use error::{ModelError, ModelResult};

mod job;
pub use job::{
    Container, ContainerState, ContainerStatus, EnvVar, Job, JobSpec, JobStatus, Metadata, Pod,
    PodSpec, PodStatus, PodTemplate, Resources, TerminatedState,
};

mod task;
pub use task::{
    ExecutorDefinition, ExecutorRunLog, LifecycleState, ResourceRequest, TaskCreated,
    TaskDefinition, TaskInput, TaskOutput, TaskRunLog, TaskView,
};
