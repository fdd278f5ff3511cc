mod constants;
pub use constants::{
    ANNOTATION_TASK_JSON, ANNOTATION_TASK_NAME, LABEL_EXECUTOR_NUMBER, LABEL_TASK_ID, MEMORY_UNIT,
    PAYLOAD_ENV_VAR, PAYLOAD_EXECUTORS_KEY, RESOURCE_CPU, RESOURCE_MEMORY,
};

mod observation;
pub use observation::Observation;
