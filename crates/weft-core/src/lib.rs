//! Mapping core between task definitions and schedulable jobs.
//!
//! One direction compiles a [`weft_model::TaskDefinition`] into a supervisor
//! job plus one executor job per step, with the whole plan embedded in the
//! supervisor as its invocation payload. The other direction reads observed
//! job statuses back into a lifecycle state and a queryable task view.
//!
//! Everything here is a pure synchronous transformation over caller-owned
//! values; submission, watching and persistence belong to external
//! collaborators.
pub mod error;
pub mod naming;
pub mod plan;
pub mod state;
pub mod template;
pub mod view;

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::naming::{JobNaming, NamingError, SuffixNaming};
    pub use crate::plan::Planner;
    pub use crate::state::{classify, derive_state};
    pub use crate::template::{PrototypeTemplates, TemplateProvider};
    pub use crate::view::{executor_run_log, full_view, minimal_view, task_created};
}
