//! Skeleton supply for supervisor and executor jobs.
//!
//! What a job skeleton looks like is operator configuration; how a task maps
//! onto it is fixed logic. The provider seam keeps the two apart. Factory
//! semantics: every call returns a fresh skeleton with no state shared
//! between calls, and the supervisor skeleton arrives already uniquely
//! named.
use std::sync::Arc;

use weft_model::Job;

use crate::naming::JobNaming;

/// Source of fresh job skeletons.
pub trait TemplateProvider: Send + Sync {
    /// Fresh supervisor skeleton carrying a new unique name (the task id).
    fn supervisor_template(&self) -> Job;

    /// Fresh executor skeleton; the planner names it afterwards.
    fn executor_template(&self) -> Job;
}

/// Provider backed by prototype jobs cloned on every call.
///
/// The supervisor clone gets its name stamped from the naming collaborator;
/// the executor clone is handed out as-is.
pub struct PrototypeTemplates {
    supervisor: Job,
    executor: Job,
    naming: Arc<dyn JobNaming>,
}

impl PrototypeTemplates {
    pub fn new(supervisor: Job, executor: Job, naming: Arc<dyn JobNaming>) -> Self {
        Self {
            supervisor,
            executor,
            naming,
        }
    }
}

impl TemplateProvider for PrototypeTemplates {
    fn supervisor_template(&self) -> Job {
        let mut job = self.supervisor.clone();
        job.metadata.name = self.naming.task_id();
        job
    }

    fn executor_template(&self) -> Job {
        self.executor.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NamingError;
    use weft_model::Container;

    struct FixedNaming(&'static str);

    impl JobNaming for FixedNaming {
        fn task_id(&self) -> String {
            self.0.to_string()
        }

        fn executor_name(&self, task_id: &str, ordinal: usize) -> String {
            format!("{task_id}-{ordinal}")
        }

        fn executor_ordinal(&self, _task_id: &str, _name: &str) -> Result<usize, NamingError> {
            Ok(0)
        }
    }

    fn mk_prototype() -> Job {
        let mut job = Job::default();
        job.spec.template.spec.containers.push(Container::default());
        job
    }

    #[test]
    fn supervisor_clone_is_stamped_with_task_id() {
        let provider = PrototypeTemplates::new(
            mk_prototype(),
            mk_prototype(),
            Arc::new(FixedNaming("task-0001")),
        );

        let job = provider.supervisor_template();
        assert_eq!(job.name(), "task-0001");
    }

    #[test]
    fn clones_are_independent() {
        let provider = PrototypeTemplates::new(
            mk_prototype(),
            mk_prototype(),
            Arc::new(FixedNaming("task-0001")),
        );

        let mut first = provider.executor_template();
        first.metadata.labels.insert("k".into(), "v".into());

        let second = provider.executor_template();
        assert!(second.metadata.labels.is_empty());
    }
}
