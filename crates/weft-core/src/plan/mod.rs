//! Compilation of task definitions into schedulable jobs.
//!
//! One supervising job per task, one executor job per step. The supervisor
//! carries everything needed later: the display name and a full JSON copy of
//! the definition as annotations, and the serialized executor jobs inside
//! its invocation payload.
mod payload;

use std::sync::Arc;

use tracing::warn;

use weft_model::{
    ANNOTATION_TASK_JSON, ANNOTATION_TASK_NAME, EnvVar, ExecutorDefinition, Job,
    LABEL_EXECUTOR_NUMBER, LABEL_TASK_ID, MEMORY_UNIT, RESOURCE_CPU, RESOURCE_MEMORY,
    ResourceRequest, TaskDefinition,
};

use crate::{error::CoreError, naming::JobNaming, template::TemplateProvider};

/// Compiles task definitions into a supervisor job plus executor jobs.
///
/// Plan builds for distinct tasks are independent; a `Planner` can be shared
/// across threads.
pub struct Planner {
    templates: Arc<dyn TemplateProvider>,
    naming: Arc<dyn JobNaming>,
}

impl Planner {
    pub fn new(templates: Arc<dyn TemplateProvider>, naming: Arc<dyn JobNaming>) -> Self {
        Self { templates, naming }
    }

    /// Fresh supervisor job annotated with the task's display name.
    pub fn supervisor_job(&self, task: &TaskDefinition) -> Job {
        let mut job = self.templates.supervisor_template();
        job.metadata
            .annotations
            .insert(ANNOTATION_TASK_NAME.to_string(), task.name.clone());
        job
    }

    /// Executor job for one step of the task.
    ///
    /// Command tokens land in container args, never the entrypoint override;
    /// the skeleton's entrypoint stays in charge of invocation. CPU and
    /// memory requests are emitted only for fields present on `resources`,
    /// memory with the explicit unit suffix.
    pub fn executor_job(
        &self,
        task_id: &str,
        task_name: &str,
        executor: &ExecutorDefinition,
        ordinal: usize,
        resources: Option<&ResourceRequest>,
    ) -> Result<Job, CoreError> {
        let mut job = self.templates.executor_template();
        rename_job(&mut job, &self.naming.executor_name(task_id, ordinal))?;

        job.metadata
            .labels
            .insert(LABEL_TASK_ID.to_string(), task_id.to_string());
        job.metadata
            .labels
            .insert(LABEL_EXECUTOR_NUMBER.to_string(), ordinal.to_string());
        job.metadata
            .annotations
            .insert(ANNOTATION_TASK_NAME.to_string(), task_name.to_string());

        let Some(container) = job.first_container_mut() else {
            return Err(CoreError::Template(
                "executor skeleton has no container".to_string(),
            ));
        };
        container.image = executor.image.clone();
        container.args.extend(executor.command.iter().cloned());
        for (name, value) in &executor.env {
            container.env.push(EnvVar::new(name.clone(), value.clone()));
        }
        container.working_dir = executor.workdir.clone();

        if let Some(resources) = resources {
            if let Some(cpu) = resources.cpu_cores {
                container
                    .resources
                    .requests
                    .insert(RESOURCE_CPU.to_string(), cpu.to_string());
            }
            if let Some(ram) = resources.ram_gb {
                container
                    .resources
                    .requests
                    .insert(RESOURCE_MEMORY.to_string(), format!("{ram}{MEMORY_UNIT}"));
            }
        }
        Ok(job)
    }

    /// Full execution plan: the supervisor job carrying the recovery
    /// annotation and the invocation payload with every executor job
    /// embedded.
    ///
    /// A definition that fails to serialize for the recovery annotation is
    /// logged and the annotation omitted; reconstruction from such a job
    /// yields the empty definition instead of failing.
    pub fn encode(&self, task: &TaskDefinition) -> Result<Job, CoreError> {
        let mut supervisor = self.supervisor_job(task);
        let task_id = supervisor.name().to_string();

        match serde_json::to_string(task) {
            Ok(json) => {
                supervisor
                    .metadata
                    .annotations
                    .insert(ANNOTATION_TASK_JSON.to_string(), json);
            }
            Err(err) => {
                warn!(task = %task_id, error = %err, "serializing task for the recovery annotation failed");
            }
        }

        let executors = task
            .executors
            .iter()
            .enumerate()
            .map(|(ordinal, executor)| {
                self.executor_job(&task_id, &task.name, executor, ordinal, task.resources.as_ref())
            })
            .collect::<Result<Vec<_>, _>>()?;

        let payload = payload::invocation_payload(&task_id, task, &executors)?;
        payload::inject(&mut supervisor, &payload)?;
        Ok(supervisor)
    }
}

/// Keep job name, pod-template name and container name consistent; external
/// tooling may match on any of the three.
fn rename_job(job: &mut Job, name: &str) -> Result<(), CoreError> {
    job.metadata.name = name.to_string();
    job.spec.template.metadata.name = name.to_string();
    let container = job
        .first_container_mut()
        .ok_or_else(|| CoreError::Template("executor skeleton has no container".to_string()))?;
    container.name = name.to_string();
    Ok(())
}
