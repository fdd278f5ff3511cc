//! Derivation of a task's lifecycle state from observed job statuses.
use weft_model::{Job, JobStatus, LifecycleState};

use crate::{error::CoreError, naming::JobNaming};

/// Decision table over the supervisor status and the last executor status.
///
/// Evaluated strictly in order — the raw conditions are not mutually
/// exclusive, so the order encodes priority:
///
/// 1. supervisor running, no executor present → `INITIALIZING`
/// 2. supervisor running → `RUNNING`
/// 3. supervisor completed, last executor completed → `COMPLETE`
/// 4. supervisor completed, last executor failed → `EXECUTOR_ERROR`
/// 5. anything else → `SYSTEM_ERROR`
///
/// The supervisor's own success is necessary but not sufficient for task
/// success; the last step's outcome is authoritative. Everything outside the
/// recognized progression collapses to `SYSTEM_ERROR`, the anomaly
/// classification that asks for operator attention.
pub fn classify(supervisor: &JobStatus, last_executor: Option<&JobStatus>) -> LifecycleState {
    let supervisor_running = supervisor.active.is_positive();
    let supervisor_completed = supervisor.succeeded.is_positive();
    let executor_completed = last_executor.is_some_and(|s| s.succeeded.is_positive());
    let executor_failed = last_executor.is_some_and(|s| s.failed.is_positive());

    if supervisor_running && last_executor.is_none() {
        LifecycleState::Initializing
    } else if supervisor_running {
        LifecycleState::Running
    } else if supervisor_completed && executor_completed {
        LifecycleState::Complete
    } else if supervisor_completed && executor_failed {
        LifecycleState::ExecutorError
    } else {
        LifecycleState::SystemError
    }
}

/// Current lifecycle state of the task behind `supervisor`.
///
/// The executor with the numerically highest ordinal (recovered through the
/// naming convention) stands for the task's outcome. Statuses may have been
/// observed at different instants: a supervisor that finished before its
/// last executor's status propagated reads as `SYSTEM_ERROR` until the gap
/// closes, which is an accepted latency artifact. An executor whose name
/// does not follow the naming convention is a hard error.
pub fn derive_state(
    naming: &dyn JobNaming,
    supervisor: &Job,
    executors: &[Job],
) -> Result<LifecycleState, CoreError> {
    let task_id = supervisor.name();

    let mut last: Option<(usize, &Job)> = None;
    for job in executors {
        let ordinal = naming.executor_ordinal(task_id, job.name())?;
        if last.is_none_or(|(seen, _)| ordinal > seen) {
            last = Some((ordinal, job));
        }
    }

    Ok(classify(
        &supervisor.status,
        last.map(|(_, job)| &job.status),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::SuffixNaming;

    use weft_model::Observation;

    fn status(active: Option<u32>, succeeded: Option<u32>, failed: Option<u32>) -> JobStatus {
        JobStatus {
            active: Observation::from(active),
            succeeded: Observation::from(succeeded),
            failed: Observation::from(failed),
            ..Default::default()
        }
    }

    fn job(name: &str, status: JobStatus) -> Job {
        let mut job = Job::default();
        job.metadata.name = name.to_string();
        job.status = status;
        job
    }

    #[test]
    fn running_supervisor_without_executor_is_initializing() {
        let state = classify(&status(Some(1), None, None), None);
        assert_eq!(state, LifecycleState::Initializing);
    }

    #[test]
    fn running_supervisor_with_executor_is_running() {
        let state = classify(
            &status(Some(1), None, None),
            Some(&status(Some(1), None, None)),
        );
        assert_eq!(state, LifecycleState::Running);
    }

    #[test]
    fn completed_supervisor_and_completed_executor_is_complete() {
        let state = classify(
            &status(None, Some(1), None),
            Some(&status(None, Some(1), None)),
        );
        assert_eq!(state, LifecycleState::Complete);
    }

    #[test]
    fn completed_supervisor_and_failed_executor_is_executor_error() {
        let state = classify(
            &status(None, Some(1), None),
            Some(&status(None, None, Some(1))),
        );
        assert_eq!(state, LifecycleState::ExecutorError);
    }

    #[test]
    fn failed_supervisor_is_system_error() {
        assert_eq!(
            classify(&status(None, None, Some(1)), None),
            LifecycleState::SystemError
        );
        assert_eq!(
            classify(
                &status(None, None, Some(1)),
                Some(&status(None, Some(1), None))
            ),
            LifecycleState::SystemError
        );
    }

    #[test]
    fn completed_supervisor_without_executor_is_system_error() {
        let state = classify(&status(None, Some(1), None), None);
        assert_eq!(state, LifecycleState::SystemError);
    }

    #[test]
    fn completed_supervisor_with_undecided_executor_is_system_error() {
        // executor status not yet propagated: all counters unknown
        let state = classify(&status(None, Some(1), None), Some(&JobStatus::default()));
        assert_eq!(state, LifecycleState::SystemError);
    }

    #[test]
    fn zero_counters_do_not_count_as_conditions() {
        // explicit zeros everywhere: neither running nor completed
        let state = classify(
            &status(Some(0), Some(0), Some(0)),
            Some(&status(Some(0), Some(0), Some(0))),
        );
        assert_eq!(state, LifecycleState::SystemError);
    }

    #[test]
    fn running_wins_over_completed_executor() {
        // supervisor still active while the executor already finished
        let state = classify(
            &status(Some(1), None, None),
            Some(&status(None, Some(1), None)),
        );
        assert_eq!(state, LifecycleState::Running);
    }

    #[test]
    fn derive_state_uses_the_highest_ordinal_executor() {
        let naming = SuffixNaming;
        let supervisor = job("task-1", status(None, Some(1), None));
        // ordinal 0 failed, ordinal 1 succeeded: the last one decides
        let executors = vec![
            job("task-1-ex-00", status(None, None, Some(1))),
            job("task-1-ex-01", status(None, Some(1), None)),
        ];

        let state = derive_state(&naming, &supervisor, &executors).unwrap();
        assert_eq!(state, LifecycleState::Complete);
    }

    #[test]
    fn derive_state_order_of_observation_does_not_matter() {
        let naming = SuffixNaming;
        let supervisor = job("task-1", status(None, Some(1), None));
        let executors = vec![
            job("task-1-ex-01", status(None, None, Some(1))),
            job("task-1-ex-00", status(None, Some(1), None)),
        ];

        let state = derive_state(&naming, &supervisor, &executors).unwrap();
        assert_eq!(state, LifecycleState::ExecutorError);
    }

    #[test]
    fn derive_state_with_no_executors_reads_supervisor_alone() {
        let naming = SuffixNaming;
        let supervisor = job("task-1", status(Some(1), None, None));

        let state = derive_state(&naming, &supervisor, &[]).unwrap();
        assert_eq!(state, LifecycleState::Initializing);
    }

    #[test]
    fn derive_state_propagates_naming_violations() {
        let naming = SuffixNaming;
        let supervisor = job("task-1", status(Some(1), None, None));
        let executors = vec![job("unrelated-job", JobStatus::default())];

        let err = derive_state(&naming, &supervisor, &executors).unwrap_err();
        assert!(matches!(err, CoreError::Naming(_)));
    }
}
