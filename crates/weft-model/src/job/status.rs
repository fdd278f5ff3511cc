use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::Observation;
use crate::job::Metadata;

/// Status snapshot of a job as observed at some instant.
///
/// The three counters are independent observations; see [`Observation`] for
/// the absent-versus-zero distinction. Snapshots of different jobs may have
/// been taken at different instants — no atomic multi-object read exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    /// Runtime units currently executing.
    #[serde(default, skip_serializing_if = "Observation::is_unknown")]
    pub active: Observation,

    /// Runtime units that finished successfully.
    #[serde(default, skip_serializing_if = "Observation::is_unknown")]
    pub succeeded: Observation,

    /// Runtime units that finished with a failure.
    #[serde(default, skip_serializing_if = "Observation::is_unknown")]
    pub failed: Observation,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<OffsetDateTime>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_time: Option<OffsetDateTime>,
}

impl JobStatus {
    /// `true` when nothing has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.active.is_unknown()
            && self.succeeded.is_unknown()
            && self.failed.is_unknown()
            && self.start_time.is_none()
            && self.completion_time.is_none()
    }
}

/// Runtime unit backing one executor job.
///
/// Only the status slice needed for exit-code extraction is modeled; live
/// output retrieval goes through the external log collaborator instead.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PodStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub container_statuses: Vec<ContainerStatus>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ContainerState>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminated: Option<TerminatedState>,
}

/// Terminal state of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminatedState {
    pub exit_code: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;

    #[test]
    fn default_status_is_empty() {
        assert!(JobStatus::default().is_empty());
    }

    #[test]
    fn absent_counters_deserialize_as_unknown() {
        let status: JobStatus = serde_json::from_str(r#"{"active": 1}"#).unwrap();
        assert_eq!(status.active, Observation::Count(1));
        assert!(status.succeeded.is_unknown());
        assert!(status.failed.is_unknown());
    }

    #[test]
    fn zero_counter_stays_distinct_from_absent() {
        let status: JobStatus = serde_json::from_str(r#"{"succeeded": 0}"#).unwrap();
        assert_eq!(status.succeeded, Observation::Count(0));
        assert!(!status.succeeded.is_positive());
        assert!(!status.is_empty());
    }

    #[test]
    fn serde_writes_camel_case_times() {
        let status: JobStatus =
            serde_json::from_str(r#"{"startTime": "2026-02-01T10:30:00Z"}"#).unwrap();
        assert!(status.start_time.is_some());
        assert!(status.completion_time.is_none());

        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("startTime"));
    }

    #[test]
    fn terminated_state_roundtrips_exit_code() {
        let pod: Pod = serde_json::from_str(
            r#"{"status": {"containerStatuses": [{"state": {"terminated": {"exitCode": 3}}}]}}"#,
        )
        .unwrap();

        let code = pod
            .status
            .as_ref()
            .and_then(|s| s.container_statuses.first())
            .and_then(|c| c.state.as_ref())
            .and_then(|s| s.terminated.as_ref())
            .map(|t| t.exit_code);
        assert_eq!(code, Some(3));
    }
}
