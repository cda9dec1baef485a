//! Types for the job-tracking system.

use serde::Serialize;
use toolforge_core::Artifact;
use uuid::Uuid;

/// Unique identifier for a tracked job. Generated at submission, used as the
/// external handle for status, streaming, and download.
pub type JobId = Uuid;

/// Lifecycle state of a job.
///
/// Transitions are monotonic: `Processing → Completed` or
/// `Processing → Failed`, nothing ever leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum JobStatus {
    Processing = 0,
    Completed = 1,
    Failed = 2,
}

impl JobStatus {
    /// Convert a raw `u8` back into a status variant.
    /// Returns `None` for values outside the valid range.
    pub(crate) fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Processing),
            1 => Some(Self::Completed),
            2 => Some(Self::Failed),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

/// Point-in-time view of a job, as returned by the status endpoint.
///
/// Exactly one of `result`/`error` is set once the job is terminal; neither
/// is set while processing.
#[derive(Debug, Clone, Serialize)]
pub struct JobSnapshot {
    pub job_id: JobId,
    pub tool_name: String,
    pub status: JobStatus,
    pub progress: u8,
    /// Seconds since the job was created.
    pub elapsed_time: u64,
    /// Advertised estimate from the tool catalog, in seconds.
    pub estimated_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Artifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_discriminant_round_trip() {
        for status in [JobStatus::Processing, JobStatus::Completed, JobStatus::Failed] {
            assert_eq!(JobStatus::from_u8(status as u8), Some(status));
        }
        assert_eq!(JobStatus::from_u8(3), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!JobStatus::Processing.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn test_snapshot_serialization_omits_unset_outcome() {
        let snap = JobSnapshot {
            job_id: Uuid::new_v4(),
            tool_name: "pdf_merger".into(),
            status: JobStatus::Processing,
            progress: 40,
            elapsed_time: 3,
            estimated_time: 5,
            result: None,
            error: None,
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"status\":\"processing\""));
        assert!(json.contains("\"progress\":40"));
        assert!(!json.contains("\"result\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_snapshot_serialization_with_result() {
        let snap = JobSnapshot {
            job_id: Uuid::new_v4(),
            tool_name: "pdf_merger".into(),
            status: JobStatus::Completed,
            progress: 100,
            elapsed_time: 6,
            estimated_time: 5,
            result: Some(Artifact::from_path("/output/x_merged.pdf")),
            error: None,
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"status\":\"completed\""));
        assert!(json.contains("\"output_path\""));
        assert!(json.contains("x_merged.pdf"));
    }
}
