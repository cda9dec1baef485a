//! The tool handler contract.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::input::{Artifact, JobInput};
use crate::progress::ProgressReporter;

/// What a handler needs from its surrounding job: the id its outputs are
/// namespaced under, and the directory artifacts must land in.
///
/// Output files follow the `{job_id}_{filename}` convention, which keeps
/// concurrent jobs collision-free by construction.
#[derive(Debug, Clone)]
pub struct JobContext {
    pub job_id: Uuid,
    pub output_dir: PathBuf,
}

impl JobContext {
    pub fn new(job_id: Uuid, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            job_id,
            output_dir: output_dir.into(),
        }
    }

    /// Full output path for an artifact named `filename`.
    pub fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(format!("{}_{}", self.job_id, filename))
    }
}

/// Errors a handler can surface. The runner stringifies these into the job
/// record's `error` field; they are never returned to the submitter
/// synchronously.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error(transparent)]
    Progress(#[from] crate::progress::ProgressError),
}

impl HandlerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// The unit of logic behind one tool name.
///
/// Implementations run on a worker task, never on the request path, so they
/// are free to block on file I/O. They report progress at coarse milestones
/// and return the artifact descriptor on success.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn run(
        &self,
        ctx: &JobContext,
        input: &JobInput,
        progress: &dyn ProgressReporter,
    ) -> Result<Artifact, HandlerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_is_namespaced_by_job_id() {
        let id = Uuid::new_v4();
        let ctx = JobContext::new(id, "/data/output");
        let path = ctx.output_path("merged.pdf");
        assert_eq!(
            path,
            PathBuf::from(format!("/data/output/{id}_merged.pdf"))
        );
    }

    #[test]
    fn test_handler_error_display() {
        let err = HandlerError::InvalidInput("no files provided".into());
        assert_eq!(err.to_string(), "invalid input: no files provided");

        let err = HandlerError::io(
            "/up/a.pdf",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/up/a.pdf"));
    }
}
