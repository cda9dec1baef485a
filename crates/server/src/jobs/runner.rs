//! Job runner: resolves a tool, creates the record, and executes the
//! handler off the request path.

use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::sync::Arc;

use futures_util::FutureExt;
use thiserror::Error;
use tokio::sync::Semaphore;
use toolforge_core::{catalog, HandlerRegistry, JobContext, JobInput};
use uuid::Uuid;

use super::store::{JobStore, StoreError, StoreReporter};
use super::types::JobId;

/// Synchronous submission failures. Anything that happens after `submit`
/// returns is reported through the job record instead.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("no input provided: upload a file or pass a url/text payload")]
    EmptyInput,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a successful submission returns to the client.
#[derive(Debug, Clone, Copy)]
pub struct Submission {
    pub job_id: JobId,
    pub estimated_secs: u32,
}

/// Executes registered handlers on background tasks and guarantees every
/// submitted job reaches a terminal state exactly once.
///
/// Concurrency is bounded by a semaphore rather than one-thread-per-request:
/// submission always returns immediately, and at most `max_concurrent`
/// handlers run at a time while the rest wait for a permit inside their own
/// task.
pub struct JobRunner {
    store: Arc<JobStore>,
    registry: Arc<HandlerRegistry>,
    output_dir: PathBuf,
    permits: Arc<Semaphore>,
}

impl JobRunner {
    pub fn new(registry: Arc<HandlerRegistry>, output_dir: PathBuf, max_concurrent: usize) -> Self {
        Self {
            store: Arc::new(JobStore::new()),
            registry,
            output_dir,
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    pub fn store(&self) -> &Arc<JobStore> {
        &self.store
    }

    /// Validate and schedule a job.
    ///
    /// Fails synchronously for unknown tools and empty payloads — in both
    /// cases no job record is created. On success the record exists in
    /// `processing` before this returns, so an immediate status poll with
    /// the returned id can never miss.
    pub fn submit(&self, tool_name: &str, input: JobInput) -> Result<Submission, SubmitError> {
        let handler = self
            .registry
            .resolve(tool_name)
            .ok_or_else(|| SubmitError::UnknownTool(tool_name.to_string()))?;
        if input.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        let job_id = Uuid::new_v4();
        let estimated_secs = catalog::estimated_secs(tool_name);
        self.store.create(job_id, tool_name, estimated_secs)?;
        tracing::info!(job_id = %job_id, tool = %tool_name, "job submitted");

        let handler = Arc::clone(handler);
        let store = Arc::clone(&self.store);
        let permits = Arc::clone(&self.permits);
        let ctx = JobContext::new(job_id, &self.output_dir);
        let tool = tool_name.to_string();

        tokio::spawn(async move {
            let _permit = match permits.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    // Semaphore closed: runner is going away. Still flip the
                    // job so no client polls `processing` forever.
                    store.fail(job_id, "job runner is shutting down");
                    return;
                }
            };

            let reporter = StoreReporter::new(Arc::clone(&store), job_id);
            let outcome = AssertUnwindSafe(handler.run(&ctx, &input, &reporter))
                .catch_unwind()
                .await;

            match outcome {
                Ok(Ok(artifact)) => {
                    tracing::info!(job_id = %job_id, tool = %tool, file = %artifact.filename, "job completed");
                    store.complete(job_id, artifact);
                }
                Ok(Err(err)) => {
                    tracing::warn!(job_id = %job_id, tool = %tool, error = %err, "job failed");
                    store.fail(job_id, err.to_string());
                }
                Err(_) => {
                    tracing::error!(job_id = %job_id, tool = %tool, "handler panicked");
                    store.fail(job_id, format!("handler for '{tool}' panicked"));
                }
            }
        });

        Ok(Submission {
            job_id,
            estimated_secs,
        })
    }
}
