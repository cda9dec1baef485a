//! Process-wide job store: id → state, behind one synchronized interface.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;
use toolforge_core::{Artifact, ProgressError, ProgressReporter};

use super::state::JobState;
use super::types::JobId;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Should never happen with v4 ids, but creation checks it anyway so a
    /// collision can't silently clobber a live job.
    #[error("job id {0} already exists")]
    DuplicateJob(JobId),
}

/// The only shared mutable state in the process.
///
/// Callers never see the map itself — every access goes through these
/// methods. Records are kept for the process lifetime; there is no eviction
/// (deliberate, see DESIGN.md).
pub struct JobStore {
    jobs: RwLock<HashMap<JobId, Arc<JobState>>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new record in `processing` at progress 0.
    pub fn create(
        &self,
        id: JobId,
        tool_name: &str,
        estimated_secs: u32,
    ) -> Result<Arc<JobState>, StoreError> {
        let mut jobs = self.jobs.write().unwrap_or_else(|e| {
            tracing::error!("jobs map lock poisoned, recovering");
            e.into_inner()
        });
        if jobs.contains_key(&id) {
            return Err(StoreError::DuplicateJob(id));
        }
        let state = Arc::new(JobState::new(id, tool_name, estimated_secs));
        jobs.insert(id, Arc::clone(&state));
        Ok(state)
    }

    pub fn get(&self, id: JobId) -> Option<Arc<JobState>> {
        let jobs = self.jobs.read().unwrap_or_else(|e| {
            tracing::error!("jobs map lock poisoned, recovering");
            e.into_inner()
        });
        jobs.get(&id).cloned()
    }

    /// Publish progress for a job. Unknown ids are a silent no-op: a late
    /// report from a finished-and-forgotten worker is not an error.
    pub fn update_progress(&self, id: JobId, percent: u8) {
        if let Some(state) = self.get(id) {
            state.report_progress(percent);
        }
    }

    /// Transition a job to `completed`. No-op for unknown ids and for jobs
    /// already terminal; returns whether this call performed the transition.
    pub fn complete(&self, id: JobId, artifact: Artifact) -> bool {
        self.get(id).is_some_and(|state| state.complete(artifact))
    }

    /// Transition a job to `failed`. Same no-op semantics as [`complete`].
    ///
    /// [`complete`]: JobStore::complete
    pub fn fail(&self, id: JobId, error: impl Into<String>) -> bool {
        self.get(id).is_some_and(|state| state.fail(error))
    }

    pub fn len(&self) -> usize {
        let jobs = self.jobs.read().unwrap_or_else(|e| {
            tracing::error!("jobs map lock poisoned, recovering");
            e.into_inner()
        });
        jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new()
    }
}

/// [`ProgressReporter`] backed by the store, bound to one job.
///
/// Validates range before delegating: a handler reporting above 100 gets an
/// error back instead of a silently clamped write.
pub struct StoreReporter {
    store: Arc<JobStore>,
    job_id: JobId,
}

impl StoreReporter {
    pub fn new(store: Arc<JobStore>, job_id: JobId) -> Self {
        Self { store, job_id }
    }
}

impl ProgressReporter for StoreReporter {
    fn report(&self, percent: u8) -> Result<(), ProgressError> {
        if percent > 100 {
            return Err(ProgressError::OutOfRange { percent });
        }
        self.store.update_progress(self.job_id, percent);
        Ok(())
    }
}
