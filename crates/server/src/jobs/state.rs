//! Per-job state with atomic progress tracking.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::RwLock;
use std::time::Instant;

use toolforge_core::Artifact;

use super::types::{JobId, JobSnapshot, JobStatus};

/// State for a single tracked job.
///
/// Status and progress use lock-free atomics so the worker task can publish
/// updates while any number of status polls read them without contention.
/// The terminal outcome sits behind an `RwLock`; that lock is also the
/// serialization point for the one-and-only terminal transition, so a
/// reader can never observe a terminal status with no outcome attached.
#[derive(Debug)]
pub struct JobState {
    id: JobId,
    tool_name: String,
    estimated_secs: u32,
    started: Instant,
    status: AtomicU8,
    progress: AtomicU8,
    outcome: RwLock<Option<Result<Artifact, String>>>,
}

impl JobState {
    pub fn new(id: JobId, tool_name: impl Into<String>, estimated_secs: u32) -> Self {
        Self {
            id,
            tool_name: tool_name.into(),
            estimated_secs,
            started: Instant::now(),
            status: AtomicU8::new(JobStatus::Processing as u8),
            progress: AtomicU8::new(0),
            outcome: RwLock::new(None),
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn status(&self) -> JobStatus {
        JobStatus::from_u8(self.status.load(Ordering::Relaxed)).unwrap_or(JobStatus::Failed)
    }

    pub fn progress(&self) -> u8 {
        self.progress.load(Ordering::Relaxed)
    }

    /// Publish a progress value.
    ///
    /// `fetch_max` keeps the counter monotonic even if a slow milestone
    /// arrives out of order, and a terminal job ignores late reports
    /// entirely — progress is pinned at 100 once finished.
    pub fn report_progress(&self, percent: u8) {
        if self.status().is_terminal() {
            return;
        }
        self.progress.fetch_max(percent.min(100), Ordering::Relaxed);
    }

    /// Mark the job completed with its artifact. Returns false if the job
    /// was already terminal (first terminal write wins).
    pub fn complete(&self, artifact: Artifact) -> bool {
        self.finish(Ok(artifact))
    }

    /// Mark the job failed with a human-readable description. Returns false
    /// if the job was already terminal.
    pub fn fail(&self, error: impl Into<String>) -> bool {
        self.finish(Err(error.into()))
    }

    fn finish(&self, outcome: Result<Artifact, String>) -> bool {
        let mut guard = self.outcome.write().unwrap_or_else(|e| {
            tracing::error!(job_id = %self.id, "outcome lock poisoned, recovering");
            e.into_inner()
        });
        if guard.is_some() {
            return false;
        }
        let status = if outcome.is_ok() {
            JobStatus::Completed
        } else {
            JobStatus::Failed
        };
        *guard = Some(outcome);
        self.progress.store(100, Ordering::Relaxed);
        self.status.store(status as u8, Ordering::Relaxed);
        true
    }

    /// Point-in-time view for the read side.
    pub fn snapshot(&self) -> JobSnapshot {
        // Take the outcome lock first: the writer updates outcome, progress,
        // and status while holding it, so a snapshot sees either all of a
        // terminal transition or none of it.
        let outcome = self.outcome.read().unwrap_or_else(|e| {
            tracing::error!(job_id = %self.id, "outcome lock poisoned, recovering");
            e.into_inner()
        });
        let (result, error) = match &*outcome {
            Some(Ok(artifact)) => (Some(artifact.clone()), None),
            Some(Err(message)) => (None, Some(message.clone())),
            None => (None, None),
        };
        JobSnapshot {
            job_id: self.id,
            tool_name: self.tool_name.clone(),
            status: self.status(),
            progress: self.progress(),
            elapsed_time: self.started.elapsed().as_secs(),
            estimated_time: self.estimated_secs,
            result,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn state() -> JobState {
        JobState::new(Uuid::new_v4(), "pdf_merger", 5)
    }

    #[test]
    fn test_new_job_is_processing_at_zero() {
        let job = state();
        let snap = job.snapshot();
        assert_eq!(snap.status, JobStatus::Processing);
        assert_eq!(snap.progress, 0);
        assert_eq!(snap.estimated_time, 5);
        assert!(snap.result.is_none());
        assert!(snap.error.is_none());
    }

    #[test]
    fn test_progress_is_monotonic() {
        let job = state();
        job.report_progress(40);
        assert_eq!(job.progress(), 40);
        job.report_progress(20);
        assert_eq!(job.progress(), 40, "lower report must not move progress back");
        job.report_progress(90);
        assert_eq!(job.progress(), 90);
    }

    #[test]
    fn test_complete_sets_result_and_pins_progress() {
        let job = state();
        job.report_progress(60);
        assert!(job.complete(Artifact::from_path("/out/x_merged.pdf")));

        let snap = job.snapshot();
        assert_eq!(snap.status, JobStatus::Completed);
        assert_eq!(snap.progress, 100);
        assert!(snap.result.is_some());
        assert!(snap.error.is_none());
    }

    #[test]
    fn test_fail_sets_error_only() {
        let job = state();
        assert!(job.fail("handler exploded"));

        let snap = job.snapshot();
        assert_eq!(snap.status, JobStatus::Failed);
        assert_eq!(snap.progress, 100);
        assert!(snap.result.is_none());
        assert_eq!(snap.error.as_deref(), Some("handler exploded"));
    }

    #[test]
    fn test_first_terminal_write_wins() {
        let job = state();
        assert!(job.complete(Artifact::from_path("/out/a.pdf")));
        assert!(!job.fail("too late"));
        assert!(!job.complete(Artifact::from_path("/out/b.pdf")));

        let snap = job.snapshot();
        assert_eq!(snap.status, JobStatus::Completed);
        assert_eq!(snap.result.unwrap().filename, "a.pdf");
        assert!(snap.error.is_none());
    }

    #[test]
    fn test_terminal_job_ignores_late_progress() {
        let job = state();
        job.fail("boom");
        job.report_progress(10);
        assert_eq!(job.progress(), 100);
    }

    #[test]
    fn test_concurrent_reports_never_decrease() {
        use std::sync::Arc;

        let job = Arc::new(state());
        let mut handles = Vec::new();
        for step in 0..4u8 {
            let job = Arc::clone(&job);
            handles.push(std::thread::spawn(move || {
                for p in (step * 25)..=(step * 25 + 25) {
                    job.report_progress(p);
                }
            }));
        }

        let reader = {
            let job = Arc::clone(&job);
            std::thread::spawn(move || {
                let mut last = 0;
                for _ in 0..1000 {
                    let p = job.progress();
                    assert!(p >= last, "observed progress decrease: {last} -> {p}");
                    last = p;
                }
            })
        };

        for h in handles {
            h.join().unwrap();
        }
        reader.join().unwrap();
        assert_eq!(job.progress(), 100);
    }
}
