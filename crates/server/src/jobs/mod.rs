//! Asynchronous job-tracking system.
//!
//! Provides:
//! - `JobStore` — synchronized id → state map (the only shared mutable state)
//! - `JobState` — atomic per-job status/progress with a single terminal transition
//! - `JobRunner` — bounded background execution with guaranteed completion
//! - `StoreReporter` — the `ProgressReporter` handlers publish through

pub mod runner;
pub mod state;
pub mod store;
pub mod types;

pub use runner::{JobRunner, SubmitError, Submission};
pub use state::JobState;
pub use store::{JobStore, StoreError, StoreReporter};
pub use types::{JobId, JobSnapshot, JobStatus};
