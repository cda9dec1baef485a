//! Progress-reporting seam between running handlers and the job store.
//!
//! Handlers receive a `&dyn ProgressReporter` and publish percentage
//! milestones through it. The trait is sync on purpose: the server backs it
//! with atomic counters, so reports never need to await and never block the
//! handler's own I/O.

use thiserror::Error;

/// A progress value outside `0..=100` is a handler bug, not a runtime
/// condition — reporting fails fast instead of clamping so tests catch it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("progress {percent} is out of range (must be 0-100)")]
    OutOfRange { percent: u8 },
}

/// Handle a running handler uses to publish completion percentage.
///
/// Values are expected to be non-decreasing; the store additionally enforces
/// monotonicity, so a stale late report can never move a job backwards.
pub trait ProgressReporter: Send + Sync {
    /// Publish a completion percentage in `0..=100`.
    fn report(&self, percent: u8) -> Result<(), ProgressError>;
}

/// Reporter that validates and discards. For tests and detached runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn report(&self, percent: u8) -> Result<(), ProgressError> {
        if percent > 100 {
            return Err(ProgressError::OutOfRange { percent });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_reporter_accepts_valid_range() {
        let reporter = NullReporter;
        assert!(reporter.report(0).is_ok());
        assert!(reporter.report(55).is_ok());
        assert!(reporter.report(100).is_ok());
    }

    #[test]
    fn test_null_reporter_rejects_out_of_range() {
        let reporter = NullReporter;
        assert_eq!(
            reporter.report(101),
            Err(ProgressError::OutOfRange { percent: 101 })
        );
    }
}
