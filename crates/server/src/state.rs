//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use toolforge_core::HandlerRegistry;

use crate::config::Config;
use crate::jobs::JobRunner;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Runtime configuration (dirs, port, concurrency cap).
    pub config: Config,
    /// Tool registry, built once at startup and read-only afterwards.
    pub registry: Arc<HandlerRegistry>,
    /// Job runner owning the process-wide job store.
    pub jobs: Arc<JobRunner>,
}

impl AppState {
    /// Create application state with the built-in tool registry, wrapped in
    /// an `Arc` for sharing across handlers.
    pub fn new(config: Config) -> Arc<Self> {
        Self::with_registry(config, Arc::new(HandlerRegistry::builtin()))
    }

    /// Create with an externally-provided registry (for tests that want a
    /// controlled tool set).
    pub fn with_registry(config: Config, registry: Arc<HandlerRegistry>) -> Arc<Self> {
        let jobs = Arc::new(JobRunner::new(
            Arc::clone(&registry),
            config.output_dir.clone(),
            config.max_concurrent_jobs,
        ));
        Arc::new(Self {
            start_time: Instant::now(),
            config,
            registry,
            jobs,
        })
    }

    /// Seconds since the server started.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
