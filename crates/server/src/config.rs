//! Environment-driven server configuration.

use std::path::PathBuf;

/// Default port for the server.
const DEFAULT_PORT: u16 = 47810;

/// Default cap on concurrently executing handlers.
const DEFAULT_MAX_CONCURRENT_JOBS: usize = 8;

/// Uploads are capped at 100 MB, matching the service's public limit.
pub const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Where the upload endpoint stores incoming files.
    pub upload_dir: PathBuf,
    /// Where handlers write artifacts.
    pub output_dir: PathBuf,
    /// Semaphore size for the job runner.
    pub max_concurrent_jobs: usize,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Priority for the port: `TOOLFORGE_PORT`, then `PORT`, then the
    /// default. Directory and concurrency knobs each have a single
    /// `TOOLFORGE_*` variable.
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("TOOLFORGE_PORT")
                .ok()
                .or_else(|| std::env::var("PORT").ok())
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            upload_dir: std::env::var("TOOLFORGE_UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            output_dir: std::env::var("TOOLFORGE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),
            max_concurrent_jobs: std::env::var("TOOLFORGE_MAX_CONCURRENT_JOBS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_MAX_CONCURRENT_JOBS),
        }
    }

    /// Create the upload and output directories if they do not exist.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.upload_dir)?;
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upload_dir: PathBuf::from("uploads"),
            output_dir: PathBuf::from("output"),
            max_concurrent_jobs: DEFAULT_MAX_CONCURRENT_JOBS,
        }
    }
}
