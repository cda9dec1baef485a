//! API route handlers for the toolforge server.

pub mod download;
pub mod health;
pub mod process;
pub mod progress;
pub mod status;
pub mod tools;
pub mod upload;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET  /api/health - Health check
/// - GET  /api/tools - Tool catalog with time estimates
/// - POST /api/upload - Store a multipart file upload
/// - POST /api/process - Submit a job, returns {job_id, estimated_time}
/// - GET  /api/status/{job_id} - Poll a job's status and progress
/// - GET  /api/download/{job_id} - Stream a completed job's artifact
/// - GET  /api/progress/{tool_name} - SSE stream of simulated progress
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", tools::router())
        .nest("/api", upload::router())
        .nest("/api", process::router())
        .nest("/api", status::router())
        .nest("/api", download::router())
        .nest("/api", progress::router())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_api_routes_creation() {
        let state = AppState::new(Config::default());
        let _router = api_routes(state);
    }
}
