//! Job status polling endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::jobs::JobSnapshot;
use crate::state::AppState;

/// GET /api/status/{job_id} - Current snapshot of a job.
///
/// Returns status, monotonic progress, elapsed and estimated seconds, and —
/// once the job is terminal — its result or error. Unknown and malformed
/// ids both fail closed with a 404.
pub async fn job_status(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> ApiResult<Json<JobSnapshot>> {
    let id = Uuid::parse_str(&job_id).map_err(|_| ApiError::JobNotFound(job_id.clone()))?;
    let job = state
        .jobs
        .store()
        .get(id)
        .ok_or_else(|| ApiError::JobNotFound(job_id))?;
    Ok(Json(job.snapshot()))
}

/// Build the status router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/status/{job_id}", get(job_status))
}
