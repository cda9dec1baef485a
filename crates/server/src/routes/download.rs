//! Artifact download endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio_util::io::ReaderStream;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::jobs::JobStatus;
use crate::state::AppState;

/// GET /api/download/{job_id} - Stream a completed job's artifact.
///
/// The response carries an attachment disposition with the artifact's
/// display filename. Everything that isn't a completed job with a readable
/// artifact is a 404: unknown id, still processing, failed, or the output
/// file has gone missing.
pub async fn download_result(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> ApiResult<Response> {
    let id = Uuid::parse_str(&job_id).map_err(|_| ApiError::JobNotFound(job_id.clone()))?;
    let job = state
        .jobs
        .store()
        .get(id)
        .ok_or_else(|| ApiError::JobNotFound(job_id.clone()))?;

    let snapshot = job.snapshot();
    if snapshot.status != JobStatus::Completed {
        return Err(ApiError::JobNotCompleted(job_id));
    }
    let artifact = snapshot
        .result
        .ok_or_else(|| ApiError::ArtifactMissing(job_id.clone()))?;

    let file = tokio::fs::File::open(&artifact.path).await.map_err(|e| {
        tracing::warn!(job_id = %job_id, path = %artifact.path.display(), error = %e, "artifact unreadable");
        ApiError::ArtifactMissing(job_id.clone())
    })?;

    let body = Body::from_stream(ReaderStream::new(file));
    let headers = [
        (
            header::CONTENT_TYPE,
            "application/octet-stream".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.filename),
        ),
    ];
    Ok((headers, body).into_response())
}

/// Build the download router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/download/{job_id}", get(download_result))
}
