//! Job submission endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use toolforge_core::JobInput;

use crate::error::ApiResult;
use crate::jobs::JobId;
use crate::state::AppState;

/// POST /api/process request body.
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub tool_name: String,
    #[serde(flatten)]
    pub input: JobInput,
}

/// Response for an accepted submission.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ProcessResponse {
    pub job_id: JobId,
    /// Advertised estimate in seconds, echoed for progress-bar sizing.
    pub estimated_time: u32,
}

/// POST /api/process - Submit a job.
///
/// Resolves the tool, creates the job record, and schedules background
/// execution; returns as soon as the record exists. Unknown tools are a 404
/// and empty payloads a 400, in both cases without creating a job.
pub async fn process_tool(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProcessRequest>,
) -> ApiResult<Json<ProcessResponse>> {
    let submission = state.jobs.submit(&request.tool_name, request.input)?;
    Ok(Json(ProcessResponse {
        job_id: submission.job_id,
        estimated_time: submission.estimated_secs,
    }))
}

/// Build the process router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/process", post(process_tool))
}
