//! Simulated progress stream (SSE).
//!
//! This feed is decoupled from real job state: given a tool, it plays a
//! synthetic progress sequence paced by the tool's time estimate. The UI
//! uses it to animate a believable progress bar for tools whose handlers
//! report no fine-grained milestones of their own.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    response::sse::{Event, Sse},
    routing::get,
    Router,
};
use serde::Deserialize;
use toolforge_core::catalog;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for the stream.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ProgressQuery {
    /// Override the catalog estimate (seconds).
    pub estimate: Option<u32>,
    /// Real job id to point the terminal event's download link at.
    pub job_id: Option<Uuid>,
}

/// One synthetic `running` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SimulatedStep {
    pub progress: u8,
    pub message: &'static str,
    pub delay: Duration,
}

/// Derive the step sequence for an estimate.
///
/// Step count is the estimate clamped to 10..=50 so short tools still
/// animate and long tools don't spam; the per-step delay is the estimate
/// spread across those steps, clamped to 100ms..=1s. The terminal step is
/// not included — the stream emits `completed` separately, exactly once.
pub(crate) fn schedule(estimated_secs: u32) -> Vec<SimulatedStep> {
    let steps = estimated_secs.clamp(10, 50);
    let delay = Duration::from_secs_f64((f64::from(estimated_secs) / f64::from(steps)).clamp(0.1, 1.0));
    (1..steps)
        .map(|i| {
            let progress = (i * 100 / steps) as u8;
            SimulatedStep {
                progress,
                message: if progress >= 80 {
                    "Finalizing..."
                } else {
                    "Processing..."
                },
                delay,
            }
        })
        .collect()
}

/// GET /api/progress/{tool_name} - SSE stream of simulated progress.
///
/// Emits one `started` event at progress 0, a strictly increasing sequence
/// of `running` events, then exactly one `completed` event at progress 100
/// carrying a download link; the stream closes after that. Unknown tools
/// are rejected up front with a 404.
pub async fn simulated_progress(
    State(state): State<Arc<AppState>>,
    Path(tool_name): Path<String>,
    Query(query): Query<ProgressQuery>,
) -> ApiResult<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>> {
    if !state.registry.contains(&tool_name) {
        return Err(ApiError::UnknownTool(tool_name));
    }

    let estimated_secs = query
        .estimate
        .unwrap_or_else(|| catalog::estimated_secs(&tool_name));
    let steps = schedule(estimated_secs);
    let final_delay = steps.last().map_or(Duration::from_millis(100), |s| s.delay);
    let download_url = match query.job_id {
        Some(id) => format!("/api/download/{id}"),
        None => format!("/api/download/{tool_name}"),
    };

    tracing::debug!(tool = %tool_name, estimated_secs, steps = steps.len(), "simulated progress stream opened");

    let stream = async_stream::stream! {
        let event = serde_json::json!({
            "status": "started",
            "progress": 0,
            "message": "Starting...",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });
        yield Ok(Event::default().data(event.to_string()));

        for step in steps {
            tokio::time::sleep(step.delay).await;
            let event = serde_json::json!({
                "status": "running",
                "progress": step.progress,
                "message": step.message,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            });
            yield Ok(Event::default().data(event.to_string()));
        }

        tokio::time::sleep(final_delay).await;
        let event = serde_json::json!({
            "status": "completed",
            "progress": 100,
            "message": "Done",
            "download_url": download_url,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });
        yield Ok(Event::default().data(event.to_string()));
        // Stream ends here; the connection closes after the terminal event.
    };

    Ok(Sse::new(stream))
}

/// Build the progress router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/progress/{tool_name}", get(simulated_progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_step_count_is_clamped() {
        // Short estimate: 10 steps minimum, minus the terminal one.
        assert_eq!(schedule(3).len(), 9);
        assert_eq!(schedule(10).len(), 9);
        // Long estimate: capped at 50 steps.
        assert_eq!(schedule(120).len(), 49);
    }

    #[test]
    fn test_schedule_progress_is_strictly_increasing_and_below_100() {
        for est in [0, 1, 5, 10, 25, 50, 120] {
            let steps = schedule(est);
            let mut last = 0u8;
            for step in &steps {
                assert!(step.progress > last, "progress not increasing for est={est}");
                assert!(step.progress < 100, "running step reached 100 for est={est}");
                last = step.progress;
            }
        }
    }

    #[test]
    fn test_schedule_delay_is_clamped() {
        // est=3 over 10 steps would be 0.3s; within bounds.
        assert_eq!(schedule(3)[0].delay, Duration::from_secs_f64(0.3));
        // est=0 would be 0s; floored at 100ms.
        assert_eq!(schedule(0)[0].delay, Duration::from_millis(100));
        // est=120 over 50 steps would be 2.4s; capped at 1s.
        assert_eq!(schedule(120)[0].delay, Duration::from_secs(1));
    }

    #[test]
    fn test_schedule_total_duration_approximates_estimate() {
        let steps = schedule(10);
        let total: Duration = steps.iter().map(|s| s.delay).sum();
        // 9 running steps of 1s; the terminal event adds the final tick.
        assert_eq!(total, Duration::from_secs(9));
    }

    #[test]
    fn test_message_switches_to_finalizing_at_80() {
        for step in schedule(20) {
            if step.progress >= 80 {
                assert_eq!(step.message, "Finalizing...");
            } else {
                assert_eq!(step.message, "Processing...");
            }
        }
    }
}
