//! Tool catalog listing.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use toolforge_core::{catalog, ToolCategory};

use crate::state::AppState;

/// One catalog entry as exposed to clients.
#[derive(Debug, Serialize)]
pub struct ToolResponse {
    pub name: &'static str,
    pub category: ToolCategory,
    /// Advertised processing time in seconds, for progress-bar sizing.
    pub estimated_time: u32,
}

/// GET /api/tools - List every registered tool with its estimate.
///
/// Only tools that actually resolve in the registry are listed, so the
/// catalog can never advertise a name that `/api/process` would 404 on.
pub async fn list_tools(State(state): State<Arc<AppState>>) -> Json<Vec<ToolResponse>> {
    let tools = catalog::catalog()
        .iter()
        .filter(|spec| state.registry.contains(spec.name))
        .map(|spec| ToolResponse {
            name: spec.name,
            category: spec.category,
            estimated_time: spec.estimated_secs,
        })
        .collect();
    Json(tools)
}

/// Build the tools router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/tools", get(list_tools))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_response_serialization() {
        let response = ToolResponse {
            name: "pdf_merger",
            category: ToolCategory::Pdf,
            estimated_time: 5,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"name\":\"pdf_merger\""));
        assert!(json.contains("\"category\":\"pdf\""));
        assert!(json.contains("\"estimated_time\":5"));
    }
}
