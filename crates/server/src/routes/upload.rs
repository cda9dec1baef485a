//! File upload endpoint.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Response for a stored upload. The returned `path` is what clients put in
/// a subsequent `/api/process` submission's file list.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct UploadResponse {
    pub upload_id: Uuid,
    pub filename: String,
    pub path: String,
}

/// Reduce a client-supplied filename to a safe basename: path components are
/// stripped and anything outside `[A-Za-z0-9._-]` becomes `_`.
pub(crate) fn sanitize_filename(raw: &str) -> String {
    let base = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(raw)
        .trim_start_matches('.');
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

/// POST /api/upload - Store a multipart file upload.
///
/// Expects a `file` part with a filename. The file lands in the upload
/// directory as `{upload_id}_{sanitized_name}` so concurrent uploads of the
/// same filename never collide.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let raw_name = field.file_name().unwrap_or_default().to_string();
        if raw_name.is_empty() {
            return Err(ApiError::BadRequest("no file selected".into()));
        }
        let filename = sanitize_filename(&raw_name);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("failed reading upload: {e}")))?;

        let upload_id = Uuid::new_v4();
        let path = state
            .config
            .upload_dir
            .join(format!("{upload_id}_{filename}"));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| ApiError::Internal(format!("failed storing upload: {e}")))?;

        tracing::info!(upload_id = %upload_id, file = %filename, size = bytes.len(), "file uploaded");
        return Ok(Json(UploadResponse {
            upload_id,
            filename,
            path: path.to_string_lossy().into_owned(),
        }));
    }

    Err(ApiError::BadRequest("no file uploaded".into()))
}

/// Build the upload router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/upload", post(upload_file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_filename("report.pdf"), "report.pdf");
        assert_eq!(sanitize_filename("my-file_v2.csv"), "my-file_v2.csv");
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("/tmp/evil.sh"), "evil.sh");
        assert_eq!(sanitize_filename("C:\\Users\\x\\doc.pdf"), "doc.pdf");
    }

    #[test]
    fn test_sanitize_replaces_odd_characters() {
        assert_eq!(sanitize_filename("my report (1).pdf"), "my_report__1_.pdf");
        assert_eq!(sanitize_filename("données.csv"), "donn_es.csv");
    }

    #[test]
    fn test_sanitize_never_returns_empty() {
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename("..."), "upload");
        assert_eq!(sanitize_filename("dir/"), "upload");
    }
}
