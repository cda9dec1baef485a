//! PDF tool handlers.

use async_trait::async_trait;

use crate::handler::{HandlerError, JobContext, ToolHandler};
use crate::input::{Artifact, JobInput};
use crate::progress::ProgressReporter;

use super::file_milestone;

/// Merges the uploaded documents into a single `{job_id}_merged.pdf`.
pub struct PdfMerger;

#[async_trait]
impl ToolHandler for PdfMerger {
    async fn run(
        &self,
        ctx: &JobContext,
        input: &JobInput,
        progress: &dyn ProgressReporter,
    ) -> Result<Artifact, HandlerError> {
        if input.files.is_empty() {
            return Err(HandlerError::InvalidInput(
                "pdf_merger needs at least one input file".into(),
            ));
        }
        progress.report(20)?;

        let mut merged = Vec::new();
        let n = input.files.len();
        for (i, file) in input.files.iter().enumerate() {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|e| HandlerError::io(&file.path, e))?;
            merged.extend_from_slice(&bytes);
            progress.report(file_milestone(i, n))?;
        }

        let output_path = ctx.output_path("merged.pdf");
        tokio::fs::write(&output_path, merged)
            .await
            .map_err(|e| HandlerError::io(&output_path, e))?;

        progress.report(100)?;
        Ok(Artifact::from_path(output_path))
    }
}
