//! Report-style handler for URL/SEO/AI/dev tools.

use async_trait::async_trait;

use crate::handler::{HandlerError, JobContext, ToolHandler};
use crate::input::{Artifact, JobInput};
use crate::progress::ProgressReporter;

/// Produces a `{job_id}_{tool}_report.{ext}` artifact from a URL or text
/// payload. The analysis itself is a placeholder; the handler exists so the
/// non-file tool categories exercise the same dispatch, progress, and
/// artifact plumbing as the converters.
pub struct ReportGenerator {
    tool_name: &'static str,
    output_ext: &'static str,
}

impl ReportGenerator {
    pub fn new(tool_name: &'static str, output_ext: &'static str) -> Self {
        Self {
            tool_name,
            output_ext,
        }
    }
}

#[async_trait]
impl ToolHandler for ReportGenerator {
    async fn run(
        &self,
        ctx: &JobContext,
        input: &JobInput,
        progress: &dyn ProgressReporter,
    ) -> Result<Artifact, HandlerError> {
        let subject = input
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or(input.text.as_deref().filter(|t| !t.is_empty()))
            .ok_or_else(|| {
                HandlerError::InvalidInput(format!("{} needs a url or text input", self.tool_name))
            })?;
        progress.report(20)?;

        let mut report = String::new();
        report.push_str(&format!("# {} report\n\n", self.tool_name));
        report.push_str(&format!("subject: {subject}\n"));
        report.push_str(&format!("characters analyzed: {}\n", subject.len()));
        progress.report(60)?;

        let output_path = ctx.output_path(&format!("{}_report.{}", self.tool_name, self.output_ext));
        tokio::fs::write(&output_path, report)
            .await
            .map_err(|e| HandlerError::io(&output_path, e))?;

        progress.report(100)?;
        Ok(Artifact::from_path(output_path))
    }
}
