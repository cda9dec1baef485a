//! Generic file-to-file conversion handler.

use async_trait::async_trait;

use crate::handler::{HandlerError, JobContext, ToolHandler};
use crate::input::{Artifact, JobInput};
use crate::progress::ProgressReporter;

use super::file_milestone;

/// Converts each uploaded file into the target extension.
///
/// The "conversion" is a passthrough of the file's bytes — format fidelity
/// is not this service's contract, artifact plumbing is. A single input
/// yields `{job_id}_{stem}.{ext}`; multiple inputs are combined into one
/// `{job_id}_converted_bundle.{ext}` artifact.
pub struct FileConversion {
    output_ext: &'static str,
}

impl FileConversion {
    pub fn new(output_ext: &'static str) -> Self {
        Self { output_ext }
    }
}

#[async_trait]
impl ToolHandler for FileConversion {
    async fn run(
        &self,
        ctx: &JobContext,
        input: &JobInput,
        progress: &dyn ProgressReporter,
    ) -> Result<Artifact, HandlerError> {
        if input.files.is_empty() {
            return Err(HandlerError::InvalidInput("no input files provided".into()));
        }
        progress.report(20)?;

        let mut converted = Vec::new();
        let n = input.files.len();
        for (i, file) in input.files.iter().enumerate() {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|e| HandlerError::io(&file.path, e))?;
            converted.push(bytes);
            progress.report(file_milestone(i, n))?;
        }

        let output_path = if n == 1 {
            ctx.output_path(&format!("{}.{}", input.files[0].stem(), self.output_ext))
        } else {
            ctx.output_path(&format!("converted_bundle.{}", self.output_ext))
        };
        let combined = converted.concat();
        tokio::fs::write(&output_path, combined)
            .await
            .map_err(|e| HandlerError::io(&output_path, e))?;

        progress.report(100)?;
        Ok(Artifact::from_path(output_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputFile;
    use crate::progress::NullReporter;
    use uuid::Uuid;

    async fn write_fixture(dir: &std::path::Path, name: &str, content: &[u8]) -> InputFile {
        let path = dir.join(name);
        tokio::fs::write(&path, content).await.unwrap();
        InputFile::new(path, name)
    }

    #[tokio::test]
    async fn test_single_file_conversion() {
        let tmp = tempfile::tempdir().unwrap();
        let file = write_fixture(tmp.path(), "report.pdf", b"%PDF-stub").await;

        let ctx = JobContext::new(Uuid::new_v4(), tmp.path());
        let input = JobInput {
            files: vec![file],
            ..Default::default()
        };

        let artifact = FileConversion::new("docx")
            .run(&ctx, &input, &NullReporter)
            .await
            .unwrap();

        assert!(artifact.filename.ends_with("report.docx"));
        let written = tokio::fs::read(&artifact.path).await.unwrap();
        assert_eq!(written, b"%PDF-stub");
    }

    #[tokio::test]
    async fn test_multiple_files_produce_one_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let a = write_fixture(tmp.path(), "a.csv", b"1,2\n").await;
        let b = write_fixture(tmp.path(), "b.csv", b"3,4\n").await;

        let ctx = JobContext::new(Uuid::new_v4(), tmp.path());
        let input = JobInput {
            files: vec![a, b],
            ..Default::default()
        };

        let artifact = FileConversion::new("xlsx")
            .run(&ctx, &input, &NullReporter)
            .await
            .unwrap();

        assert!(artifact.filename.ends_with("converted_bundle.xlsx"));
        let written = tokio::fs::read(&artifact.path).await.unwrap();
        assert_eq!(written, b"1,2\n3,4\n");
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = JobContext::new(Uuid::new_v4(), tmp.path());

        let err = FileConversion::new("pdf")
            .run(&ctx, &JobInput::default(), &NullReporter)
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_missing_file_surfaces_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = JobContext::new(Uuid::new_v4(), tmp.path());
        let input = JobInput {
            files: vec![InputFile::new(tmp.path().join("vanished.pdf"), "vanished.pdf")],
            ..Default::default()
        };

        let err = FileConversion::new("pdf")
            .run(&ctx, &input, &NullReporter)
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::Io { .. }));
    }
}
