//! Text and CSV tool handlers. Unlike the stub converters these two do the
//! actual transformation they advertise.

use async_trait::async_trait;

use crate::handler::{HandlerError, JobContext, ToolHandler};
use crate::input::{Artifact, JobInput};
use crate::progress::ProgressReporter;

use super::file_milestone;

/// Converts a CSV file into a JSON array of objects keyed by the header row.
pub struct CsvJsonConverter;

#[async_trait]
impl ToolHandler for CsvJsonConverter {
    async fn run(
        &self,
        ctx: &JobContext,
        input: &JobInput,
        progress: &dyn ProgressReporter,
    ) -> Result<Artifact, HandlerError> {
        let file = input.files.first().ok_or_else(|| {
            HandlerError::InvalidInput("csv_json_converter needs a csv file".into())
        })?;
        progress.report(20)?;

        let content = tokio::fs::read_to_string(&file.path)
            .await
            .map_err(|e| HandlerError::io(&file.path, e))?;

        let mut lines = content.lines().filter(|l| !l.trim().is_empty());
        let header: Vec<&str> = lines
            .next()
            .ok_or_else(|| HandlerError::InvalidInput("csv file is empty".into()))?
            .split(',')
            .map(str::trim)
            .collect();

        let rows: Vec<serde_json::Value> = lines
            .map(|line| {
                let cells = line.split(',').map(str::trim);
                let object: serde_json::Map<String, serde_json::Value> = header
                    .iter()
                    .zip(cells)
                    .map(|(key, cell)| ((*key).to_string(), serde_json::Value::from(cell)))
                    .collect();
                serde_json::Value::Object(object)
            })
            .collect();
        progress.report(60)?;

        let json = serde_json::to_vec_pretty(&rows)
            .map_err(|e| HandlerError::InvalidInput(format!("csv rows not representable: {e}")))?;
        let output_path = ctx.output_path(&format!("{}.json", file.stem()));
        tokio::fs::write(&output_path, json)
            .await
            .map_err(|e| HandlerError::io(&output_path, e))?;

        progress.report(100)?;
        Ok(Artifact::from_path(output_path))
    }
}

/// Applies a search/replace pair (from job options) across every uploaded
/// text file and emits one combined `{job_id}_replaced.txt`.
pub struct TextReplacer;

#[async_trait]
impl ToolHandler for TextReplacer {
    async fn run(
        &self,
        ctx: &JobContext,
        input: &JobInput,
        progress: &dyn ProgressReporter,
    ) -> Result<Artifact, HandlerError> {
        if input.files.is_empty() {
            return Err(HandlerError::InvalidInput(
                "bulk_text_replacer needs input files".into(),
            ));
        }
        let search = input
            .option_str("search")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| HandlerError::InvalidInput("missing 'search' option".into()))?;
        let replace = input.option_str("replace").unwrap_or_default();
        progress.report(20)?;

        let mut output = String::new();
        let n = input.files.len();
        for (i, file) in input.files.iter().enumerate() {
            let content = tokio::fs::read_to_string(&file.path)
                .await
                .map_err(|e| HandlerError::io(&file.path, e))?;
            output.push_str(&content.replace(search, replace));
            progress.report(file_milestone(i, n))?;
        }

        let output_path = ctx.output_path("replaced.txt");
        tokio::fs::write(&output_path, output)
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
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_csv_to_json_objects() {
        let tmp = tempfile::tempdir().unwrap();
        let csv_path = tmp.path().join("people.csv");
        tokio::fs::write(&csv_path, "name,age\nada, 36\nalan,41\n")
            .await
            .unwrap();

        let ctx = JobContext::new(Uuid::new_v4(), tmp.path());
        let input = JobInput {
            files: vec![InputFile::new(csv_path, "people.csv")],
            ..Default::default()
        };

        let artifact = CsvJsonConverter
            .run(&ctx, &input, &NullReporter)
            .await
            .unwrap();
        assert!(artifact.filename.ends_with("people.json"));

        let body = tokio::fs::read_to_string(&artifact.path).await.unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "ada");
        assert_eq!(rows[0]["age"], "36");
        assert_eq!(rows[1]["name"], "alan");
    }

    #[tokio::test]
    async fn test_csv_empty_file_is_invalid_input() {
        let tmp = tempfile::tempdir().unwrap();
        let csv_path = tmp.path().join("empty.csv");
        tokio::fs::write(&csv_path, "").await.unwrap();

        let ctx = JobContext::new(Uuid::new_v4(), tmp.path());
        let input = JobInput {
            files: vec![InputFile::new(csv_path, "empty.csv")],
            ..Default::default()
        };

        let err = CsvJsonConverter
            .run(&ctx, &input, &NullReporter)
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_text_replacer_applies_across_files() {
        let tmp = tempfile::tempdir().unwrap();
        for (name, content) in [("a.txt", "foo bar foo"), ("b.txt", " foo!")] {
            tokio::fs::write(tmp.path().join(name), content).await.unwrap();
        }

        let ctx = JobContext::new(Uuid::new_v4(), tmp.path());
        let mut options = serde_json::Map::new();
        options.insert("search".into(), "foo".into());
        options.insert("replace".into(), "baz".into());
        let input = JobInput {
            files: vec![
                InputFile::new(tmp.path().join("a.txt"), "a.txt"),
                InputFile::new(tmp.path().join("b.txt"), "b.txt"),
            ],
            options,
            ..Default::default()
        };

        let artifact = TextReplacer.run(&ctx, &input, &NullReporter).await.unwrap();
        let body = tokio::fs::read_to_string(&artifact.path).await.unwrap();
        assert_eq!(body, "baz bar baz baz!");
    }

    #[tokio::test]
    async fn test_text_replacer_requires_search_option() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a.txt");
        tokio::fs::write(&path, "x").await.unwrap();

        let ctx = JobContext::new(Uuid::new_v4(), tmp.path());
        let input = JobInput {
            files: vec![InputFile::new(path, "a.txt")],
            ..Default::default()
        };

        let err = TextReplacer
            .run(&ctx, &input, &NullReporter)
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::InvalidInput(_)));
    }
}
