//! Job input payloads and output artifacts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Reference to a previously uploaded file, as handed to a tool handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputFile {
    /// Where the upload endpoint stored the file.
    pub path: PathBuf,
    /// The client's original filename, used to derive output names.
    pub original_name: String,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>, original_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            original_name: original_name.into(),
        }
    }

    /// Original filename without its extension.
    pub fn stem(&self) -> &str {
        Path::new(&self.original_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output")
    }
}

/// Everything a client can attach to a job submission.
///
/// A submission must carry at least one of files, a URL, or text; an empty
/// payload is rejected before any job record is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobInput {
    #[serde(default)]
    pub files: Vec<InputFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Tool-specific knobs (watermark text, resize dimensions, ...).
    #[serde(default)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

impl JobInput {
    /// True when the submission carries no file, URL, or text at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
            && self.url.as_deref().is_none_or(str::is_empty)
            && self.text.as_deref().is_none_or(str::is_empty)
    }

    /// String option lookup helper for handlers.
    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(|v| v.as_str())
    }
}

/// A finished job's output: the produced file plus its display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(rename = "output_path")]
    pub path: PathBuf,
    pub filename: String,
}

impl Artifact {
    /// Build an artifact from an output path, deriving the display name
    /// from the path's final component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("download")
            .to_string();
        Self { path, filename }
    }
}
