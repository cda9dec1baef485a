//! String-keyed handler registry.
//!
//! Built once at startup, read-only afterwards. Resolution is an exact match
//! on the tool name — there is deliberately no prefix or substring fallback,
//! so `image_pdf_converter` can never be captured by an `image` group when a
//! `pdf` group also matches.

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::{self, ToolCategory};
use crate::handler::ToolHandler;
use crate::tools::{CsvJsonConverter, FileConversion, PdfMerger, ReportGenerator, TextReplacer};

pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("tool_count", &self.handlers.len())
            .finish()
    }
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under a tool name. Last registration wins.
    pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn ToolHandler>) {
        self.handlers.insert(name.into(), handler);
    }

    /// Resolve a tool name to its handler. Exact match only.
    pub fn resolve(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registry covering the whole tool catalog.
    ///
    /// A few tools get dedicated handlers; the rest are wired to the generic
    /// conversion (file-based categories) or report (URL/text-based
    /// categories) handlers with the catalog's output extension.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        for spec in catalog::catalog() {
            let handler: Arc<dyn ToolHandler> = match spec.name {
                "pdf_merger" => Arc::new(PdfMerger),
                "csv_json_converter" => Arc::new(CsvJsonConverter),
                "bulk_text_replacer" => Arc::new(TextReplacer),
                _ => match spec.category {
                    ToolCategory::Pdf
                    | ToolCategory::Excel
                    | ToolCategory::Image
                    | ToolCategory::Productivity => Arc::new(FileConversion::new(spec.output_ext)),
                    ToolCategory::Url | ToolCategory::Seo | ToolCategory::Ai | ToolCategory::Dev => {
                        Arc::new(ReportGenerator::new(spec.name, spec.output_ext))
                    }
                },
            };
            registry.register(spec.name, handler);
        }

        registry
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_whole_catalog() {
        let registry = HandlerRegistry::builtin();
        assert_eq!(registry.len(), catalog::catalog().len());
        for spec in catalog::catalog() {
            assert!(registry.contains(spec.name), "missing handler for {}", spec.name);
        }
    }

    #[test]
    fn test_resolve_is_exact_match_only() {
        let registry = HandlerRegistry::builtin();
        assert!(registry.resolve("pdf_merger").is_some());
        assert!(registry.resolve("pdf").is_none());
        assert!(registry.resolve("PDF_MERGER").is_none());
        assert!(registry.resolve("pdf_merger ").is_none());
    }

    #[test]
    fn test_unknown_tool_does_not_resolve() {
        let registry = HandlerRegistry::builtin();
        assert!(registry.resolve("not_a_real_tool").is_none());
    }
}
