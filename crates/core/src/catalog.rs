//! Static tool catalog.
//!
//! One row per tool the service exposes: the dispatch key, its category,
//! the advertised processing-time estimate, and the extension of the
//! artifact it produces. The estimate is informational — clients use it to
//! size progress bars, and the simulated-progress stream derives its tick
//! cadence from it.

use serde::Serialize;

/// Fallback estimate for tools without a tuned entry.
pub const DEFAULT_ESTIMATED_SECS: u32 = 10;

/// Tool grouping as shown in the web UI's category pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Pdf,
    Excel,
    Image,
    Url,
    Seo,
    Ai,
    Dev,
    Productivity,
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolCategory::Pdf => write!(f, "pdf"),
            ToolCategory::Excel => write!(f, "excel"),
            ToolCategory::Image => write!(f, "image"),
            ToolCategory::Url => write!(f, "url"),
            ToolCategory::Seo => write!(f, "seo"),
            ToolCategory::Ai => write!(f, "ai"),
            ToolCategory::Dev => write!(f, "dev"),
            ToolCategory::Productivity => write!(f, "productivity"),
        }
    }
}

/// One catalog row.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    /// Dispatch key. Registry resolution is an exact match on this name.
    pub name: &'static str,
    pub category: ToolCategory,
    /// Advertised processing time in seconds.
    pub estimated_secs: u32,
    /// Extension of the artifact this tool produces.
    pub output_ext: &'static str,
}

use ToolCategory::*;

/// The full tool table.
///
/// Estimates for the document/image tools carry the tuning from the
/// production service; everything else uses [`DEFAULT_ESTIMATED_SECS`].
static TOOLS: &[ToolSpec] = &[
    // PDF
    ToolSpec { name: "pdf_word_converter", category: Pdf, estimated_secs: 10, output_ext: "docx" },
    ToolSpec { name: "pdf_excel_converter", category: Pdf, estimated_secs: 15, output_ext: "xlsx" },
    ToolSpec { name: "word_pdf_converter", category: Pdf, estimated_secs: 8, output_ext: "pdf" },
    ToolSpec { name: "excel_pdf_converter", category: Pdf, estimated_secs: 8, output_ext: "pdf" },
    ToolSpec { name: "pdf_merger", category: Pdf, estimated_secs: 5, output_ext: "pdf" },
    ToolSpec { name: "pdf_splitter", category: Pdf, estimated_secs: 3, output_ext: "pdf" },
    ToolSpec { name: "pdf_editor", category: Pdf, estimated_secs: 20, output_ext: "pdf" },
    ToolSpec { name: "pdf_compressor", category: Pdf, estimated_secs: 12, output_ext: "pdf" },
    ToolSpec { name: "pdf_ocr", category: Pdf, estimated_secs: 25, output_ext: "txt" },
    ToolSpec { name: "pdf_form_filler", category: Pdf, estimated_secs: 15, output_ext: "pdf" },
    ToolSpec { name: "pdf_image_converter", category: Pdf, estimated_secs: 8, output_ext: "png" },
    ToolSpec { name: "image_pdf_converter", category: Pdf, estimated_secs: 6, output_ext: "pdf" },
    ToolSpec { name: "pdf_watermark", category: Pdf, estimated_secs: 7, output_ext: "pdf" },
    ToolSpec { name: "pdf_password", category: Pdf, estimated_secs: 3, output_ext: "pdf" },
    ToolSpec { name: "pdf_metadata_editor", category: Pdf, estimated_secs: 2, output_ext: "pdf" },
    ToolSpec { name: "table_extractor", category: Pdf, estimated_secs: 15, output_ext: "xlsx" },
    ToolSpec { name: "pdf_summary_generator", category: Pdf, estimated_secs: 20, output_ext: "txt" },
    ToolSpec { name: "pdf_annotation", category: Pdf, estimated_secs: 10, output_ext: "pdf" },
    ToolSpec { name: "pdf_page_reorder", category: Pdf, estimated_secs: 4, output_ext: "pdf" },
    ToolSpec { name: "pdf_template_generator", category: Pdf, estimated_secs: 12, output_ext: "pdf" },
    // Excel / CSV
    ToolSpec { name: "excel_csv_converter", category: Excel, estimated_secs: 3, output_ext: "csv" },
    ToolSpec { name: "csv_excel_converter", category: Excel, estimated_secs: 3, output_ext: "xlsx" },
    ToolSpec { name: "excel_deduplicator", category: Excel, estimated_secs: 8, output_ext: "xlsx" },
    ToolSpec { name: "excel_cleaner", category: Excel, estimated_secs: 6, output_ext: "xlsx" },
    ToolSpec { name: "csv_validator", category: Excel, estimated_secs: 5, output_ext: "txt" },
    ToolSpec { name: "bulk_csv_sql", category: Excel, estimated_secs: 7, output_ext: "sql" },
    ToolSpec { name: "csv_json_converter", category: Excel, estimated_secs: 4, output_ext: "json" },
    ToolSpec { name: "excel_merger", category: Excel, estimated_secs: 6, output_ext: "xlsx" },
    ToolSpec { name: "excel_pivot_generator", category: Excel, estimated_secs: 10, output_ext: "xlsx" },
    ToolSpec { name: "excel_chart_generator", category: Excel, estimated_secs: 8, output_ext: "xlsx" },
    // Image
    ToolSpec { name: "bulk_image_resizer", category: Image, estimated_secs: 12, output_ext: "png" },
    ToolSpec { name: "image_compressor", category: Image, estimated_secs: 8, output_ext: "jpg" },
    ToolSpec { name: "image_background_remover", category: Image, estimated_secs: 15, output_ext: "png" },
    ToolSpec { name: "meme_generator", category: Image, estimated_secs: 5, output_ext: "png" },
    ToolSpec { name: "bulk_watermark", category: Image, estimated_secs: 10, output_ext: "png" },
    ToolSpec { name: "social_thumbnail_generator", category: Image, estimated_secs: 6, output_ext: "png" },
    ToolSpec { name: "image_format_converter", category: Image, estimated_secs: 6, output_ext: "png" },
    ToolSpec { name: "photo_collage_maker", category: Image, estimated_secs: 12, output_ext: "png" },
    ToolSpec { name: "color_palette_extractor", category: Image, estimated_secs: 3, output_ext: "json" },
    ToolSpec { name: "ai_image_enhancer", category: Image, estimated_secs: 25, output_ext: "png" },
    ToolSpec { name: "ai_image_caption", category: Image, estimated_secs: 15, output_ext: "txt" },
    ToolSpec { name: "image_ocr_text", category: Image, estimated_secs: 12, output_ext: "txt" },
    ToolSpec { name: "animated_gif_maker", category: Image, estimated_secs: 10, output_ext: "gif" },
    ToolSpec { name: "video_gif_converter", category: Image, estimated_secs: 18, output_ext: "gif" },
    ToolSpec { name: "meme_template_generator", category: Image, estimated_secs: 6, output_ext: "png" },
    // URL
    ToolSpec { name: "url_summarizer", category: Url, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "keyword_scraper", category: Url, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "meta_tag_extractor", category: Url, estimated_secs: 10, output_ext: "json" },
    ToolSpec { name: "broken_link_checker", category: Url, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "sitemap_generator", category: Url, estimated_secs: 10, output_ext: "xml" },
    ToolSpec { name: "page_speed_analyzer", category: Url, estimated_secs: 10, output_ext: "json" },
    ToolSpec { name: "internal_link_visualizer", category: Url, estimated_secs: 10, output_ext: "html" },
    ToolSpec { name: "social_share_preview", category: Url, estimated_secs: 10, output_ext: "html" },
    ToolSpec { name: "html_pdf_generator", category: Url, estimated_secs: 10, output_ext: "pdf" },
    ToolSpec { name: "bulk_screenshot_generator", category: Url, estimated_secs: 10, output_ext: "png" },
    ToolSpec { name: "robots_validator", category: Url, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "redirect_checker", category: Url, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "competitor_analyzer", category: Url, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "website_text_extractor", category: Url, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "web_archive_generator", category: Url, estimated_secs: 10, output_ext: "html" },
    // SEO
    ToolSpec { name: "keyword_suggestion", category: Seo, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "backlink_analyzer", category: Seo, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "keyword_gap_analysis", category: Seo, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "seo_audit_generator", category: Seo, estimated_secs: 10, output_ext: "html" },
    ToolSpec { name: "meta_description_generator", category: Seo, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "hashtag_generator", category: Seo, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "social_post_scheduler", category: Seo, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "email_list_extractor", category: Seo, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "email_validator", category: Seo, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "bulk_meta_analyzer", category: Seo, estimated_secs: 10, output_ext: "csv" },
    // AI text
    ToolSpec { name: "ai_content_summarizer", category: Ai, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "ai_content_rewriter", category: Ai, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "ai_faq_generator", category: Ai, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "ai_product_description", category: Ai, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "ai_email_subject", category: Ai, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "ai_social_optimizer", category: Ai, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "ai_sentiment_analyzer", category: Ai, estimated_secs: 10, output_ext: "json" },
    ToolSpec { name: "ai_competitor_report", category: Ai, estimated_secs: 10, output_ext: "html" },
    ToolSpec { name: "ai_table_extractor", category: Ai, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "ai_text_translator", category: Ai, estimated_secs: 10, output_ext: "txt" },
    // Dev
    ToolSpec { name: "html_pdf_converter", category: Dev, estimated_secs: 10, output_ext: "pdf" },
    ToolSpec { name: "markdown_converter", category: Dev, estimated_secs: 10, output_ext: "html" },
    ToolSpec { name: "css_js_minifier", category: Dev, estimated_secs: 10, output_ext: "js" },
    ToolSpec { name: "json_converter", category: Dev, estimated_secs: 10, output_ext: "json" },
    ToolSpec { name: "api_tester", category: Dev, estimated_secs: 10, output_ext: "json" },
    ToolSpec { name: "url_cleaner", category: Dev, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "website_downloader", category: Dev, estimated_secs: 10, output_ext: "html" },
    ToolSpec { name: "url_response_checker", category: Dev, estimated_secs: 10, output_ext: "csv" },
    ToolSpec { name: "structured_data_generator", category: Dev, estimated_secs: 10, output_ext: "json" },
    ToolSpec { name: "multi_screenshot_pdf", category: Dev, estimated_secs: 10, output_ext: "pdf" },
    // Productivity
    ToolSpec { name: "bulk_renamer", category: Productivity, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "file_format_converter", category: Productivity, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "signature_generator", category: Productivity, estimated_secs: 10, output_ext: "png" },
    ToolSpec { name: "certificate_generator", category: Productivity, estimated_secs: 10, output_ext: "pdf" },
    ToolSpec { name: "badge_generator", category: Productivity, estimated_secs: 10, output_ext: "png" },
    ToolSpec { name: "calendar_generator", category: Productivity, estimated_secs: 10, output_ext: "pdf" },
    ToolSpec { name: "qr_generator", category: Productivity, estimated_secs: 10, output_ext: "png" },
    ToolSpec { name: "password_generator", category: Productivity, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "ascii_generator", category: Productivity, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "template_generator", category: Productivity, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "resume_builder", category: Productivity, estimated_secs: 10, output_ext: "pdf" },
    ToolSpec { name: "email_template_generator", category: Productivity, estimated_secs: 10, output_ext: "html" },
    ToolSpec { name: "bulk_text_replacer", category: Productivity, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "metadata_editor", category: Productivity, estimated_secs: 10, output_ext: "txt" },
    ToolSpec { name: "version_tracker", category: Productivity, estimated_secs: 10, output_ext: "txt" },
];

/// All catalog entries, in display order.
pub fn catalog() -> &'static [ToolSpec] {
    TOOLS
}

/// Look up a tool's catalog row by its exact name.
pub fn find(tool_name: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|t| t.name == tool_name)
}

/// Advertised processing time for a tool, in seconds.
///
/// Unknown names get [`DEFAULT_ESTIMATED_SECS`] rather than an error: the
/// estimate is a display hint, not part of dispatch.
pub fn estimated_secs(tool_name: &str) -> u32 {
    find(tool_name).map_or(DEFAULT_ESTIMATED_SECS, |t| t.estimated_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tool_estimates() {
        assert_eq!(estimated_secs("pdf_word_converter"), 10);
        assert_eq!(estimated_secs("pdf_ocr"), 25);
        assert_eq!(estimated_secs("excel_csv_converter"), 3);
        assert_eq!(estimated_secs("video_gif_converter"), 18);
    }

    #[test]
    fn test_unknown_tool_uses_default_estimate() {
        assert_eq!(estimated_secs("not_a_real_tool"), DEFAULT_ESTIMATED_SECS);
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<&str> = catalog().iter().map(|t| t.name).collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before, "duplicate tool name in catalog");
    }

    #[test]
    fn test_find_is_exact_match() {
        assert!(find("pdf_merger").is_some());
        // Substrings and prefixes must not resolve.
        assert!(find("pdf").is_none());
        assert!(find("merger").is_none());
        assert!(find("pdf_merger_v2").is_none());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ToolCategory::Pdf.to_string(), "pdf");
        assert_eq!(ToolCategory::Productivity.to_string(), "productivity");
    }
}
