//! Document types for pipeline processing.

use std::path::PathBuf;

use crate::build::document::Document;
use crate::build::render::TocEntry;

/// A document being processed through the pipeline.
///
/// Wraps the original `Document` with mutable state that evolves
/// through pipeline stages:
///
/// 1. Initially: `content` = raw markdown, `title` = first `# ` heading
/// 2. After enhance: `content` = markdown with badge and alert markup
/// 3. After markdown: `content` = HTML, `toc` = populated
/// 4. After template: `output_html` = final page HTML
/// 5. After write: `output_path` = written file
#[derive(Debug)]
pub struct ProcessingDocument {
    /// The original document (path and raw content)
    pub doc: Document,

    /// Page title, extracted from the raw text before any stage runs
    pub title: String,

    /// Content being processed.
    ///
    /// Starts as the raw markdown content from `doc.raw_content`.
    /// After markdown stage: HTML fragment (just the content, no page wrapper).
    pub content: String,

    /// Table of contents extracted during markdown rendering.
    pub toc: Vec<TocEntry>,

    /// Final HTML output after template rendering.
    pub output_html: Option<String>,

    /// Where the page was written.
    pub output_path: Option<PathBuf>,
}

impl ProcessingDocument {
    /// Create a new processing document, falling back to `default_title`
    /// when the text has no level-1 heading.
    pub fn new(doc: Document, default_title: &str) -> Self {
        let title = doc.title(default_title);
        let content = doc.raw_content.clone();
        Self {
            doc,
            title,
            content,
            toc: Vec::new(),
            output_html: None,
            output_path: None,
        }
    }

    /// Display name used in log lines and errors.
    pub fn name(&self) -> String {
        self.doc
            .source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.doc.source_path.display().to_string())
    }
}
