use std::path::{Path, PathBuf};

// =============================================================================
// Documents
// =============================================================================

/// A Markdown source file read from disk.
///
/// Documents are single-use: each one is read, converted, written and then
/// dropped before the next file is touched.
#[derive(Debug, Clone)]
pub struct Document {
    /// Absolute path of the source file
    pub source_path: PathBuf,
    /// The file contents, exactly as read
    pub raw_content: String,
}

impl Document {
    pub fn new(source_path: PathBuf, raw_content: String) -> Self {
        Self {
            source_path,
            raw_content,
        }
    }

    /// Read a document from disk. The file must be valid UTF-8.
    pub fn read(source_path: &Path) -> std::io::Result<Self> {
        let raw_content = std::fs::read_to_string(source_path)?;
        Ok(Self::new(source_path.to_path_buf(), raw_content))
    }

    /// Get the document title from its first `# ` heading.
    pub fn title(&self, fallback: &str) -> String {
        extract_title(&self.raw_content)
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Find the text of the first level-1 ATX heading.
///
/// Only lines starting with exactly `# ` count, so `## Section` and `#tag`
/// are skipped.
pub fn extract_title(content: &str) -> Option<&str> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
}
