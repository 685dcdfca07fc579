//! Path conversion utilities.
//!
//! This module handles conversions between:
//! - Configured names (document file names, output directory settings)
//! - Source file paths (where markdown is read from)
//! - Output file paths (where HTML is written)

use std::path::{Path, PathBuf};

/// Resolve a configured path against a base directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_against(base_path: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base_path.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Convert a source file path to its output path.
///
/// # Examples
/// ```ignore
/// source_to_output_path("docs/architecture.md", "docs/html") => docs/html/architecture.html
/// source_to_output_path("notes", "docs/html") => docs/html/notes.html
/// ```
pub fn source_to_output_path(source_path: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(output_file_name(source_path))
}

/// File name of the page generated from a source file.
/// "docs/architecture.md" -> "architecture.html"
pub fn output_file_name(source_path: &Path) -> String {
    let stem = source_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "untitled".to_string());
    format!("{stem}.html")
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_against() {
        let base = Path::new("/project/docs");
        assert_eq!(
            resolve_against(base, Path::new("html")),
            PathBuf::from("/project/docs/html")
        );
        assert_eq!(
            resolve_against(base, Path::new("/var/www")),
            PathBuf::from("/var/www")
        );
    }

    #[test]
    fn test_source_to_output_path() {
        let output = Path::new("/site");
        assert_eq!(
            source_to_output_path(Path::new("/docs/DOCUMENTACAO-ENTIDADES.md"), output),
            PathBuf::from("/site/DOCUMENTACAO-ENTIDADES.html")
        );
        assert_eq!(
            source_to_output_path(Path::new("notes"), output),
            PathBuf::from("/site/notes.html")
        );
    }

    #[test]
    fn test_base_path_from_config() {
        assert_eq!(
            base_path_from_config(Path::new("/project/docpress.yaml")),
            PathBuf::from("/project")
        );
        assert_eq!(
            base_path_from_config(Path::new("docpress.yaml")),
            PathBuf::from("")
        );
    }
}
