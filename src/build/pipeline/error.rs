//! Pipeline error types.

use std::path::{Path, PathBuf};

use crate::build::markdown::MarkdownError;
use crate::build::render::RenderError;

/// Errors that can occur while converting a single document.
///
/// None of these abort a build; the builder records them per file.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("markdown rendering error: {0}")]
    Markdown(#[from] MarkdownError),

    #[error("template rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("{} is not valid UTF-8", .0.display())]
    Encoding(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },
}

impl PipelineError {
    /// Create a stage-specific error.
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stage {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Classify an error from reading a source file.
    pub fn read(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::InvalidData {
            Self::Encoding(path.to_path_buf())
        } else {
            Self::Io(err)
        }
    }
}
