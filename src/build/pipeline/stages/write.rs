//! File writing stage.
//!
//! Writes the final HTML output to the filesystem.

use crate::build::paths::source_to_output_path;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that writes rendered documents to the output directory.
///
/// The page is written as `<stem>.html` directly under the output
/// directory, replacing any file from a previous run.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let html = doc.output_html.as_ref().ok_or_else(|| {
            PipelineError::stage(
                "write",
                format!(
                    "document '{}' has no output HTML (was template stage run?)",
                    doc.name()
                ),
            )
        })?;

        let output_path = source_to_output_path(&doc.doc.source_path, ctx.output_dir);
        std::fs::write(&output_path, html)?;

        doc.output_path = Some(output_path);
        Ok(())
    }
}
