//! Markdown rendering stage.

use crate::build::markdown::render_markdown;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that renders markdown content to HTML.
///
/// After this stage, `doc.content` contains HTML and `doc.toc`
/// contains the extracted headings.
pub struct MarkdownStage;

impl Stage for MarkdownStage {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let output = render_markdown(&doc.content, ctx.markdown_config)?;

        doc.content = output.html;
        doc.toc = output.toc;

        Ok(())
    }
}
