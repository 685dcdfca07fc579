//! Page template rendering stage.
//!
//! Wraps rendered HTML content in the page template,
//! adding the header banner, navigation bar and footer.

use crate::build::paths::output_file_name;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that applies the page template to rendered content.
///
/// After this stage, `doc.output_html` contains the complete HTML page.
pub struct TemplateStage;

impl Stage for TemplateStage {
    fn name(&self) -> &'static str {
        "template"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let url = output_file_name(&doc.doc.source_path);

        let page_context = ctx.page_context(
            &doc.title,
            &url,
            std::mem::take(&mut doc.content),
            std::mem::take(&mut doc.toc),
        );

        let html = ctx.renderer.render_page(&page_context)?;
        doc.output_html = Some(html);

        Ok(())
    }
}
