//! Text enhancement stage.
//!
//! Applies the enhancement rules to raw markdown before parsing.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that rewrites glyphs and alert markers into inline markup.
///
/// The enhanced markdown replaces the document's content for the next stage.
pub struct EnhanceStage;

impl Stage for EnhanceStage {
    fn name(&self) -> &'static str {
        "enhance"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        doc.content = ctx.enhancer.apply(&doc.content);
        Ok(())
    }
}
