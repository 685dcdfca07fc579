//! Index page stage.

use crate::build::index::{INDEX_FILE_NAME, render_index};
use crate::build::pipeline::{FinalizeStage, PipelineContext, PipelineError};

/// Build-wide stage that writes `index.html`.
///
/// Runs after every document has been attempted, regardless of how many
/// conversions failed.
pub struct IndexStage;

impl FinalizeStage for IndexStage {
    fn name(&self) -> &'static str {
        "index"
    }

    fn finalize(&self, ctx: &PipelineContext) -> Result<(), PipelineError> {
        let html = render_index(ctx)?;
        std::fs::write(ctx.output_dir.join(INDEX_FILE_NAME), html)?;
        Ok(())
    }
}
