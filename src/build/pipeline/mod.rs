//! Build pipeline for document processing.
//!
//! The pipeline transforms each document through a series of stages:
//! 1. Text enhancement (badges and alert blocks)
//! 2. Markdown rendering (to HTML with TOC)
//! 3. Template rendering (page template wrapper)
//! 4. File writing (output to disk)
//!
//! Documents go through the pipeline one at a time, so a failing stage only
//! affects the document it failed on. Custom stages can be inserted before
//! or after any named stage. Build-wide stages run after all documents.

mod context;
mod document;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::ProcessingDocument;
pub use error::PipelineError;

use stages::{EnhanceStage, IndexStage, MarkdownStage, TemplateStage, WriteStage};

/// A stage in the document processing pipeline.
///
/// Stages transform one document in place before passing it to the next stage.
pub trait Stage {
    /// Unique name for this stage (used for insertion points).
    fn name(&self) -> &'static str;

    /// Process a document through this stage.
    ///
    /// The `ctx` provides access to shared resources like the renderer
    /// and the enhancement rules.
    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// A stage that runs once after all documents are processed.
///
/// Use this for build-wide output such as the index page.
pub trait FinalizeStage {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Run finalization after all documents have been attempted.
    fn finalize(&self, ctx: &PipelineContext) -> Result<(), PipelineError>;
}

/// The document processing pipeline.
///
/// The default pipeline includes: enhance → markdown → template → write,
/// finalized by the index page.
///
/// # Extension Points
///
/// Insert custom stages using `insert_before` or `insert_after`:
///
/// ```ignore
/// pipeline.insert_after("enhance", MyCustomStage);
/// ```
pub struct Pipeline {
    /// Per-document stages
    stages: Vec<Box<dyn Stage>>,
    /// Build-wide stages (run once after all documents)
    finalize_stages: Vec<Box<dyn FinalizeStage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            finalize_stages: Vec::new(),
        }
    }

    /// Create the default pipeline with standard stages.
    ///
    /// Stages: enhance → markdown → template → write, then index
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(EnhanceStage);
        pipeline.add_stage(MarkdownStage);
        pipeline.add_stage(TemplateStage);
        pipeline.add_stage(WriteStage);
        pipeline.add_finalize_stage(IndexStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Insert a stage before the named stage.
    ///
    /// # Panics
    ///
    /// Panics if no stage with the given name exists.
    #[allow(dead_code)]
    pub fn insert_before<S: Stage + 'static>(&mut self, name: &str, stage: S) -> &mut Self {
        let pos = self.position(name);
        self.stages.insert(pos, Box::new(stage));
        self
    }

    /// Insert a stage after the named stage.
    ///
    /// # Panics
    ///
    /// Panics if no stage with the given name exists.
    #[allow(dead_code)]
    pub fn insert_after<S: Stage + 'static>(&mut self, name: &str, stage: S) -> &mut Self {
        let pos = self.position(name);
        self.stages.insert(pos + 1, Box::new(stage));
        self
    }

    fn position(&self, name: &str) -> usize {
        self.stages
            .iter()
            .position(|s| s.name() == name)
            .unwrap_or_else(|| panic!("stage '{}' not found in pipeline", name))
    }

    /// Add a finalize stage (runs after all documents are processed).
    pub fn add_finalize_stage<S: FinalizeStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.finalize_stages.push(Box::new(stage));
        self
    }

    /// Run every stage on one document, stopping at the first failure.
    pub fn run(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        for stage in &self.stages {
            tracing::debug!(stage = stage.name(), document = %doc.name(), "running stage");
            stage.process(doc, ctx)?;
        }
        Ok(())
    }

    /// Run every finalize stage. A failing stage doesn't stop the others.
    pub fn finalize(&self, ctx: &PipelineContext) -> Vec<(&'static str, Result<(), PipelineError>)> {
        self.finalize_stages
            .iter()
            .map(|stage| (stage.name(), stage.finalize(ctx)))
            .collect()
    }

    /// Get the names of all stages in order.
    #[allow(dead_code)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::build::document::Document;
    use crate::build::enhance::Enhancer;
    use crate::build::render::Renderer;
    use crate::config::Config;

    struct NoopStage;

    impl Stage for NoopStage {
        fn name(&self) -> &'static str {
            "noop"
        }

        fn process(&self, _: &mut ProcessingDocument, _: &PipelineContext) -> Result<(), PipelineError> {
            Ok(())
        }
    }

    #[test]
    fn test_default_stage_order() {
        let pipeline = Pipeline::default();
        assert_eq!(
            pipeline.stage_names(),
            vec!["enhance", "markdown", "template", "write"]
        );
    }

    #[test]
    fn test_insert_stages() {
        let mut pipeline = Pipeline::default();
        pipeline.insert_after("enhance", NoopStage);
        pipeline.insert_before("enhance", NoopStage);
        assert_eq!(
            pipeline.stage_names(),
            vec!["noop", "enhance", "noop", "markdown", "template", "write"]
        );
    }

    #[test]
    #[should_panic(expected = "stage 'missing' not found")]
    fn test_insert_unknown_stage_panics() {
        Pipeline::default().insert_after("missing", NoopStage);
    }

    #[test]
    fn test_run_converts_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        let enhancer = Enhancer::default();
        let renderer = Renderer::new().unwrap();
        let ctx = PipelineContext::new(&config, dir.path(), &enhancer, &renderer);

        let doc = Document::new(
            PathBuf::from("/docs/guide.md"),
            "# Guide ✅\n\n**NOTA:** read me\n".to_string(),
        );
        let mut doc = ProcessingDocument::new(doc, &config.site.default_title);
        Pipeline::default().run(&mut doc, &ctx).unwrap();

        let written = dir.path().join("guide.html");
        assert_eq!(doc.output_path.as_deref(), Some(written.as_path()));

        let html = std::fs::read_to_string(written).unwrap();
        assert!(html.contains("<title>Guide ✅ - DoeSangue Documentation</title>"));
        assert!(html.contains("<span class=\"badge success\">✅</span>"));
        assert!(html.contains("<div class=\"alert info\"><strong>ℹ️ NOTA:</strong> read me</div>"));
    }

    #[test]
    fn test_write_without_template_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        let enhancer = Enhancer::default();
        let renderer = Renderer::new().unwrap();
        let ctx = PipelineContext::new(&config, dir.path(), &enhancer, &renderer);

        let mut pipeline = Pipeline::new();
        pipeline.add_stage(WriteStage);

        let doc = Document::new(PathBuf::from("guide.md"), String::new());
        let mut doc = ProcessingDocument::new(doc, "Untitled");
        let err = pipeline.run(&mut doc, &ctx).unwrap_err();

        assert!(matches!(err, PipelineError::Stage { ref stage, .. } if stage == "write"));
    }
}
