use std::path::{Path, PathBuf};

use crate::config::Config;

use super::document::Document;
use super::enhance::Enhancer;
use super::index::INDEX_FILE_NAME;
use super::paths::resolve_against;
use super::pipeline::{Pipeline, PipelineContext, PipelineError, ProcessingDocument};
use super::render::{RenderError, Renderer};

/// Errors that stop a build before any page is produced.
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// What happened to one configured document.
#[derive(Debug)]
pub enum FileOutcome {
    /// Converted and written to the given path
    Converted(PathBuf),
    /// Listed in the config but absent from the source directory
    NotFound(PathBuf),
    /// Reading, converting or writing failed
    Failed(PipelineError),
}

/// Outcome of one configured document.
#[derive(Debug)]
pub struct DocumentReport {
    /// The document name as configured
    pub name: String,
    pub outcome: FileOutcome,
}

pub struct BuildReport {
    pub output_dir: PathBuf,
    pub index_path: PathBuf,
    /// One entry per configured document, in configuration order
    pub documents: Vec<DocumentReport>,
    /// Build-wide stages that failed
    pub finalize_errors: Vec<(&'static str, PipelineError)>,
}

impl BuildReport {
    /// Number of documents converted successfully.
    pub fn converted(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| matches!(d.outcome, FileOutcome::Converted(_)))
            .count()
    }

    /// Number of documents listed in the config.
    pub fn attempted(&self) -> usize {
        self.documents.len()
    }

    /// True when every listed document was converted and every
    /// build-wide stage succeeded.
    pub fn is_complete(&self) -> bool {
        self.converted() == self.attempted() && self.finalize_errors.is_empty()
    }
}

pub struct Builder {
    config: Config,
    /// Directory the configured document names are resolved against
    source_dir: PathBuf,
    output_dir: PathBuf,
    pipeline: Pipeline,
}

impl Builder {
    pub fn new(config: Config, source_dir: PathBuf) -> Self {
        let output_dir = resolve_against(&source_dir, &config.site.output);
        Self {
            config,
            source_dir,
            output_dir,
            pipeline: Pipeline::default(),
        }
    }

    /// Write pages somewhere other than `site.output`.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Replace the default pipeline.
    #[allow(dead_code)]
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn build(&self) -> Result<BuildReport, BuildError> {
        // Build pipeline:
        // 1. Create the output directory (the only fatal failure)
        // 2. Load renderer (template)
        // 3. Convert each configured document, recording its outcome
        // 4. Run build-wide stages (index page)

        std::fs::create_dir_all(&self.output_dir).map_err(|source| BuildError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        tracing::info!("Converting documentation to HTML...");
        tracing::info!("Source directory: {}", self.source_dir.display());
        tracing::info!("Output directory: {}", self.output_dir.display());

        let renderer = self.renderer()?;
        let enhancer = Enhancer::default();
        let ctx = PipelineContext::new(&self.config, &self.output_dir, &enhancer, &renderer);

        let mut documents = Vec::with_capacity(self.config.documents.len());
        for name in &self.config.documents {
            let source_path = self.source_dir.join(name);

            let outcome = if !source_path.exists() {
                tracing::warn!("File not found: {}", name);
                FileOutcome::NotFound(source_path)
            } else {
                tracing::info!("Converting {}...", name);
                match self.convert(&source_path, &ctx) {
                    Ok(output_path) => {
                        tracing::info!("Created: {}", file_name(&output_path));
                        FileOutcome::Converted(output_path)
                    }
                    Err(e) => {
                        tracing::error!("Failed to convert {}: {}", name, e);
                        FileOutcome::Failed(e)
                    }
                }
            };

            documents.push(DocumentReport {
                name: name.clone(),
                outcome,
            });
        }

        tracing::info!("Creating index page...");
        let mut finalize_errors = Vec::new();
        for (stage, result) in self.pipeline.finalize(&ctx) {
            match result {
                Ok(()) => tracing::debug!(stage, "finalize stage done"),
                Err(e) => {
                    tracing::error!("Stage '{}' failed: {}", stage, e);
                    finalize_errors.push((stage, e));
                }
            }
        }

        let index_path = self.output_dir.join(INDEX_FILE_NAME);
        if finalize_errors.is_empty() {
            tracing::info!("Created: {}", INDEX_FILE_NAME);
        }

        let report = BuildReport {
            output_dir: self.output_dir.clone(),
            index_path,
            documents,
            finalize_errors,
        };

        tracing::info!(
            "Conversion finished: {} of {} document(s) converted",
            report.converted(),
            report.attempted()
        );

        Ok(report)
    }

    /// Read one document and run it through the pipeline.
    fn convert(&self, source_path: &Path, ctx: &PipelineContext) -> Result<PathBuf, PipelineError> {
        let doc = Document::read(source_path).map_err(|e| PipelineError::read(source_path, e))?;
        let mut doc = ProcessingDocument::new(doc, ctx.default_title);

        self.pipeline.run(&mut doc, ctx)?;

        doc.output_path.ok_or_else(|| {
            PipelineError::stage("write", format!("{} was never written", source_path.display()))
        })
    }

    /// Load the configured template, or the built-in one.
    fn renderer(&self) -> Result<Renderer, RenderError> {
        match &self.config.site.template {
            Some(template) => Renderer::from_file(&resolve_against(&self.source_dir, template)),
            None => Renderer::new(),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
