//! Pipeline context for sharing state across stages.

use std::path::Path;

use crate::build::enhance::Enhancer;
use crate::build::render::{NavLink, PageContext, PageInfo, Renderer, SiteContext, TocEntry, timestamp};
use crate::config::{Config, MarkdownConfig};

/// Shared context for pipeline stages.
///
/// Everything here is fixed for the whole build: every page gets the same
/// site chrome, navigation, timestamp and version.
pub struct PipelineContext<'a> {
    // === Output configuration ===
    /// Directory where output files are written
    pub output_dir: &'a Path,

    // === Site-level data ===
    /// Site metadata (name, subtitle, language)
    pub site: SiteContext,

    /// Navigation bar links, identical on every page
    pub nav: Vec<NavLink>,

    /// Title for documents without a level-1 heading
    pub default_title: &'a str,

    /// Title of the index page
    pub index_title: &'a str,

    /// Markdown processing configuration
    pub markdown_config: &'a MarkdownConfig,

    /// Build timestamp shown in page headers
    pub generated_at: String,

    /// Documentation version shown in page headers
    pub version: String,

    // === Services ===
    /// Text enhancement rules
    pub enhancer: &'a Enhancer,

    /// Page template renderer
    pub renderer: &'a Renderer,
}

impl<'a> PipelineContext<'a> {
    /// Create a new pipeline context.
    pub fn new(
        config: &'a Config,
        output_dir: &'a Path,
        enhancer: &'a Enhancer,
        renderer: &'a Renderer,
    ) -> Self {
        Self {
            output_dir,
            site: SiteContext::from(&config.site),
            nav: config.nav.iter().map(NavLink::from).collect(),
            default_title: &config.site.default_title,
            index_title: &config.site.index_title,
            markdown_config: &config.markdown,
            generated_at: timestamp(&config.site.date_format),
            version: config.site.version.clone(),
            enhancer,
            renderer,
        }
    }

    /// Build the template context for one page.
    pub fn page_context(
        &self,
        title: &str,
        url: &str,
        content: String,
        toc: Vec<TocEntry>,
    ) -> PageContext {
        PageContext {
            site: self.site.clone(),
            page: PageInfo {
                title: title.to_string(),
                url: url.to_string(),
            },
            content,
            nav: self.nav.clone(),
            toc,
            generated_at: self.generated_at.clone(),
            version: self.version.clone(),
        }
    }
}
