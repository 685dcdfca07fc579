use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::{NavLinkConfig, SiteConfig};

/// The built-in page template.
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Template name; the `.html` suffix turns on Tera's autoescaping.
const PAGE_TEMPLATE_NAME: &str = "page.html";

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("failed to read template {0}: {1}")]
    Io(String, std::io::Error),
}

/// The page renderer, wrapping Tera.
///
/// Values are bound into the template as data, never parsed as template
/// syntax, so braces in document content can't collide with placeholders.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Create a renderer using the built-in page template.
    pub fn new() -> Result<Self, RenderError> {
        Self::from_source(PAGE_TEMPLATE)
    }

    /// Create a renderer from a template file on disk.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        if !path.exists() {
            return Err(RenderError::TemplateNotFound(path.display().to_string()));
        }

        let source = std::fs::read_to_string(path)
            .map_err(|e| RenderError::Io(path.display().to_string(), e))?;
        Self::from_source(&source)
    }

    fn from_source(source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    /// Render a page with the given context.
    pub fn render_page(&self, context: &PageContext) -> Result<String, RenderError> {
        let mut tera_context = Context::new();
        tera_context.insert("site", &context.site);
        tera_context.insert("page", &context.page);
        tera_context.insert("content", &context.content);
        tera_context.insert("nav", &context.nav);
        tera_context.insert("toc", &context.toc);
        tera_context.insert("generated_at", &context.generated_at);
        tera_context.insert("version", &context.version);

        Ok(self.tera.render(PAGE_TEMPLATE_NAME, &tera_context)?)
    }
}

/// Context passed to the page template.
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub site: SiteContext,
    pub page: PageInfo,
    /// Rendered HTML body, inserted unescaped
    pub content: String,
    pub nav: Vec<NavLink>,
    /// Table of contents for the current page.
    ///
    /// The built-in template doesn't show it (authors place a `[TOC]`
    /// marker instead); it is bound as `toc` for custom templates.
    pub toc: Vec<TocEntry>,
    /// Human-readable build timestamp
    pub generated_at: String,
    /// Documentation version
    pub version: String,
}

/// Site-level information.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub name: String,
    pub subtitle: String,
    pub lang: String,
}

impl From<&SiteConfig> for SiteContext {
    fn from(site: &SiteConfig) -> Self {
        Self {
            name: site.name.clone(),
            subtitle: site.subtitle.clone(),
            lang: site.lang.clone(),
        }
    }
}

/// Information about the current page.
#[derive(Debug, Serialize)]
pub struct PageInfo {
    pub title: String,
    /// Output file name, e.g. "architecture.html"
    pub url: String,
}

/// A single navigation link.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub title: String,
    pub url: String,
}

impl From<&NavLinkConfig> for NavLink {
    fn from(link: &NavLinkConfig) -> Self {
        Self {
            title: link.title.clone(),
            url: link.url.clone(),
        }
    }
}

/// A table of contents entry for the current page.
#[derive(Debug, Clone, Serialize)]
pub struct TocEntry {
    /// The heading text
    pub text: String,
    /// The heading id (for anchor links)
    pub id: String,
    /// The heading level (1-6)
    pub level: u8,
}

/// Format the current local time for the page header.
pub fn timestamp(format: &str) -> String {
    chrono::Local::now().format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn context(title: &str, content: &str) -> PageContext {
        let config = Config::default();
        PageContext {
            site: SiteContext::from(&config.site),
            page: PageInfo {
                title: title.to_string(),
                url: "test.html".to_string(),
            },
            content: content.to_string(),
            nav: config.nav.iter().map(NavLink::from).collect(),
            toc: Vec::new(),
            generated_at: "01/02/2026 às 10:30".to_string(),
            version: "1.0".to_string(),
        }
    }

    #[test]
    fn test_render_page_binds_values() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_page(&context("Arquitetura", "<p>Body text.</p>"))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"pt-BR\">"));
        assert!(html.contains("<title>Arquitetura - DoeSangue Documentation</title>"));
        assert!(html.contains("<h1>🩸 Arquitetura</h1>"));
        assert!(html.contains("Gerado em 01/02/2026 às 10:30 | Versão 1.0"));
        assert!(html.contains("<p>Body text.</p>"));
    }

    #[test]
    fn test_nav_links_appear_exactly_once() {
        let renderer = Renderer::new().unwrap();
        // Body mentions a nav target to make sure only the template emits links
        let html = renderer
            .render_page(&context("T", "<p>see architecture.html</p>"))
            .unwrap();

        for link in Config::default().nav {
            let anchor = format!("<a href=\"{}\">{}</a>", link.url, link.title);
            assert_eq!(html.matches(&anchor).count(), 1, "{anchor}");
        }
    }

    #[test]
    fn test_braces_in_content_are_literal() {
        let renderer = Renderer::new().unwrap();
        let body = "<pre><code>{{ page.title }} {% if x %} {title} {#</code></pre>";
        let html = renderer.render_page(&context("T", body)).unwrap();

        assert!(html.contains(body));
    }

    #[test]
    fn test_title_is_escaped() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_page(&context("<script>x</script>", ""))
            .unwrap();

        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_custom_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<h1>{{ page.title }}</h1>{{ content | safe }}").unwrap();

        let renderer = Renderer::from_file(&path).unwrap();
        let html = renderer.render_page(&context("T", "<p>x</p>")).unwrap();
        assert_eq!(html, "<h1>T</h1><p>x</p>");
    }

    #[test]
    fn test_custom_template_can_list_toc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(
            &path,
            "{% for entry in toc %}<a href=\"#{{ entry.id }}\">{{ entry.text }}</a>{% endfor %}",
        )
        .unwrap();

        let mut ctx = context("T", "");
        ctx.toc = vec![
            TocEntry {
                text: "Intro".to_string(),
                id: "intro".to_string(),
                level: 2,
            },
            TocEntry {
                text: "Setup".to_string(),
                id: "setup".to_string(),
                level: 2,
            },
        ];

        let html = Renderer::from_file(&path).unwrap().render_page(&ctx).unwrap();
        assert_eq!(html, "<a href=\"#intro\">Intro</a><a href=\"#setup\">Setup</a>");
    }

    #[test]
    fn test_missing_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Renderer::from_file(&dir.path().join("nope.html"));
        assert!(matches!(result, Err(RenderError::TemplateNotFound(_))));
    }

    #[test]
    fn test_timestamp_format() {
        let stamp = timestamp("%Y");
        assert_eq!(stamp.len(), 4);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
