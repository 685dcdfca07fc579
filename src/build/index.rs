//! The hand-written landing page.
//!
//! Unlike every other page, the index isn't converted from a markdown
//! document: its body is a fixed HTML fragment describing the available
//! documents, who should read what, and the technology stack.

use super::pipeline::PipelineContext;
use super::render::RenderError;

/// Body of the index page.
const INDEX_CONTENT: &str = include_str!("../../templates/index_content.html");

/// File name of the index page in the output directory.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Render the complete index page.
pub fn render_index(ctx: &PipelineContext) -> Result<String, RenderError> {
    let page = ctx.page_context(
        ctx.index_title,
        INDEX_FILE_NAME,
        INDEX_CONTENT.to_string(),
        Vec::new(),
    );
    ctx.renderer.render_page(&page)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::build::enhance::Enhancer;
    use crate::build::render::Renderer;
    use crate::config::Config;

    #[test]
    fn test_render_index() {
        let config = Config::default();
        let enhancer = Enhancer::default();
        let renderer = Renderer::new().unwrap();
        let ctx = PipelineContext::new(&config, Path::new("."), &enhancer, &renderer);

        let html = render_index(&ctx).unwrap();

        assert!(html.contains("<title>Documentação Completa do Sistema DoeSangue - DoeSangue Documentation</title>"));
        assert!(html.contains("<div class=\"stats\">"));
        assert!(html.contains("<a href=\"SWAGGER-RESUMO-IMPLEMENTACAO.html\">"));
        assert!(html.contains("<td>Spring Boot</td>"));
        // Fragment is inserted as-is, not escaped
        assert!(!html.contains("&lt;div class=&quot;stats"));
    }

    #[test]
    fn test_index_links_every_default_document() {
        let config = Config::default();
        for document in &config.documents {
            let page = crate::build::paths::output_file_name(Path::new(document));
            assert!(
                INDEX_CONTENT.contains(&format!("href=\"{page}\"")),
                "index does not link {page}"
            );
        }
    }
}
