//! Default pipeline stages.
//!
//! The standard document processing pipeline consists of:
//!
//! 1. **EnhanceStage** - Turn status glyphs and alert markers into markup
//! 2. **MarkdownStage** - Convert markdown to HTML with heading ids and TOC
//! 3. **TemplateStage** - Wrap content in the page template
//! 4. **WriteStage** - Write final HTML to output directory
//!
//! **IndexStage** runs once after all documents, whatever their outcome.

mod enhance;
mod index;
mod markdown;
mod template;
mod write;

pub use enhance::EnhanceStage;
pub use index::IndexStage;
pub use markdown::MarkdownStage;
pub use template::TemplateStage;
pub use write::WriteStage;
