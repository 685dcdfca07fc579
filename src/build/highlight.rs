//! Code block rendering.
//!
//! Blocks are emitted as `<pre class="highlight"><code class="language-…">`
//! so a stylesheet or client-side highlighter can pick them up. With the
//! `highlight` feature, languages known to autumnus (tree-sitter based) are
//! highlighted at build time instead.

#[cfg(feature = "highlight")]
use autumnus::{HtmlLinkedBuilder, formatter::Formatter, languages::Language};

/// CSS class put on every `<pre>` produced here.
pub const CODE_CLASS: &str = "highlight";

/// Renders fenced and indented code blocks to HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxHighlighter;

impl SyntaxHighlighter {
    /// Render a code block.
    #[cfg(feature = "highlight")]
    pub fn highlight(&self, code: &str, language: &str) -> String {
        if language.is_empty() {
            return Self::plain_code_block(code, language);
        }

        let lang = Language::guess(language, code);
        if matches!(lang, Language::PlainText) {
            return Self::plain_code_block(code, language);
        }

        let formatter = HtmlLinkedBuilder::new().source(code).lang(lang).build();

        match formatter {
            Ok(f) => {
                let mut output: Vec<u8> = Vec::new();
                if f.format(&mut output).is_ok() {
                    String::from_utf8(output)
                        .unwrap_or_else(|_| Self::plain_code_block(code, language))
                } else {
                    Self::plain_code_block(code, language)
                }
            }
            Err(_) => Self::plain_code_block(code, language),
        }
    }

    /// Render a code block.
    #[cfg(not(feature = "highlight"))]
    pub fn highlight(&self, code: &str, language: &str) -> String {
        Self::plain_code_block(code, language)
    }

    /// Create a code block without highlighting.
    fn plain_code_block(code: &str, language: &str) -> String {
        let escaped = html_escape(code);
        if language.is_empty() {
            format!("<pre class=\"{CODE_CLASS}\"><code>{escaped}</code></pre>\n")
        } else {
            format!(
                "<pre class=\"{CODE_CLASS}\"><code class=\"language-{}\">{escaped}</code></pre>\n",
                html_escape(language)
            )
        }
    }
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_block_with_language() {
        let result = SyntaxHighlighter::plain_code_block("let x = 1 < 2;", "rust");
        assert_eq!(
            result,
            "<pre class=\"highlight\"><code class=\"language-rust\">let x = 1 &lt; 2;</code></pre>\n"
        );
    }

    #[test]
    fn test_plain_block_without_language() {
        let result = SyntaxHighlighter.highlight("echo hi", "");
        assert_eq!(result, "<pre class=\"highlight\"><code>echo hi</code></pre>\n");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let result = SyntaxHighlighter.highlight("some code", "unknown_lang_xyz");
        assert!(result.contains("<pre class=\"highlight\"><code"));
        assert!(result.contains("some code"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<div>&</div>"), "&lt;div&gt;&amp;&lt;/div&gt;");
    }
}
