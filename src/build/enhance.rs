//! Text enhancement applied to raw markdown before parsing.
//!
//! Enhancements are an ordered list of regex substitutions that turn
//! status glyphs into styled badges and bold markers such as
//! `**IMPORTANTE:**` into alert blocks. The rules don't overlap, so each one
//! only ever sees the author's text, never another rule's markup.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// A single pattern-to-markup substitution.
#[derive(Debug, Clone)]
pub struct EnhancementRule {
    pattern: Regex,
    /// Replacement text; `$1`-style group references are expanded
    replacement: String,
}

impl EnhancementRule {
    /// Create a rule from a regex and a replacement template.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Wrap every occurrence of `glyph` in `open`/`close` markup.
    ///
    /// An occurrence that already sits inside the full wrapper is matched
    /// together with it and re-emitted unchanged, so the rule is idempotent.
    /// Markup that only looks like half a wrapper is left to the author.
    pub fn wrap(glyph: &str, open: &str, close: &str) -> Result<Self, regex::Error> {
        let glyph_pattern = regex::escape(glyph);
        let pattern = format!(
            "{}{}{}|{}",
            regex::escape(open),
            glyph_pattern,
            regex::escape(close),
            glyph_pattern
        );
        let replacement = format!("{open}{glyph}{close}").replace('$', "$$");
        Self::new(&pattern, replacement)
    }

    /// Turn a bold `**MARKER:**` into an alert block spanning the rest of the line.
    ///
    /// The block is closed at the end of the line it opens on.
    pub fn alert(marker: &str, class: &str, label: &str) -> Result<Self, regex::Error> {
        let pattern = format!(r"\*\*{}\*\*([^\n]*)", regex::escape(marker));
        let replacement = format!(
            r#"<div class="alert {}"><strong>{}</strong>${{1}}</div>"#,
            class.replace('$', "$$"),
            label.replace('$', "$$"),
        );
        Self::new(&pattern, replacement)
    }

    /// Apply this rule to `text`. Borrows when nothing matched.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

static DEFAULT_RULES: LazyLock<Vec<EnhancementRule>> = LazyLock::new(|| {
    vec![
        EnhancementRule::wrap("✅", r#"<span class="badge success">"#, "</span>"),
        EnhancementRule::wrap("❌", r#"<span class="badge danger">"#, "</span>"),
        EnhancementRule::wrap("🎯", r#"<span class="emoji">"#, "</span>"),
        EnhancementRule::wrap("📊", r#"<span class="emoji">"#, "</span>"),
        EnhancementRule::wrap("🚀", r#"<span class="emoji">"#, "</span>"),
        EnhancementRule::alert("IMPORTANTE:", "warning", "⚠️ IMPORTANTE:"),
        EnhancementRule::alert("NOTA:", "info", "ℹ️ NOTA:"),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .expect("Invalid built-in enhancement rule")
});

/// Applies an ordered list of enhancement rules.
#[derive(Debug, Clone)]
pub struct Enhancer {
    rules: Vec<EnhancementRule>,
}

impl Enhancer {
    /// Create an enhancer with custom rules, applied in the given order.
    pub fn new(rules: Vec<EnhancementRule>) -> Self {
        Self { rules }
    }

    /// Apply every rule in order.
    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_string();
        for rule in &self.rules {
            let replaced = match rule.apply(&text) {
                Cow::Owned(replaced) => Some(replaced),
                Cow::Borrowed(_) => None,
            };
            if let Some(replaced) = replaced {
                text = replaced;
            }
        }
        text
    }
}

impl Default for Enhancer {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges() {
        let enhancer = Enhancer::default();
        assert_eq!(
            enhancer.apply("Done ✅"),
            r#"Done <span class="badge success">✅</span>"#
        );
        assert_eq!(
            enhancer.apply("❌ failed"),
            r#"<span class="badge danger">❌</span> failed"#
        );
        assert_eq!(
            enhancer.apply("🎯 📊 🚀"),
            r#"<span class="emoji">🎯</span> <span class="emoji">📊</span> <span class="emoji">🚀</span>"#
        );
    }

    #[test]
    fn test_alerts_are_closed_on_the_same_line() {
        let enhancer = Enhancer::default();
        assert_eq!(
            enhancer.apply("**IMPORTANTE:** back up first\nnext line"),
            "<div class=\"alert warning\"><strong>⚠️ IMPORTANTE:</strong> back up first</div>\nnext line"
        );
        assert_eq!(
            enhancer.apply("- **NOTA:** optional"),
            r#"- <div class="alert info"><strong>ℹ️ NOTA:</strong> optional</div>"#
        );
    }

    #[test]
    fn test_no_patterns_is_a_no_op() {
        let enhancer = Enhancer::default();
        let text = "# Title\n\nPlain *markdown* with **bold** and IMPORTANTE: unbolded.";
        assert_eq!(enhancer.apply(text), text);
    }

    #[test]
    fn test_idempotent() {
        let enhancer = Enhancer::default();
        let text = "# Status ✅\n\n**IMPORTANTE:** read 🎯 this\n\n| a | ❌ |\n\n**NOTA:** 📊 🚀";
        let once = enhancer.apply(text);
        let twice = enhancer.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_author_markup_around_glyph_stays_balanced() {
        let enhancer = Enhancer::default();
        let out = enhancer.apply(r#"<span class="x">✅</span>"#);

        assert_eq!(
            out,
            r#"<span class="x"><span class="badge success">✅</span></span>"#
        );
        assert_eq!(out.matches("<span").count(), out.matches("</span>").count());

        let out = enhancer.apply(r#"<span class="emoji">🎯 done"#);
        assert_eq!(
            out,
            r#"<span class="emoji"><span class="emoji">🎯</span> done"#
        );
    }

    #[test]
    fn test_custom_rule_order() {
        let enhancer = Enhancer::new(vec![
            EnhancementRule::new("foo", "bar").unwrap(),
            EnhancementRule::new("bar", "baz").unwrap(),
        ]);
        // Later rules see the output of earlier ones
        assert_eq!(enhancer.apply("foo"), "baz");
    }

    #[test]
    fn test_wrap_escapes_replacement() {
        let rule = EnhancementRule::wrap("$", "<b>", "</b>").unwrap();
        assert_eq!(rule.apply("cost: $5"), "cost: <b>$</b>5");
    }
}
