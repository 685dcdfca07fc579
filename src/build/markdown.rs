//! Markdown rendering with heading anchors, TOC extraction and code blocks.

use std::collections::HashSet;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

use super::highlight::{SyntaxHighlighter, html_escape};
use super::render::TocEntry;
use crate::config::MarkdownConfig;

#[derive(thiserror::Error, Debug)]
pub enum MarkdownError {
    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),
}

/// Result of rendering markdown, containing both HTML and table of contents.
#[derive(Debug)]
pub struct MarkdownOutput {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Parser options plus the extensions implemented on top of the event stream.
#[derive(Debug)]
struct Extensions {
    options: Options,
    /// Heading ids, TOC collection and `[TOC]` placeholders
    toc: bool,
    /// `<pre class="highlight">` code blocks
    codehilite: bool,
}

impl Extensions {
    fn from_config(config: &MarkdownConfig) -> Result<Self, MarkdownError> {
        let mut ext = Self {
            options: Options::empty(),
            toc: false,
            codehilite: false,
        };
        for extension in &config.extensions {
            match extension.as_str() {
                "codehilite" => ext.codehilite = true,
                "definition_lists" => ext.options.insert(Options::ENABLE_DEFINITION_LIST),
                // Fenced code is part of CommonMark and always on
                "fenced_code" => {}
                "footnotes" => ext.options.insert(Options::ENABLE_FOOTNOTES),
                "gfm" => ext.options.insert(Options::ENABLE_GFM),
                "heading_attributes" => ext.options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
                "strikethrough" => ext.options.insert(Options::ENABLE_STRIKETHROUGH),
                "tables" => ext.options.insert(Options::ENABLE_TABLES),
                "tasklists" => ext.options.insert(Options::ENABLE_TASKLISTS),
                "toc" => ext.toc = true,
                other => return Err(MarkdownError::InvalidExtension(other.to_string())),
            }
        }
        Ok(ext)
    }
}

/// A heading whose inner events are held back until its id is known.
struct HeadingState<'a> {
    level: HeadingLevel,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
    inner: Vec<Event<'a>>,
    text: String,
}

struct CodeState {
    language: String,
    content: String,
}

/// Render markdown to HTML using pulldown-cmark.
pub fn render_markdown(
    markdown: &str,
    markdown_config: &MarkdownConfig,
) -> Result<MarkdownOutput, MarkdownError> {
    let ext = Extensions::from_config(markdown_config)?;
    let highlighter = SyntaxHighlighter;
    let parser = Parser::new_ext(markdown, ext.options);

    let mut events: Vec<Event> = Vec::new();
    let mut heading: Option<HeadingState> = None;
    let mut paragraph: Option<Vec<Event>> = None;
    let mut code: Option<CodeState> = None;

    let mut used_heading_ids: HashSet<String> = HashSet::new();
    let mut toc_entries: Vec<TocEntry> = Vec::new();
    // Positions in `events` of `[TOC]` placeholders
    let mut toc_slots: Vec<usize> = Vec::new();

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) if ext.codehilite => {
                code = Some(CodeState {
                    language: match kind {
                        CodeBlockKind::Fenced(info) => code_language(&info),
                        CodeBlockKind::Indented => String::new(),
                    },
                    content: String::new(),
                });
            }
            Event::Text(text) if code.is_some() => {
                if let Some(state) = code.as_mut() {
                    state.content.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) if code.is_some() => {
                if let Some(state) = code.take() {
                    let block = highlighter.highlight(&state.content, &state.language);
                    events.push(Event::Html(block.into()));
                }
            }
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) if ext.toc => {
                heading = Some(HeadingState {
                    level,
                    id: id.map(|id| id.to_string()),
                    classes: classes.iter().map(|c| c.to_string()).collect(),
                    attrs: attrs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.as_ref().map(|v| v.to_string())))
                        .collect(),
                    inner: Vec::new(),
                    text: String::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) if heading.is_some() => {
                if let Some(state) = heading.take() {
                    let id = match &state.id {
                        Some(id) => id.clone(),
                        None => unique_id(&slugify(&state.text), &used_heading_ids),
                    };
                    used_heading_ids.insert(id.clone());

                    toc_entries.push(TocEntry {
                        text: state.text.clone(),
                        id: id.clone(),
                        level: state.level as u8,
                    });

                    events.push(Event::Html(render_heading(state, &id).into()));
                }
            }
            Event::Start(Tag::Paragraph) if ext.toc && heading.is_none() => {
                paragraph = Some(Vec::new());
            }
            Event::End(TagEnd::Paragraph) if paragraph.is_some() => {
                if let Some(buffered) = paragraph.take() {
                    if is_toc_marker(&buffered) {
                        toc_slots.push(events.len());
                        events.push(Event::Html(CowStr::Borrowed("")));
                    } else {
                        events.push(Event::Start(Tag::Paragraph));
                        events.extend(buffered);
                        events.push(Event::End(TagEnd::Paragraph));
                    }
                }
            }
            event => {
                if let Some(state) = heading.as_mut() {
                    if let Event::Text(text) | Event::Code(text) = &event {
                        state.text.push_str(text);
                    }
                    state.inner.push(event);
                } else if let Some(buffered) = paragraph.as_mut() {
                    buffered.push(event);
                } else {
                    events.push(event);
                }
            }
        }
    }

    if !toc_slots.is_empty() {
        let toc_html = render_toc(&toc_entries);
        for slot in toc_slots {
            events[slot] = Event::Html(toc_html.clone().into());
        }
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    Ok(MarkdownOutput {
        html: html_output,
        toc: toc_entries,
    })
}

/// First word of a fenced block's info string: "rust,ignore" -> "rust".
fn code_language(info: &str) -> String {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Emit a heading with its id, keeping any classes and attributes.
fn render_heading(state: HeadingState, id: &str) -> String {
    let class_attr = if state.classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", html_escape(&state.classes.join(" ")))
    };

    let extra_attrs = state
        .attrs
        .iter()
        .map(|(k, v)| match v {
            Some(val) => format!(" {}=\"{}\"", k, html_escape(val)),
            None => format!(" {}", k),
        })
        .collect::<String>();

    let mut inner = String::new();
    html::push_html(&mut inner, state.inner.into_iter());

    let level = state.level as usize;
    format!(
        "<h{level} id=\"{}\"{class_attr}{extra_attrs}>{inner}</h{level}>\n",
        html_escape(id)
    )
}

/// A paragraph containing nothing but the text `[TOC]`.
fn is_toc_marker(events: &[Event]) -> bool {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) => text.push_str(t),
            _ => return false,
        }
    }
    text.trim() == "[TOC]"
}

/// Render collected headings as a nested list.
pub fn render_toc(entries: &[TocEntry]) -> String {
    let mut html = String::from("<div class=\"toc\">\n");
    // Heading levels of the currently open lists, outermost first
    let mut open: Vec<u8> = Vec::new();

    for entry in entries {
        match open.last() {
            None => {
                html.push_str("<ul>\n");
                open.push(entry.level);
            }
            Some(&current) if entry.level > current => {
                html.push_str("\n<ul>\n");
                open.push(entry.level);
            }
            Some(_) => {
                html.push_str("</li>\n");
                while open.len() > 1 && open.last().is_some_and(|&l| entry.level < l) {
                    open.pop();
                    html.push_str("</ul>\n</li>\n");
                }
            }
        }
        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            html_escape(&entry.id),
            html_escape(&entry.text)
        ));
    }

    for _ in &open {
        html.push_str("</li>\n</ul>\n");
    }
    html.push_str("</div>\n");
    html
}

/// Convert a string to a slug suitable for use as an HTML id.
///
/// Letters outside ASCII are kept as they are (`visão-geral`).
fn slugify(s: &str) -> String {
    let slug = s
        .to_lowercase()
        .replace(' ', "-")
        .replace(|c: char| !c.is_alphanumeric() && c != '-' && c != '_', "");
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

/// Append `-1`, `-2`, ... until the id is unused.
fn unique_id(base_id: &str, used: &HashSet<String>) -> String {
    let mut id = base_id.to_string();
    let mut suffix = 1;
    while used.contains(&id) {
        id = format!("{}-{}", base_id, suffix);
        suffix += 1;
    }
    id
}
