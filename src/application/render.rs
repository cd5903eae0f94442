//! Body-text rendering: Markdown via Comrak, or blank-line paragraphs.

use comrak::{Arena, format_html, options::Options, parse_document};
use once_cell::sync::Lazy;
use thiserror::Error;

/// Structured errors surfaced by the rendering stage. A failure here aborts
/// the save attempt; silently emitting an empty story would be worse.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("markdown conversion failed: {message}")]
    Markdown { message: String },
}

static MARKDOWN_OPTIONS: Lazy<Options<'static>> = Lazy::new(default_options);

/// Render the raw body into an HTML fragment.
///
/// In Markdown mode the text goes through Comrak unmodified; whatever the
/// converter produces is the fragment, with no further escaping imposed. In
/// plain mode the text is split into paragraphs on blank-line boundaries.
pub fn render(body: &str, markdown: bool) -> Result<String, RenderError> {
    if markdown {
        markdown_fragment(body)
    } else {
        Ok(paragraph_fragment(body))
    }
}

fn markdown_fragment(body: &str) -> Result<String, RenderError> {
    let arena = Arena::new();
    let root = parse_document(&arena, body, &MARKDOWN_OPTIONS);

    let mut html = String::new();
    format_html(root, &MARKDOWN_OPTIONS, &mut html).map_err(|err| RenderError::Markdown {
        message: err.to_string(),
    })?;
    Ok(html)
}

/// Split on any run of two or more newlines; empty segments are dropped, so
/// extra blank lines and leading/trailing runs produce nothing.
fn paragraph_fragment(body: &str) -> String {
    let normalized = body.replace("\r\n", "\n");

    let paragraphs: Vec<String> = normalized
        .split("\n\n")
        .map(|segment| segment.trim_matches('\n'))
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| format!("<p>{}</p>", escape_text(segment)))
        .collect();

    paragraphs.join("\n")
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();

    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;
    ext.footnotes = true;
    ext.description_lists = true;

    let render = &mut options.render;
    render.github_pre_lang = true;
    render.r#unsafe = true;

    options
}
