//! Markdown to HTML fragment rendering.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::highlight;

/// Code block being collected between its start and end events.
struct PendingCode {
    lang: Option<String>,
    source: String,
}

impl PendingCode {
    fn new(kind: &CodeBlockKind<'_>) -> Self {
        let lang = match kind {
            CodeBlockKind::Fenced(info) => fence_language(info),
            CodeBlockKind::Indented => None,
        };
        Self {
            lang,
            source: String::new(),
        }
    }

    fn render(&self) -> String {
        highlight::code_block(self.lang.as_deref(), &self.source)
    }
}

/// Extract the language from a fence info string.
///
/// Accepts both ` ```rust title="x" ` and ` ```{.rust} ` forms.
fn fence_language(info: &str) -> Option<String> {
    let token = info.split_whitespace().next()?;
    let lang = token.trim_start_matches('{').trim_start_matches('.').trim_end_matches('}');
    (!lang.is_empty()).then(|| lang.to_owned())
}

/// Render Markdown to an HTML fragment.
///
/// Supports tables and fenced code blocks; every code block is highlighted.
/// Raw HTML in the input passes through unchanged, so the output is not
/// sanitized. Same input always yields the same output.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut events: Vec<Event<'_>> = Vec::new();
    let mut pending: Option<PendingCode> = None;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => pending = Some(PendingCode::new(&kind)),
            Event::End(TagEnd::CodeBlock) => {
                if let Some(code) = pending.take() {
                    events.push(Event::Html(CowStr::from(code.render())));
                }
            }
            Event::Text(text) => match pending.as_mut() {
                Some(code) => code.source.push_str(&text),
                None => events.push(Event::Text(text)),
            },
            other => events.push(other),
        }
    }

    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    html
}
