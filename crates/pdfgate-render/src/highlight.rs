//! Code block rendering with class-based syntax highlighting.

use std::fmt::Write;
use std::sync::LazyLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::template::escape_html;

/// Bundled syntax definitions, loaded on first use.
static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Render a code block as `<div class="codehilite"><pre><code>`.
///
/// Tokens are wrapped in `<span>` elements carrying scope classes, so colours come
/// from the caller's stylesheet. Unknown or missing languages fall back to
/// escaped plain text inside the same wrapper.
pub(crate) fn code_block(lang: Option<&str>, source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 96);
    out.push_str(r#"<div class="codehilite"><pre><code"#);
    if let Some(lang) = lang {
        let _ = write!(out, r#" class="language-{}""#, escape_html(lang));
    }
    out.push('>');

    match lang.and_then(|lang| highlight(lang, source)) {
        Some(highlighted) => out.push_str(&highlighted),
        None => out.push_str(&escape_html(source)),
    }

    out.push_str("</code></pre></div>\n");
    out
}

/// Highlight `source` as `lang`, or `None` if the language is unknown.
fn highlight(lang: &str, source: &str) -> Option<String> {
    let syntax = SYNTAXES.find_syntax_by_token(lang)?;
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, ClassStyle::Spaced);

    for line in LinesWithEndings::from(source) {
        if let Err(e) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::debug!(lang, error = %e, "Highlighting failed, rendering plain text");
            return None;
        }
    }

    Some(generator.finalize())
}
