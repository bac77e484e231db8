//! Conversion services: `(title, content, css)` to a complete HTML document.

use crate::front_matter::{Extraction, FrontMatter, extract_front_matter};
use crate::markdown::render_markdown;
use crate::template::compose_document;

/// A complete HTML document produced by a converter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedDocument {
    /// Full HTML page.
    pub html: String,
    /// Front matter found in the source (always empty for HTML input).
    pub front_matter: FrontMatter,
}

/// Body HTML and front matter, before the page is composed.
///
/// Lets callers pick the title and stylesheet from the front matter before the
/// document is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedFragment {
    /// HTML placed inside `<body>`.
    pub html: String,
    /// Front matter found in the source.
    pub front_matter: FrontMatter,
}

impl RenderedFragment {
    /// Use an HTML fragment as-is, with no front matter.
    #[must_use]
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            front_matter: FrontMatter::default(),
        }
    }

    /// Wrap the fragment in the page template.
    #[must_use]
    pub fn into_document(self, title: &str, css: &str) -> RenderedDocument {
        RenderedDocument {
            html: compose_document(title, &self.html, css),
            front_matter: self.front_matter,
        }
    }
}

/// Converts caller content into a complete HTML document.
///
/// Implementations are stateless and side-effect free.
pub trait DocumentConverter: Default + Send + Sync + 'static {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Build the document for `content`, titled `title` and styled with `css`.
    fn convert(&self, title: &str, content: &str, css: &str) -> RenderedDocument;
}

/// Treats content as an HTML fragment and places it in the page body as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlConverter;

impl DocumentConverter for HtmlConverter {
    const NAME: &'static str = "html";

    fn convert(&self, title: &str, content: &str, css: &str) -> RenderedDocument {
        RenderedFragment::from_html(content).into_document(title, css)
    }
}

/// Strips front matter, renders Markdown, then composes the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownConverter;

impl MarkdownConverter {
    /// Strip front matter and render the remaining Markdown.
    #[must_use]
    pub fn render_fragment(&self, content: &str) -> RenderedFragment {
        let extraction = extract_front_matter(content);
        if let Extraction::Fallback { reason, .. } = &extraction {
            tracing::debug!(%reason, "Ignoring unusable front matter");
        }
        let (front_matter, body) = extraction.into_parts();

        RenderedFragment {
            html: render_markdown(body),
            front_matter,
        }
    }
}

impl DocumentConverter for MarkdownConverter {
    const NAME: &'static str = "markdown";

    fn convert(&self, title: &str, content: &str, css: &str) -> RenderedDocument {
        self.render_fragment(content).into_document(title, css)
    }
}
