//! Markdown and HTML to standalone HTML document conversion.
//!
//! The pipeline has three stages, each usable on its own:
//!
//! 1. [`extract_front_matter`] splits an optional YAML block from a document
//! 2. [`render_markdown`] turns the Markdown body into an HTML fragment
//!    (tables, fenced code, class-based syntax highlighting)
//! 3. [`compose_document`] wraps title, fragment, and CSS into a complete page
//!
//! [`MarkdownConverter`] and [`HtmlConverter`] chain these stages behind the
//! [`DocumentConverter`] trait.
//!
//! # Example
//!
//! ```
//! use pdfgate_render::{DocumentConverter, MarkdownConverter};
//!
//! let doc = MarkdownConverter.convert("Notes", "---\nauthor: Ana\n---\n# Hi", "");
//! assert!(doc.html.starts_with("<!DOCTYPE html>"));
//! assert!(doc.html.contains("<h1>Hi</h1>"));
//! assert_eq!(doc.front_matter.get_str("author"), Some("Ana"));
//! ```

mod convert;
mod front_matter;
mod highlight;
mod markdown;
mod style;
mod template;

pub use convert::{
    DocumentConverter, HtmlConverter, MarkdownConverter, RenderedDocument, RenderedFragment,
};
pub use front_matter::{Extraction, FrontMatter, extract_front_matter};
pub use markdown::render_markdown;
pub use style::DEFAULT_CSS;
pub use template::{compose_document, escape_html};
