//! Standalone HTML document template.

use std::fmt::Write;

/// Wrap a title, an HTML fragment, and CSS into a complete HTML5 document.
///
/// All three inputs are interpolated verbatim. Nothing is escaped, so a title
/// containing markup ends up as markup; callers that accept untrusted input
/// must escape it first (see [`escape_html`]). This is the only place the page
/// skeleton is defined.
///
/// ```
/// let page = pdfgate_render::compose_document("Report", "<p>Body</p>", "p { margin: 0; }");
/// assert!(page.starts_with("<!DOCTYPE html>"));
/// assert!(page.contains("<title>Report</title>"));
/// ```
#[must_use]
pub fn compose_document(title: &str, html: &str, css: &str) -> String {
    let mut page = String::with_capacity(html.len() + css.len() + title.len() + 320);

    page.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    page.push_str("    <meta charset=\"UTF-8\">\n");
    page.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(page, "    <style>\n{css}\n    </style>");
    let _ = writeln!(page, "    <title>{title}</title>");
    page.push_str("</head>\n<body>\n");
    page.push_str(html);
    page.push_str("\n</body>\n</html>\n");
    page
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_document_structure() {
        let page = compose_document("T", "<p>hi</p>", "body { color: red; }");
        assert_eq!(
            page,
            "<!DOCTYPE html>\n\
             <html lang=\"es\">\n\
             <head>\n    \
             <meta charset=\"UTF-8\">\n    \
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n    \
             <style>\nbody { color: red; }\n    </style>\n    \
             <title>T</title>\n\
             </head>\n\
             <body>\n\
             <p>hi</p>\n\
             </body>\n\
             </html>\n"
        );
    }

    #[test]
    fn test_inputs_are_not_escaped() {
        let page = compose_document("A & <b>B</b>", "<script>x()</script>", "a > b {}");
        assert!(page.contains("<title>A & <b>B</b></title>"));
        assert!(page.contains("<body>\n<script>x()</script>\n</body>"));
        assert!(page.contains("<style>\na > b {}\n    </style>"));
    }

    #[test]
    fn test_single_title_element() {
        let page = compose_document("Only", "<h1>Heading</h1>", "");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert_eq!(page.matches("<title>").count(), 1);
        assert_eq!(page.matches("</title>").count(), 1);
    }

    #[test]
    fn test_empty_css_keeps_style_block() {
        let page = compose_document("T", "", "");
        assert!(page.contains("<style>\n\n    </style>"));
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("\"it's\""), "&quot;it&#x27;s&quot;");
    }
}
