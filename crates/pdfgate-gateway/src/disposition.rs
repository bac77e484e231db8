//! `Content-Disposition` filename extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Filename used when the renderer does not suggest one.
pub const DEFAULT_FILENAME: &str = "documento.pdf";

/// Matches `filename=name` or `filename="name"`.
static FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename="?([^";]+)"?"#).unwrap());

/// Extract the suggested filename from a `Content-Disposition` header value.
///
/// Falls back to [`DEFAULT_FILENAME`] when the header is absent, has no
/// `filename=` parameter, or names an empty file.
///
/// ```
/// use pdfgate_gateway::filename_from_disposition;
///
/// assert_eq!(
///     filename_from_disposition(Some(r#"attachment; filename="report.pdf""#)),
///     "report.pdf"
/// );
/// assert_eq!(filename_from_disposition(None), "documento.pdf");
/// ```
#[must_use]
pub fn filename_from_disposition(header: Option<&str>) -> String {
    header
        .and_then(|value| FILENAME_RE.captures(value))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_FILENAME)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_quoted_filename() {
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=\"report.pdf\"")),
            "report.pdf"
        );
    }

    #[test]
    fn test_unquoted_filename() {
        assert_eq!(
            filename_from_disposition(Some("inline; filename=x.pdf; size=100")),
            "x.pdf"
        );
    }

    #[test]
    fn test_filename_is_trimmed() {
        assert_eq!(
            filename_from_disposition(Some("attachment; filename= spaced.pdf ")),
            "spaced.pdf"
        );
    }

    #[test]
    fn test_absent_header() {
        assert_eq!(filename_from_disposition(None), DEFAULT_FILENAME);
    }

    #[test]
    fn test_header_without_filename() {
        assert_eq!(filename_from_disposition(Some("attachment")), DEFAULT_FILENAME);
        assert_eq!(filename_from_disposition(Some("")), DEFAULT_FILENAME);
    }

    #[test]
    fn test_empty_quoted_filename() {
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=\"\"")),
            DEFAULT_FILENAME
        );
    }
}
