//! Conversion modes and their renderer endpoints.

use std::fmt;

/// Which conversion path produced the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionMode {
    /// Markdown rendered locally, HTML forwarded.
    Markdown,
    /// HTML templated locally, HTML forwarded.
    Html,
    /// URL forwarded, nothing rendered locally.
    Url,
}

impl ConversionMode {
    /// Path appended to the renderer base URL.
    #[must_use]
    pub fn path_suffix(self) -> &'static str {
        match self {
            Self::Markdown => "/pdf",
            Self::Html => "",
            Self::Url => "/url-to-pdf",
        }
    }

    /// Lowercase name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
