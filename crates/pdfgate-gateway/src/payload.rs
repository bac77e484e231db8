//! Outbound JSON payload for the renderer.

use serde::Serialize;

use crate::request::{ConversionRequest, Margin, PaperSize};

/// Body posted to the renderer.
///
/// A named `size` wins over explicit dimensions: when it is set, `width` and
/// `height` are always sent as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GatewayPayload {
    pub title: String,
    /// Complete HTML document; empty in URL mode.
    pub html: String,
    /// Page to render; omitted outside URL mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub size: Option<PaperSize>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub margin: Margin,
}

impl GatewayPayload {
    /// Payload carrying a rendered HTML document.
    #[must_use]
    pub fn for_document(request: ConversionRequest, html: String) -> Self {
        Self::build(request, html, None)
    }

    /// Payload asking the renderer to fetch `url` itself.
    #[must_use]
    pub fn for_url(request: ConversionRequest, url: String) -> Self {
        Self::build(request, String::new(), Some(url))
    }

    fn build(request: ConversionRequest, html: String, url: Option<String>) -> Self {
        let (width, height) = if request.size.is_some() {
            (None, None)
        } else {
            (request.width, request.height)
        };

        Self {
            title: request.title,
            html,
            url,
            size: request.size,
            width,
            height,
            margin: request.margin,
        }
    }
}
