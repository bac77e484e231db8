//! Markdown and HTML conversion endpoints.
//!
//! Both route groups share these handlers; the converter type parameter picks
//! how `content` is interpreted and which renderer endpoint receives the result.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Html, Response};
use pdfgate_gateway::{ConversionMode, ConversionRequest, GatewayPayload};
use pdfgate_render::{DocumentConverter, HtmlConverter, MarkdownConverter};

use super::{forward, pdf_response};
use crate::error::ServerError;
use crate::state::AppState;

/// A converter whose documents can be forwarded to the renderer.
pub(crate) trait PdfConverter: DocumentConverter {
    /// Renderer mode for documents from this converter.
    const MODE: ConversionMode;
}

impl PdfConverter for MarkdownConverter {
    const MODE: ConversionMode = ConversionMode::Markdown;
}

impl PdfConverter for HtmlConverter {
    const MODE: ConversionMode = ConversionMode::Html;
}

/// Handle POST /{markdown,html}/html.
pub(crate) async fn render_html<C: DocumentConverter>(
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<Html<String>, ServerError> {
    let Json(request) = payload?;
    let document = C::default().convert(&request.title, &request.content, &request.css);
    Ok(Html(document.html))
}

/// Handle POST /{markdown,html}/pdf.
pub(crate) async fn render_pdf<C: PdfConverter>(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<Response, ServerError> {
    let Json(request) = payload?;
    let document = C::default().convert(&request.title, &request.content, &request.css);
    tracing::debug!(
        converter = C::NAME,
        bytes = document.html.len(),
        "Rendered document"
    );

    let pdf = forward(
        &state,
        C::MODE,
        GatewayPayload::for_document(request, document.html),
    )
    .await?;
    pdf_response(pdf)
}
