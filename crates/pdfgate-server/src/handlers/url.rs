//! URL conversion endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use pdfgate_gateway::{ConversionMode, ConversionRequest, GatewayPayload};

use super::{forward, pdf_response};
use crate::error::ServerError;
use crate::state::AppState;

/// Handle POST /url/pdf.
///
/// Nothing is rendered locally; the renderer fetches the page itself.
pub(crate) async fn url_pdf(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<Response, ServerError> {
    let Json(mut request) = payload?;
    let url = request
        .url
        .take()
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ServerError::Validation("url is required".to_owned()))?;

    let pdf = forward(
        &state,
        ConversionMode::Url,
        GatewayPayload::for_url(request, url),
    )
    .await?;
    pdf_response(pdf)
}
