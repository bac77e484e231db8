//! HTTP request handlers.

pub(crate) mod documents;
pub(crate) mod url;

use axum::Json;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use pdfgate_gateway::{ConversionMode, GatewayError, GatewayPayload, PdfDocument};
use serde_json::{Value, json};

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn index() -> Json<Value> {
    Json(json!({"message": "MD TO PDF"}))
}

/// Send `payload` to the renderer without blocking the async runtime.
async fn forward(
    state: &AppState,
    mode: ConversionMode,
    payload: GatewayPayload,
) -> Result<PdfDocument, ServerError> {
    let client = state.gateway.clone();
    let pdf = tokio::task::spawn_blocking(move || client.convert(mode, &payload))
        .await
        .map_err(|e| GatewayError::Internal(format!("renderer task failed: {e}")))??;
    Ok(pdf)
}

/// Relay a renderer PDF to the caller, displayed inline.
fn pdf_response(pdf: PdfDocument) -> Result<Response, ServerError> {
    let content_type = HeaderValue::from_str(pdf.content_type())
        .map_err(|e| ServerError::Internal(format!("invalid content type: {e}")))?;
    let disposition = HeaderValue::from_str(&pdf.inline_disposition())
        .map_err(|e| ServerError::Internal(format!("invalid filename: {e}")))?;
    let length = HeaderValue::from(pdf.bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CONTENT_LENGTH, length),
        ],
        pdf.bytes,
    )
        .into_response())
}
