//! Error types for the HTTP server.
//!
//! Every failure leaves the server as `{"code": <status>, "message": <text>}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pdfgate_gateway::GatewayError;
use serde::Serialize;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Request body could not be decoded into the expected shape.
    #[error("{}", .0.body_text())]
    Rejected(#[from] JsonRejection),

    /// Request body decoded but a route-specific field is missing or invalid.
    #[error("{0}")]
    Validation(String),

    /// Renderer call failed.
    #[error("{0}")]
    Gateway(#[from] GatewayError),

    /// Response could not be assembled.
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Rejected(rejection) => rejection.status(),
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Gateway(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Rejected(_) | Self::Validation(_) => {
                tracing::warn!(status = status.as_u16(), error = %self, "Rejected request");
            }
            Self::Gateway(err) => {
                tracing::error!(kind = err.kind(), error = %err, "PDF conversion failed");
            }
            Self::Internal(message) => {
                tracing::error!(kind = "internal", error = %message, "PDF conversion failed");
            }
        }

        let body = ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
