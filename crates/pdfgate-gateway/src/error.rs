//! Error types for renderer calls.

use std::io::ErrorKind;

/// Failure of a renderer call, one variant per category reported to callers.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No renderer base URL is configured.
    #[error("API_HTML_TO_PDF no configurado")]
    NotConfigured,

    /// The renderer answered with a non-2xx status.
    #[error("HTTP Error: renderer responded with status {status}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// The renderer could not be reached.
    #[error("Connection Error: {0}")]
    Connection(String),

    /// The renderer did not answer in time.
    #[error("Timeout Error: {0}")]
    Timeout(String),

    /// Any other transport or protocol failure.
    #[error("Request Exception: {0}")]
    Request(String),

    /// Failure on our side of the call.
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Stable category name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::Connection(_) => "connection",
            Self::Timeout(_) => "timeout",
            Self::Request(_) => "request",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<ureq::Error> for GatewayError {
    fn from(err: ureq::Error) -> Self {
        let message = err.to_string();
        match err {
            ureq::Error::StatusCode(status) => Self::UpstreamStatus {
                status,
                body: String::new(),
            },
            ureq::Error::Timeout(_) => Self::Timeout(message),
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
                Self::Connection(message)
            }
            ureq::Error::Io(io) => match io.kind() {
                ErrorKind::TimedOut => Self::Timeout(message),
                ErrorKind::ConnectionRefused
                | ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted
                | ErrorKind::NotConnected
                | ErrorKind::AddrNotAvailable
                | ErrorKind::BrokenPipe => Self::Connection(message),
                _ => Self::Request(message),
            },
            _ => Self::Request(message),
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("failed to encode payload: {err}"))
    }
}
