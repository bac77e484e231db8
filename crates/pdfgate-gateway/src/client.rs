//! Blocking HTTP client for the renderer.
//!
//! One POST per conversion. Run calls on a blocking-capable thread when used
//! from async code.

use std::time::Duration;

use tracing::{debug, info};
use ureq::Agent;

use crate::disposition::filename_from_disposition;
use crate::error::GatewayError;
use crate::mode::ConversionMode;
use crate::payload::GatewayPayload;

/// Largest PDF body accepted from the renderer.
const MAX_PDF_BYTES: u64 = 100 * 1024 * 1024;

/// Content type assumed when the renderer sends none.
const PDF_CONTENT_TYPE: &str = "application/pdf";

/// PDF returned by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct PdfDocument {
    /// Suggested filename, from the renderer's `Content-Disposition`.
    pub filename: String,
    /// Content type reported by the renderer, if any.
    pub content_type: Option<String>,
    /// Raw response body.
    pub bytes: Vec<u8>,
}

impl PdfDocument {
    /// Content type to relay, defaulting to `application/pdf`.
    #[must_use]
    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(PDF_CONTENT_TYPE)
    }

    /// `Content-Disposition` value asking the client to display the PDF inline.
    #[must_use]
    pub fn inline_disposition(&self) -> String {
        format!("inline; filename=\"{}\"", self.filename)
    }
}

/// Renderer client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct GatewayClient {
    agent: Agent,
    base_url: Option<String>,
}

impl GatewayClient {
    /// Create a client for `base_url` with a per-call `timeout`.
    ///
    /// `None` (or an empty URL) yields an unconfigured client whose calls fail
    /// with [`GatewayError::NotConfigured`].
    #[must_use]
    pub fn new(base_url: Option<String>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_owned())
                .filter(|url| !url.is_empty()),
        }
    }

    /// Whether a renderer base URL is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Endpoint for `mode`.
    ///
    /// The base URL is checked before the mode suffix is appended, so every
    /// mode reports a missing configuration the same way.
    pub fn endpoint(&self, mode: ConversionMode) -> Result<String, GatewayError> {
        let base = self.base_url.as_deref().ok_or(GatewayError::NotConfigured)?;
        Ok(format!("{base}{}", mode.path_suffix()))
    }

    /// Post `payload` to the renderer and return the PDF.
    pub fn convert(
        &self,
        mode: ConversionMode,
        payload: &GatewayPayload,
    ) -> Result<PdfDocument, GatewayError> {
        let url = self.endpoint(mode)?;
        let body = serde_json::to_vec(payload)?;

        info!(%mode, %url, title = %payload.title, "Requesting PDF from renderer");

        let response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send(&body[..])?;

        let status = response.status();
        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        let content_type = header("content-type").filter(|value| !value.is_empty());
        let disposition = header("content-disposition");
        let mut body_reader = response.into_body();

        if !status.is_success() {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let bytes = body_reader
            .with_config()
            .limit(MAX_PDF_BYTES)
            .read_to_vec()?;
        let filename = filename_from_disposition(disposition.as_deref());

        debug!(%mode, %filename, size = bytes.len(), "Received PDF from renderer");

        Ok(PdfDocument {
            filename,
            content_type,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::request::{ConversionRequest, Margin, PaperSize};

    const PDF_BYTES: &[u8] = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n1 0 obj\n<<>>\nendobj\n%%EOF\n";

    fn payload() -> GatewayPayload {
        GatewayPayload::for_document(
            ConversionRequest {
                title: "T".to_owned(),
                content: String::new(),
                css: String::new(),
                url: None,
                size: Some(PaperSize::A4),
                width: None,
                height: None,
                margin: Margin::default(),
            },
            "<p>hi</p>".to_owned(),
        )
    }

    async fn convert(
        client: GatewayClient,
        mode: ConversionMode,
    ) -> Result<PdfDocument, GatewayError> {
        tokio::task::spawn_blocking(move || client.convert(mode, &payload()))
            .await
            .unwrap()
    }

    fn client_for(server: &MockServer) -> GatewayClient {
        GatewayClient::new(Some(server.uri()), Duration::from_secs(5))
    }

    #[test]
    fn test_endpoint_suffixes() {
        let client = GatewayClient::new(
            Some("http://renderer:3000/".to_owned()),
            Duration::from_secs(1),
        );
        assert_eq!(
            client.endpoint(ConversionMode::Html).unwrap(),
            "http://renderer:3000"
        );
        assert_eq!(
            client.endpoint(ConversionMode::Markdown).unwrap(),
            "http://renderer:3000/pdf"
        );
        assert_eq!(
            client.endpoint(ConversionMode::Url).unwrap(),
            "http://renderer:3000/url-to-pdf"
        );
    }

    #[test]
    fn test_unconfigured_fails_for_every_mode() {
        for base_url in [None, Some(String::new())] {
            let client = GatewayClient::new(base_url, Duration::from_secs(1));
            assert!(!client.is_configured());
            for mode in [
                ConversionMode::Html,
                ConversionMode::Markdown,
                ConversionMode::Url,
            ] {
                assert!(matches!(
                    client.convert(mode, &payload()),
                    Err(GatewayError::NotConfigured)
                ));
            }
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_successful_conversion() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pdf"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "title": "T",
                "html": "<p>hi</p>",
                "size": "A4",
                "width": null,
                "height": null,
                "margin": {"top": 0, "bottom": 0, "left": 0, "right": 0}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-disposition", "attachment; filename=\"x.pdf\"")
                    .set_body_raw(PDF_BYTES, "application/pdf"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let pdf = convert(client_for(&server), ConversionMode::Markdown)
            .await
            .unwrap();

        assert_eq!(pdf.bytes, PDF_BYTES);
        assert_eq!(pdf.filename, "x.pdf");
        assert_eq!(pdf.content_type(), "application/pdf");
        assert_eq!(pdf.inline_disposition(), "inline; filename=\"x.pdf\"");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_missing_disposition_uses_default_filename() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/url-to-pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(PDF_BYTES))
            .mount(&server)
            .await;

        let pdf = convert(client_for(&server), ConversionMode::Url)
            .await
            .unwrap();

        assert_eq!(pdf.filename, "documento.pdf");
        assert_eq!(pdf.content_type(), "application/pdf");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_upstream_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .expect(1)
            .mount(&server)
            .await;

        let err = convert(client_for(&server), ConversionMode::Html)
            .await
            .unwrap_err();

        match err {
            GatewayError::UpstreamStatus { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "busy");
            }
            other => panic!("expected upstream status error, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(PDF_BYTES)
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;
        let client = GatewayClient::new(Some(server.uri()), Duration::from_millis(200));

        let err = convert(client, ConversionMode::Html).await.unwrap_err();

        assert!(matches!(err, GatewayError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_connection_refused() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = GatewayClient::new(
            Some(format!("http://127.0.0.1:{port}")),
            Duration::from_secs(2),
        );

        let err = convert(client, ConversionMode::Html).await.unwrap_err();

        assert!(matches!(err, GatewayError::Connection(_)), "got {err:?}");
    }
}
