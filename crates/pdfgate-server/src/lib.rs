//! HTTP API for pdfgate.
//!
//! Serves the conversion routes:
//! - `GET /` liveness message
//! - `POST /markdown/html`, `POST /html/html` return the composed document
//! - `POST /markdown/pdf`, `POST /html/pdf`, `POST /url/pdf` forward to the
//!   external renderer and relay the PDF inline
//!
//! # Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use pdfgate_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 8000,
//!         gateway_url: Some("http://localhost:3000".to_owned()),
//!         gateway_timeout: Duration::from_secs(30),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► axum server (pdfgate-server)
//!                       │
//!                       ├─► /*/html ──► pdfgate-render (front matter, Markdown, page)
//!                       │
//!                       └─► /*/pdf  ──► pdfgate-render ──► pdfgate-gateway ──HTTP──► renderer
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use pdfgate_gateway::GatewayClient;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Renderer base URL (`None` makes every PDF route fail).
    pub gateway_url: Option<String>,
    /// Per-call renderer timeout.
    pub gateway_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8000,
            gateway_url: None,
            gateway_timeout: Duration::from_secs(30),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener cannot bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let gateway = GatewayClient::new(config.gateway_url.clone(), config.gateway_timeout);
    if !gateway.is_configured() {
        tracing::warn!(
            env = pdfgate_config::GATEWAY_URL_ENV,
            "Renderer URL not configured, PDF routes will fail"
        );
    }

    let state = Arc::new(AppState { gateway });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from loaded pdfgate config.
#[must_use]
pub fn server_config_from_config(config: &pdfgate_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        gateway_url: config.gateway.base_url.clone(),
        gateway_timeout: config.gateway.timeout(),
    }
}
