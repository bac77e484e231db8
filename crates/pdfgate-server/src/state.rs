//! Application state.
//!
//! Shared state for all request handlers.

use pdfgate_gateway::GatewayClient;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Client for the external PDF renderer.
    pub(crate) gateway: GatewayClient,
}
