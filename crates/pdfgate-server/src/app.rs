//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use pdfgate_render::{HtmlConverter, MarkdownConverter};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::handlers::documents::{render_html, render_pdf};
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let markdown_routes = Router::new()
        .route("/html", post(render_html::<MarkdownConverter>))
        .route("/pdf", post(render_pdf::<MarkdownConverter>));

    let html_routes = Router::new()
        .route("/html", post(render_html::<HtmlConverter>))
        .route("/pdf", post(render_pdf::<HtmlConverter>));

    let url_routes = Router::new().route("/pdf", post(handlers::url::url_pdf));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/markdown", markdown_routes)
        .nest("/html", html_routes)
        .nest("/url", url_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer()),
        )
        .with_state(state)
}
