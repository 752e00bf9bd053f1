//! Router assembly shared by `main` and the integration tests.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect},
    routing::get,
    Extension, Router,
};
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::config::SecurityHeadersConfig;
use crate::http::{build_security_headers, security_headers_middleware};
use crate::pages;
use crate::state::AppState;

// Health check handler
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn root_redirect() -> Redirect {
    Redirect::to("/deputes")
}

/// Build the full application router.
///
/// Both `main` and the integration tests go through this function, so tests
/// exercise the exact production wiring with an injected API client.
pub fn build_router(state: Arc<AppState>, security: &SecurityHeadersConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(root_redirect))
        .route("/deputes", get(pages::deputies::deputies_page))
        .route("/health", get(health_check))
        .with_state(Arc::clone(&state))
        .merge(admin::admin_router(state))
        .layer(TraceLayer::new_for_http());

    if security.enabled {
        app = app
            .layer(middleware::from_fn(security_headers_middleware))
            .layer(Extension(build_security_headers(security)));
    }

    app
}
