//! Public pages: the deputies listing and shared rendering helpers.

pub mod deputies;
pub mod filters;
pub mod templates;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;
use templates::{Chrome, ErrorTemplate};

/// Localized message for the upstream-failure error panel.
pub const UPSTREAM_ERROR_MESSAGE: &str =
    "Impossible de charger les données parlementaires. Réessayez dans un instant.";

/// Layout chrome for the current build.
#[must_use]
pub fn chrome(state: &AppState) -> Chrome {
    Chrome {
        version: state.build_info.version.clone(),
    }
}

/// Render a template into an HTML response.
///
/// A template that fails to render is a bug, not an operational error; the
/// failure text is surfaced in the body the way the rest of the UI would be.
pub fn render<T: Template>(template: &T) -> Html<String> {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {e}")),
    )
}

/// Error panel response for a failed upstream fetch.
///
/// Every upstream failure collapses into this one panel; the cause is only
/// distinguished in the logs.
pub fn upstream_error(state: &AppState) -> Response {
    let template = ErrorTemplate {
        chrome: chrome(state),
        message: UPSTREAM_ERROR_MESSAGE.to_string(),
    };
    (StatusCode::BAD_GATEWAY, render(&template)).into_response()
}
