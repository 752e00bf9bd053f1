//! Admin route handlers: login, logout, dashboard, statistics, moderation.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::admin::nav::nav_items;
use crate::admin::templates::{
    AdminDeputiesTemplate, DashboardTemplate, LoginTemplate, ProfileBar, StatsTemplate,
};
use crate::admin::{PASSWORD_MISMATCH_MESSAGE, SESSION_COOKIE};
use crate::pages::filters::{percent, DeputyQuery, Pager};
use crate::pages::templates::{group_options, DeputyRow};
use crate::pages::{chrome, render, upstream_error};
use crate::state::AppState;

/// Build the admin router.
pub fn admin_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/admin/login", get(login_page).post(login_submit))
        .route("/admin/logout", post(logout))
        .route("/admin", get(dashboard))
        .route("/admin/stats", get(stats_page))
        .route("/admin/deputes", get(admin_deputies_page))
        .with_state(state)
}

/// Check the session cookie against the store.
async fn check_auth(state: &AppState, jar: &CookieJar) -> bool {
    match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.validate(cookie.value()).await,
        None => false,
    }
}

/// Login page handler.
async fn login_page(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    // Already logged in: straight to the dashboard
    if check_auth(&state, &jar).await {
        return Redirect::to("/admin").into_response();
    }

    let template = LoginTemplate {
        chrome: chrome(&state),
        error: None,
    };
    render(&template).into_response()
}

/// Login form data.
#[derive(Deserialize)]
struct LoginForm {
    password: String,
}

/// Login form submission handler.
async fn login_submit(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if !state.gate.verify(&form.password) {
        tracing::warn!("admin login rejected: password mismatch");
        let template = LoginTemplate {
            chrome: chrome(&state),
            error: Some(PASSWORD_MISMATCH_MESSAGE.to_string()),
        };
        return (StatusCode::UNAUTHORIZED, render(&template)).into_response();
    }

    let session_id = state.sessions.create().await;
    tracing::info!("admin session opened");

    let cookie = Cookie::build((SESSION_COOKIE, session_id))
        .path("/admin")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), Redirect::to("/admin")).into_response()
}

/// Logout handler: drops the session and clears the cookie.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.remove(cookie.value()).await;
    }

    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/admin");
    (jar.remove(removal), Redirect::to("/admin/login")).into_response()
}

/// Dashboard page with build metadata.
async fn dashboard(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if !check_auth(&state, &jar).await {
        return Redirect::to("/admin/login").into_response();
    }

    let template = DashboardTemplate {
        chrome: chrome(&state),
        nav: nav_items("/admin"),
        build: state.build_info.clone(),
    };
    render(&template).into_response()
}

/// Simulator statistics page.
async fn stats_page(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if !check_auth(&state, &jar).await {
        return Redirect::to("/admin/login").into_response();
    }

    let stats = match state.api.simulator_stats().await {
        Ok(stats) => stats,
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch simulator stats");
            return upstream_error(&state);
        }
    };

    let bars = stats
        .profiles
        .iter()
        .map(|p| ProfileBar {
            label: p.profile.clone(),
            count: p.count,
            pct: percent(p.count, stats.completed_sessions),
        })
        .collect();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let completion_pct = (stats.completion_rate * 100.0).round().max(0.0) as u32;

    let template = StatsTemplate {
        chrome: chrome(&state),
        nav: nav_items("/admin/stats"),
        total_sessions: stats.total_sessions,
        completed_sessions: stats.completed_sessions,
        completion_pct,
        bars,
    };
    render(&template).into_response()
}

/// Moderation view of the deputy list, with vote counts.
async fn admin_deputies_page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(raw): Query<DeputyQuery>,
) -> Response {
    if !check_auth(&state, &jar).await {
        return Redirect::to("/admin/login").into_response();
    }

    let query = raw.normalized();

    let (groups, page) = tokio::join!(
        state.api.list_groups(),
        state.api.list_deputies(
            query.search.as_deref(),
            query.group.as_deref(),
            query.page(),
            state.page_size,
        )
    );

    let groups = match groups {
        Ok(groups) => groups,
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch parliamentary groups");
            return upstream_error(&state);
        }
    };
    let page = match page {
        Ok(page) => page,
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch deputies page");
            return upstream_error(&state);
        }
    };

    let template = AdminDeputiesTemplate {
        chrome: chrome(&state),
        nav: nav_items("/admin/deputes"),
        search_value: query.search.clone().unwrap_or_default(),
        groups: group_options(&groups, &query),
        rows: page.data.iter().map(DeputyRow::from).collect(),
        total: page.total,
        pager: Pager::new("/admin/deputes", &query, page.total_pages),
    };
    render(&template).into_response()
}
