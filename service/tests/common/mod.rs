//! Common test utilities for integration tests.
//!
//! Builds the application through the same `build_router` as `main`, with
//! the upstream API replaced by `MockAssemblyClient`, so tests exercise the
//! exact production wiring.

#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use hemicycle_web::app::build_router;
use hemicycle_web::assembly::mock::MockAssemblyClient;
use hemicycle_web::assembly::{DeputiesPage, Deputy, GroupRef, GroupSummary, ProfileCount, SimulatorStats};
use hemicycle_web::build_info::BuildInfo;
use hemicycle_web::config::Config;
use hemicycle_web::state::AppState;
use tower::ServiceExt;

/// Password configured for the test admin gate.
pub const TEST_PASSWORD: &str = "tr3s-secret";

pub struct TestApp {
    pub router: Router,
    pub api: Arc<MockAssemblyClient>,
}

/// Build a test app mirroring main.rs wiring, with a mock API client.
pub fn build_test_app() -> TestApp {
    let mut config = Config::default();
    config.api.base_url = "http://upstream.invalid".into();
    config.admin.password = TEST_PASSWORD.into();

    let api = Arc::new(MockAssemblyClient::new());
    let api_dyn: Arc<dyn hemicycle_web::assembly::AssemblyApiClient> = api.clone();
    let state = Arc::new(AppState::new(
        &config,
        api_dyn,
        BuildInfo::from_lookup(|_| None),
    ));
    TestApp {
        router: build_router(state, &config.security_headers),
        api,
    }
}

/// Send a GET request, optionally with a session cookie.
pub async fn get(app: &TestApp, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.router
        .clone()
        .oneshot(builder.body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

/// Send an urlencoded POST, optionally with a session cookie.
pub async fn post_form(
    app: &TestApp,
    uri: &str,
    body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.router
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).expect("request"))
        .await
        .expect("response")
}

/// Read a response body as UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Log in with the test password and return the session cookie pair.
pub async fn login(app: &TestApp) -> String {
    let response = post_form(
        app,
        "/admin/login",
        &format!("password={TEST_PASSWORD}"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "login should succeed");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .expect("cookie header")
        .to_string();
    // "name=value; Path=/admin; ..." -> "name=value"
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

// Fixtures

pub fn sample_deputy(slug: &str, first: &str, last: &str) -> Deputy {
    Deputy {
        id: format!("PA-{slug}"),
        slug: slug.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        photo_url: None,
        group: Some(GroupRef {
            slug: "gdr".into(),
            name: "Gauche démocrate et républicaine".into(),
            color: "#dd0000".into(),
        }),
        district: None,
        vote_count: Some(12),
    }
}

pub fn sample_page(deputies: Vec<Deputy>, total: u32, page: u32, total_pages: u32) -> DeputiesPage {
    DeputiesPage {
        data: deputies,
        total,
        page,
        limit: 20,
        total_pages,
    }
}

pub fn sample_groups() -> Vec<GroupSummary> {
    vec![
        GroupSummary {
            slug: "gdr".into(),
            name: "Gauche démocrate et républicaine".into(),
            member_count: 17,
        },
        GroupSummary {
            slug: "lfi".into(),
            name: "La France insoumise".into(),
            member_count: 71,
        },
    ]
}

pub fn sample_stats() -> SimulatorStats {
    SimulatorStats {
        total_sessions: 120,
        completed_sessions: 90,
        completion_rate: 0.75,
        profiles: vec![
            ProfileCount {
                profile: "Social-démocrate".into(),
                count: 30,
            },
            ProfileCount {
                profile: "Libéral".into(),
                count: 60,
            },
        ],
    }
}
