#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pixellingual_api::config::ServerConfig;
use pixellingual_api::router::build_app_router;
use pixellingual_api::state::AppState;
use pixellingual_core::catalog::Catalog;
use pixellingual_core::types::CalendarDate;

/// Five packs covering every studio/tag/section case the API tests need.
pub const FIXTURE_PACKS: &str = include_str!("../fixtures/packs.json");

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        catalog_path: None,
    }
}

/// Fixed "today" for status badges: 2024-03-22.
///
/// Pack 3 (created 2024-03-20) is new, pack 1 (updated 2024-03-18) is updated.
pub fn fixed_today() -> CalendarDate {
    NaiveDate::from_ymd_opt(2024, 3, 22).expect("valid date")
}

/// Build the full application router over the fixture catalog.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app() -> Router {
    let config = test_config();
    let catalog = Catalog::from_json(FIXTURE_PACKS).expect("fixture packs parse");

    let mut state = AppState::new(catalog, config.clone());
    state.clock = fixed_today;

    build_app_router(state, &config)
}

/// Send a GET request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Pack ids from a JSON array of cards.
pub fn ids(cards: &serde_json::Value) -> Vec<i64> {
    cards
        .as_array()
        .expect("expected an array of packs")
        .iter()
        .map(|c| c["id"].as_i64().expect("pack id"))
        .collect()
}
