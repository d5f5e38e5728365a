// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use folio_core::application::ports::{time::Clock, util::SlugGenerator};
use folio_core::application::services::ApplicationServices;
use folio_core::domain::project::ProjectReadRepository;
use folio_core::infrastructure::util::DefaultSlugGenerator;
use folio_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_services(repo: Arc<dyn ProjectReadRepository>) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    Arc::new(ApplicationServices::new(repo, clock, slugger))
}

pub fn make_test_router(repo: Arc<dyn ProjectReadRepository>) -> axum::Router {
    let state = HttpState {
        services: build_services(repo),
        allowed_origins: vec!["http://localhost:3000".into()],
    };
    build_router(state)
}

/// Sends `req` and returns the status with the JSON body.
pub async fn send_json(app: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        panic!(
            "expected JSON body, got {}: {}",
            status,
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}
