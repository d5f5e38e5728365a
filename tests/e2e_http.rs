// tests/e2e_http.rs
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

mod support;

use support::{FailingProjectRepo, InMemoryProjectRepo, get, make_test_router, post_json, send_json};

fn seeded_router() -> axum::Router {
    make_test_router(Arc::new(InMemoryProjectRepo::with_projects(&[
        ("Casa Azul", "casa-azul"),
        ("Ponte Velha", "ponte-velha"),
    ])))
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = send_json(seeded_router(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let direct = folio_core::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn free_slug_is_reported_available_in_canonical_form() {
    let (status, body) = send_json(
        seeded_router(),
        get("/api/v1/projects/slug-availability?slug=Outro%20Projeto"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "slug": "outro-projeto", "available": true }));
}

#[tokio::test]
async fn taken_slug_is_available_only_to_its_owner() {
    let app = seeded_router();

    let (_, body) = send_json(
        app.clone(),
        get("/api/v1/projects/slug-availability?slug=casa-azul"),
    )
    .await;
    assert_eq!(body["available"], false);

    let (_, body) = send_json(
        app.clone(),
        get("/api/v1/projects/slug-availability?slug=casa-azul&exclude_id=2"),
    )
    .await;
    assert_eq!(body["available"], false);

    let (status, body) = send_json(
        app,
        get("/api/v1/projects/slug-availability?slug=casa-azul&exclude_id=1"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], true);
}

#[tokio::test]
async fn symbol_only_slug_is_rejected() {
    let (status, body) = send_json(
        seeded_router(),
        get("/api/v1/projects/slug-availability?slug=%40%40%40"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn preview_strips_accents() {
    let (status, body) = send_json(
        seeded_router(),
        get("/api/v1/projects/slug-preview?text=Projeto%20Incr%C3%ADvel%21"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "projeto-incrivel");
    assert_eq!(body["text"], "Projeto Incrível!");
}

#[tokio::test]
async fn resolve_generates_a_unique_slug_from_the_title() {
    let (status, body) = send_json(
        seeded_router(),
        post_json("/api/v1/projects/slug/resolve", json!({ "title": "Casa Azul" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "slug": "casa-azul-1", "generated": true }));
}

#[tokio::test]
async fn resolve_keeps_own_slug_when_editing() {
    let (status, body) = send_json(
        seeded_router(),
        post_json(
            "/api/v1/projects/slug/resolve",
            json!({ "title": "Casa Azul", "slug": "casa-azul", "project_id": 1 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "slug": "casa-azul", "generated": false }));
}

#[tokio::test]
async fn resolve_canonicalizes_custom_slug() {
    let (status, body) = send_json(
        seeded_router(),
        post_json(
            "/api/v1/projects/slug/resolve",
            json!({ "title": "Anything", "slug": "Meu Slug!" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "meu-slug");
    assert_eq!(body["generated"], false);
}

#[tokio::test]
async fn resolve_rejects_taken_custom_slug_with_conflict() {
    let (status, body) = send_json(
        seeded_router(),
        post_json(
            "/api/v1/projects/slug/resolve",
            json!({ "title": "New", "slug": "ponte-velha" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");
}

#[tokio::test]
async fn resolve_rejects_invalid_input() {
    let app = seeded_router();

    let (status, _) = send_json(
        app.clone(),
        post_json(
            "/api/v1/projects/slug/resolve",
            json!({ "title": "New", "slug": "!!!" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        app.clone(),
        post_json("/api/v1/projects/slug/resolve", json!({ "title": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send_json(
        app,
        post_json(
            "/api/v1/projects/slug/resolve",
            json!({ "title": "Ghost", "project_id": 99 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn persistence_failure_is_a_server_error() {
    let app = make_test_router(Arc::new(FailingProjectRepo));

    let (status, body) = send_json(
        app,
        get("/api/v1/projects/slug-availability?slug=anything"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");
}
