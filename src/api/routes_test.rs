//! Tests for the assembled router: docs, CORS and bearer gate scoping.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;
use utoipa::OpenApi;

use super::routes::{ApiDoc, create_router};
use super::{AppState, access_policy};
use crate::config::Config;
use crate::db::MemoryDatabase;

fn test_app() -> Router {
    let config = Config::default();
    let state = AppState::new(Arc::new(MemoryDatabase::new()), None);
    create_router(state, access_policy(&config), CancellationToken::new())
}

#[tokio::test]
async fn docs_are_served_without_credentials() {
    let response = test_app()
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn ideas_ignore_authorization_header() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/ideas/")
                .header(header::AUTHORIZATION, "Bearer definitely-wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn mcp_is_gated_by_configured_token() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header(header::AUTHORIZATION, "Bearer not-the-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/ideas/")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[test]
fn openapi_documents_idea_paths() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

    for expected in [
        "/",
        "/health",
        "/ideas/",
        "/ideas/{id}",
        "/ideas/change_status/{id}",
    ] {
        assert!(paths.contains(&expected), "missing path {expected}");
    }
}
