//! Tests for the MCP surface mounted behind the bearer gate.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tokio_util::sync::CancellationToken;
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::auth::{AccessPolicy, BearerToken, MCP_PREFIX, Requirement};
use crate::db::MemoryDatabase;

const TOKEN: &str = "mcp-test-token";

fn app() -> Router {
    let state = AppState::new(Arc::new(MemoryDatabase::new()), None);
    let policy = AccessPolicy::new().protect(
        MCP_PREFIX,
        Requirement::BearerToken(BearerToken::new(TOKEN)),
    );
    routes::create_router(state, policy, CancellationToken::new())
}

fn initialize(host: &str, authorization: Option<&str>) -> Request<Body> {
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": { "name": "test-client", "version": "0.0.1" }
        }
    });

    let mut builder = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::HOST, host)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json, text/event-stream");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn mcp_without_token_is_unauthorized() {
    let response = app()
        .oneshot(initialize("localhost:8080", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn mcp_with_wrong_token_is_forbidden() {
    let response = app()
        .oneshot(initialize("localhost:8080", Some("Bearer wrong-token")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn mcp_with_correct_token_reaches_mcp_service() {
    let response = app()
        .oneshot(initialize(
            "localhost:8080",
            Some(&format!("Bearer {TOKEN}")),
        ))
        .await
        .unwrap();

    let status = response.status();
    assert_ne!(status, StatusCode::UNAUTHORIZED);
    assert_ne!(status, StatusCode::FORBIDDEN);
    assert!(status.is_success(), "initialize should succeed, got {status}");
}

#[tokio::test]
async fn mcp_with_correct_token_accepts_public_host() {
    for host in ["ideas.example.com", "149.130.186.128:8080"] {
        let response = app()
            .oneshot(initialize(host, Some(&format!("Bearer {TOKEN}"))))
            .await
            .unwrap();

        let status = response.status();
        assert!(
            status.is_success(),
            "initialize via {host} should succeed, got {status}"
        );
    }
}

#[tokio::test]
async fn mcp_wrong_token_on_public_host_is_forbidden_by_gate() {
    let response = app()
        .oneshot(initialize("ideas.example.com", Some("Bearer wrong-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Forbidden");
}

#[tokio::test]
async fn nested_mcp_paths_are_also_gated() {
    let request = Request::builder()
        .uri("/mcp/anything")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
