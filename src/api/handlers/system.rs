//! System health and metadata handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::Database;

/// API metadata returned from the root endpoint
#[derive(Serialize, ToSchema)]
pub struct ApiMetadata {
    #[schema(example = "Ideas API")]
    pub name: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    pub description: String,
    /// Deployment environment label (from `ENV`)
    #[schema(example = "production")]
    pub environment: Option<String>,
    /// Path of the interactive API documentation
    #[schema(example = "/docs")]
    pub docs: String,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "API metadata", body = ApiMetadata)
    )
)]
#[instrument(skip(state))]
pub async fn root<D: Database>(State(state): State<AppState<D>>) -> Json<ApiMetadata> {
    Json(ApiMetadata {
        name: "Ideas API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Manage ideas: create, list, update, change status and delete".to_string(),
        environment: state.environment().map(str::to_string),
        docs: "/docs".to_string(),
    })
}

/// Health check endpoint
///
/// Returns the current health status of the API
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
