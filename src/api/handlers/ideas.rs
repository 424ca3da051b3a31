//! Idea management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::{ApiError, AppState, ErrorResponse, ValidJson};
use crate::db::{Database, Idea};
use crate::service::{IdeaUpdate, NewIdea};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IdeaResponse {
    #[schema(example = "f47ac10b-58cc-4372-a567-0e02b2c3d479")]
    pub id: String,
    #[schema(example = "Solar-powered kettle")]
    pub title: String,
    #[schema(example = "alta")]
    pub description: Option<String>,
    #[schema(example = "pending")]
    pub status: String,
    #[schema(example = "high")]
    pub priority: Option<String>,
    /// RFC 3339 creation timestamp
    #[schema(example = "2026-01-15T09:30:00.000Z")]
    pub created_at: String,
}

impl From<Idea> for IdeaResponse {
    fn from(i: Idea) -> Self {
        Self {
            id: i.id,
            title: i.title,
            description: i.description,
            status: i.status,
            priority: i.priority,
            created_at: i.created_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateIdeaRequest {
    #[schema(example = "Solar-powered kettle")]
    pub title: String,
    /// Defaults to "alta" when absent or empty
    #[schema(example = "Boil water using only sunlight")]
    pub description: Option<String>,
    #[schema(example = "pending")]
    pub status: String,
    #[schema(example = "high")]
    pub priority: Option<String>,
}

impl From<CreateIdeaRequest> for NewIdea {
    fn from(req: CreateIdeaRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status,
            priority: req.priority,
        }
    }
}

/// Body for both full and status-only updates.
///
/// The status-only endpoint accepts the same shape but applies `status` alone.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateIdeaRequest {
    /// Ignored; the path ID is authoritative
    #[schema(example = "f47ac10b-58cc-4372-a567-0e02b2c3d479")]
    #[serde(default)]
    pub id: Option<String>,
    #[schema(example = "Solar-powered kettle v2")]
    pub title: String,
    #[schema(example = "Now with a thermos")]
    pub description: Option<String>,
    #[schema(example = "in_progress")]
    pub status: String,
    #[schema(example = "medium")]
    pub priority: Option<String>,
}

impl From<UpdateIdeaRequest> for IdeaUpdate {
    fn from(req: UpdateIdeaRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status,
            priority: req.priority,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/ideas/",
    tag = "ideas",
    responses(
        (status = 200, description = "Up to 100 ideas", body = Vec<IdeaResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_ideas<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<IdeaResponse>>, ApiError> {
    let ideas = state.ideas().list().await?;
    Ok(Json(ideas.into_iter().map(IdeaResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/ideas/{id}",
    tag = "ideas",
    params(("id" = String, Path, description = "Idea ID")),
    responses(
        (status = 200, description = "Idea found", body = IdeaResponse),
        (status = 404, description = "Idea not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_idea<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<IdeaResponse>, ApiError> {
    let idea = state.ideas().get(&id).await?;
    Ok(Json(IdeaResponse::from(idea)))
}

#[utoipa::path(
    post,
    path = "/ideas/",
    tag = "ideas",
    request_body = CreateIdeaRequest,
    responses(
        (status = 201, description = "Idea created", body = IdeaResponse),
        (status = 422, description = "Invalid idea payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_idea<D: Database>(
    State(state): State<AppState<D>>,
    ValidJson(req): ValidJson<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<IdeaResponse>), ApiError> {
    let created = state.ideas().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(IdeaResponse::from(created))))
}

#[utoipa::path(
    put,
    path = "/ideas/{id}",
    tag = "ideas",
    params(("id" = String, Path, description = "Idea ID")),
    request_body = UpdateIdeaRequest,
    responses(
        (status = 200, description = "Idea updated", body = IdeaResponse),
        (status = 404, description = "Idea not found", body = ErrorResponse),
        (status = 422, description = "Invalid idea payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_idea<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateIdeaRequest>,
) -> Result<Json<IdeaResponse>, ApiError> {
    let updated = state.ideas().update(&id, req.into()).await?;
    Ok(Json(IdeaResponse::from(updated)))
}

#[utoipa::path(
    put,
    path = "/ideas/change_status/{id}",
    tag = "ideas",
    params(("id" = String, Path, description = "Idea ID")),
    request_body = UpdateIdeaRequest,
    responses(
        (status = 200, description = "Status changed; other fields untouched", body = IdeaResponse),
        (status = 404, description = "Idea not found", body = ErrorResponse),
        (status = 422, description = "Invalid idea payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn change_idea_status<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    ValidJson(req): ValidJson<UpdateIdeaRequest>,
) -> Result<Json<IdeaResponse>, ApiError> {
    let updated = state.ideas().change_status(&id, req.status).await?;
    Ok(Json(IdeaResponse::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/ideas/{id}",
    tag = "ideas",
    params(("id" = String, Path, description = "Idea ID")),
    responses(
        (status = 204, description = "Idea deleted"),
        (status = 404, description = "Idea not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_idea<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.ideas().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
