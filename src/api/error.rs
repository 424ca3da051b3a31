//! API error type and its HTTP mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::service::IdeaError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Idea 'f47ac10b-58cc-4372-a567-0e02b2c3d479' not found")]
    pub error: String,
}

/// Errors produced while serving a request.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Idea(#[from] IdeaError),

    #[error("Invalid request body: {message}")]
    #[diagnostic(code(ideas::api::invalid_body))]
    InvalidBody { status: StatusCode, message: String },

    #[error("Unauthorized")]
    #[diagnostic(code(ideas::api::unauthorized))]
    Unauthorized,

    #[error("Forbidden")]
    #[diagnostic(code(ideas::api::forbidden))]
    Forbidden,

    #[error("Server I/O error: {0}")]
    #[diagnostic(code(ideas::api::io))]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Idea(IdeaError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Idea(IdeaError::Validation { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Idea(IdeaError::Internal { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        if matches!(self, ApiError::Unauthorized) {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}
