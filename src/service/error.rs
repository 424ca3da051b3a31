//! Errors surfaced by the idea service.

use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

/// Idea service errors.
#[derive(Error, Diagnostic, Debug)]
pub enum IdeaError {
    #[error("Idea '{id}' not found")]
    #[diagnostic(code(ideas::service::not_found))]
    NotFound { id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(ideas::service::validation))]
    Validation { message: String },

    #[error("Internal error: {message}")]
    #[diagnostic(code(ideas::service::internal))]
    Internal { message: String },
}

/// Result type for idea service operations.
pub type IdeaResult<T> = Result<T, IdeaError>;

impl From<DbError> for IdeaError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id, .. } => IdeaError::NotFound { id },
            other => IdeaError::Internal {
                message: other.to_string(),
            },
        }
    }
}
