//! MCP tool parameters and shared helpers.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
    schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::service::IdeaError;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetIdeaParams {
    #[schemars(description = "Idea ID")]
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateIdeaParams {
    #[schemars(description = "Short title of the idea (required, non-empty)")]
    pub title: String,
    #[schemars(description = "Longer description. Defaults to 'alta' when omitted or empty.")]
    pub description: Option<String>,
    #[schemars(description = "Free-form status, e.g. 'pending', 'in_progress', 'done'")]
    pub status: String,
    #[schemars(description = "Free-form priority, e.g. 'low', 'high'. Optional.")]
    pub priority: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateIdeaParams {
    #[schemars(description = "Idea ID to update")]
    pub id: String,
    #[schemars(description = "New title (required, non-empty)")]
    pub title: String,
    #[schemars(description = "New description; omit to clear it")]
    pub description: Option<String>,
    #[schemars(description = "New status")]
    pub status: String,
    #[schemars(description = "New priority; omit to clear it")]
    pub priority: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ChangeIdeaStatusParams {
    #[schemars(description = "Idea ID to update")]
    pub id: String,
    #[schemars(description = "New status. No other field is touched.")]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteIdeaParams {
    #[schemars(description = "Idea ID to delete")]
    pub id: String,
}

// =============================================================================
// Helpers
// =============================================================================

/// Map service errors onto MCP error codes.
pub(crate) fn map_idea_error(e: IdeaError) -> McpError {
    match e {
        IdeaError::NotFound { id } => {
            McpError::resource_not_found("idea_not_found", Some(json!({ "id": id })))
        }
        IdeaError::Validation { message } => McpError::invalid_params(message, None),
        IdeaError::Internal { message } => McpError::internal_error(message, None),
    }
}

/// Successful tool result carrying `value` as pretty-printed JSON text.
pub(crate) fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
