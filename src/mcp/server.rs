//! MCP server implementation
//!
//! The server delegates every tool to [`IdeaService`], so tools and HTTP
//! handlers share validation and update semantics.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use super::tools::{
    ChangeIdeaStatusParams, CreateIdeaParams, DeleteIdeaParams, GetIdeaParams, UpdateIdeaParams,
    json_result, map_idea_error,
};
use crate::db::Database;
use crate::service::{IdeaService, IdeaUpdate, NewIdea};

/// MCP tool handler for ideas.
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic dispatch).
pub struct McpServer<D: Database> {
    ideas: IdeaService<D>,
    tool_router: ToolRouter<Self>,
}

impl<D: Database> Clone for McpServer<D> {
    fn clone(&self) -> Self {
        Self {
            ideas: self.ideas.clone(),
            tool_router: self.tool_router.clone(),
        }
    }
}

#[tool_router]
impl<D: Database + 'static> McpServer<D> {
    /// Create a new MCP server over the given idea service.
    pub fn new(ideas: IdeaService<D>) -> Self {
        Self {
            ideas,
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool router for this handler
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    #[tool(description = "List ideas (at most 100, store order). No filters or pagination.")]
    pub async fn list_ideas(&self) -> Result<CallToolResult, McpError> {
        let ideas = self.ideas.list().await.map_err(map_idea_error)?;
        json_result(&ideas)
    }

    #[tool(description = "Get an idea by ID with all fields.")]
    pub async fn get_idea(
        &self,
        params: Parameters<GetIdeaParams>,
    ) -> Result<CallToolResult, McpError> {
        let idea = self.ideas.get(&params.0.id).await.map_err(map_idea_error)?;
        json_result(&idea)
    }

    #[tool(
        description = "Create a new idea. The server assigns id and created_at. Description defaults to 'alta' when omitted."
    )]
    pub async fn create_idea(
        &self,
        params: Parameters<CreateIdeaParams>,
    ) -> Result<CallToolResult, McpError> {
        let Parameters(params) = params;
        let created = self
            .ideas
            .create(NewIdea {
                title: params.title,
                description: params.description,
                status: params.status,
                priority: params.priority,
            })
            .await
            .map_err(map_idea_error)?;
        json_result(&created)
    }

    #[tool(
        description = "Replace title, description, status and priority of an idea. id and created_at never change."
    )]
    pub async fn update_idea(
        &self,
        params: Parameters<UpdateIdeaParams>,
    ) -> Result<CallToolResult, McpError> {
        let Parameters(params) = params;
        let updated = self
            .ideas
            .update(
                &params.id,
                IdeaUpdate {
                    title: params.title,
                    description: params.description,
                    status: params.status,
                    priority: params.priority,
                },
            )
            .await
            .map_err(map_idea_error)?;
        json_result(&updated)
    }

    #[tool(description = "Change only the status of an idea.")]
    pub async fn change_idea_status(
        &self,
        params: Parameters<ChangeIdeaStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        let Parameters(params) = params;
        let updated = self
            .ideas
            .change_status(&params.id, params.status)
            .await
            .map_err(map_idea_error)?;
        json_result(&updated)
    }

    #[tool(description = "Delete an idea permanently.")]
    pub async fn delete_idea(
        &self,
        params: Parameters<DeleteIdeaParams>,
    ) -> Result<CallToolResult, McpError> {
        self.ideas
            .delete(&params.0.id)
            .await
            .map_err(map_idea_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Idea {} deleted successfully",
            params.0.id
        ))]))
    }
}

#[tool_handler]
impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "Ideas MCP Server - list, create, update, change the status of, and delete ideas"
                .to_string(),
        );
        info
    }
}
