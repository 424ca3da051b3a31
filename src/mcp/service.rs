//! MCP Streamable HTTP service creation
//!
//! This module provides functions to create the MCP service
//! that can be integrated with an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::server::McpServer;
use crate::db::Database;
use crate::service::IdeaService;

/// Create MCP Streamable HTTP service
///
/// The returned service implements `tower::Service` and is meant to be
/// nested into an Axum router:
///
/// ```no_run
/// use std::sync::Arc;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// use ideas::db::MemoryDatabase;
/// use ideas::mcp::create_mcp_service;
/// use ideas::service::IdeaService;
///
/// let ideas = IdeaService::new(Arc::new(MemoryDatabase::new()));
/// let app: Router = Router::new()
///     .nest_service("/mcp", create_mcp_service(ideas, CancellationToken::new()));
/// ```
pub fn create_mcp_service<D: Database + 'static>(
    ideas: IdeaService<D>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<D>, LocalSessionManager> {
    // Service factory: creates new McpServer instance per session
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer<D>, std::io::Error> {
        debug!("Creating MCP handler for new session");
        Ok(McpServer::new(ideas.clone()))
    };

    // Access to /mcp is decided by the bearer gate, not by the Host header
    let mut config = StreamableHttpServerConfig::default().disable_allowed_hosts();
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        Arc::new(LocalSessionManager::default()),
        config,
    )
}
