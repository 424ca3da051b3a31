//! Model Context Protocol (MCP) server implementation
//!
//! This module provides an MCP server using the Streamable HTTP transport,
//! mounted under `/mcp` behind the bearer gate. The server exposes the idea
//! lifecycle (list, get, create, update, change status, delete) as tools.
//!
//! - **server**: `McpServer`, the tool handler generic over `D: Database`
//! - **tools**: tool parameter types and error mapping
//! - **service**: Streamable HTTP service construction

pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod service_test;

pub use server::McpServer;
pub use service::create_mcp_service;
