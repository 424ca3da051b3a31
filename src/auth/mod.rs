//! Bearer-token gate for protected path prefixes.
//!
//! An [`AccessPolicy`] maps path prefixes to the credential they require.
//! Paths outside every protected prefix pass through unchecked.
//! [`require_bearer`] enforces the policy as axum middleware.

mod middleware;
mod policy;


pub use middleware::require_bearer;
pub use policy::{AccessPolicy, BearerToken, Decision, Denial, Requirement};

/// Path prefix of the MCP surface.
pub const MCP_PREFIX: &str = "/mcp";
