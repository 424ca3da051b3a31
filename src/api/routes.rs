//! API route configuration.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post, put};
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::ErrorResponse;
use super::handlers::{
    self, ApiMetadata, CreateIdeaRequest, HealthResponse, IdeaResponse, UpdateIdeaRequest,
};
use super::state::AppState;
use crate::auth::{AccessPolicy, MCP_PREFIX, require_bearer};
use crate::db::Database;
use crate::mcp::create_mcp_service;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ideas API",
        version = "0.1.0",
        description = "CRUD API for idea records, with an MCP tool surface under /mcp",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_ideas,
        handlers::get_idea,
        handlers::create_idea,
        handlers::update_idea,
        handlers::change_idea_status,
        handlers::delete_idea,
    ),
    components(
        schemas(
            ApiMetadata,
            HealthResponse,
            IdeaResponse,
            CreateIdeaRequest,
            UpdateIdeaRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "ideas", description = "Idea management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation and the MCP surface.
///
/// Every request, including those bound for `/mcp`, passes through the
/// bearer gate described by `policy`. `mcp_shutdown` ends live MCP sessions.
pub fn create_router<D: Database + 'static>(
    state: AppState<D>,
    policy: AccessPolicy,
    mcp_shutdown: CancellationToken,
) -> Router {
    let api = ApiDoc::openapi();
    let mcp_service = create_mcp_service(state.ideas().clone(), mcp_shutdown);

    // System routes
    let system_routes = routes!(D => {
        get "/" => handlers::root,
    })
    .route("/health", get(handlers::health));

    // Idea routes (generic over Database)
    let idea_routes = routes!(D => {
        get "/ideas/" => handlers::list_ideas,
        get "/ideas" => handlers::list_ideas,
        post "/ideas/" => handlers::create_idea,
        post "/ideas" => handlers::create_idea,
        get "/ideas/{id}" => handlers::get_idea,
        put "/ideas/{id}" => handlers::update_idea,
        delete "/ideas/{id}" => handlers::delete_idea,
        put "/ideas/change_status/{id}" => handlers::change_idea_status,
    });

    system_routes
        .merge(idea_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
        .nest_service(MCP_PREFIX, mcp_service)
        .layer(middleware::from_fn_with_state(
            Arc::new(policy),
            require_bearer,
        ))
        .layer(CorsLayer::permissive())
}
