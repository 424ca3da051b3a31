//! HTTP API: router, handlers, and server lifecycle.

mod error;
mod extract;
pub mod handlers;
pub mod routes;
mod state;

#[cfg(test)]
mod routes_test;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{ApiError, ErrorResponse};
pub use extract::ValidJson;
pub use state::AppState;

use crate::auth::{AccessPolicy, BearerToken, MCP_PREFIX, Requirement};
use crate::config::Config;
use crate::db::Database;

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ideas=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Access policy for the configured MCP bearer token.
pub fn access_policy(config: &Config) -> AccessPolicy {
    AccessPolicy::new().protect(
        MCP_PREFIX,
        Requirement::BearerToken(BearerToken::new(config.bearer_token_mcp.clone())),
    )
}

/// Resolve once Ctrl-C or SIGTERM arrives, then cancel `token`.
async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
    token.cancel();
}

/// Run the API server until a shutdown signal, then release the database.
pub async fn run<D: Database + 'static>(config: &Config, db: D) -> Result<(), ApiError> {
    let db = Arc::new(db);
    let shutdown = CancellationToken::new();

    let state = AppState::new(Arc::clone(&db), config.environment.clone());
    let app = routes::create_router(state, access_policy(config), shutdown.child_token())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.host, config.port_or_default());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        environment = config.environment.as_deref().unwrap_or("unset"),
        "API server listening on http://{}", addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    db.shutdown().await;
    info!("API server stopped");
    Ok(())
}
