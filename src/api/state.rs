//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;
use crate::service::IdeaService;

/// Shared application state.
///
/// Generic over `D: Database` so the same router runs against MongoDB in
/// production and the in-memory store in tests. The database handle is
/// injected via the constructor, never created here.
pub struct AppState<D: Database> {
    ideas: IdeaService<D>,
    environment: Option<String>,
}

// Manual Clone impl - only the Arc inside IdeaService is cloned, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            ideas: self.ideas.clone(),
            environment: self.environment.clone(),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState around a shared database handle.
    ///
    /// `environment` is the deployment label reported by the root endpoint.
    pub fn new(db: Arc<D>, environment: Option<String>) -> Self {
        Self {
            ideas: IdeaService::new(db),
            environment,
        }
    }

    /// Get the idea service.
    pub fn ideas(&self) -> &IdeaService<D> {
        &self.ideas
    }

    /// Get the deployment environment label, if configured.
    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }
}
