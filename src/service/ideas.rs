//! Idea lifecycle: create, read, full update, status update, delete.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::{IdeaError, IdeaResult};
use crate::db::{
    Database, Idea, IdeaChanges, IdeaFields, IdeaRepository, current_timestamp,
    generate_entity_id,
};

/// Upper bound on the number of ideas returned by a listing.
pub const MAX_LIST_RESULTS: usize = 100;

/// Stored when a new idea arrives without a description.
///
/// Reads like a priority rather than a description.
pub const DEFAULT_DESCRIPTION: &str = "alta";

/// Input for creating an idea. The service assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewIdea {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: Option<String>,
}

/// Input for a full update.
#[derive(Debug, Clone)]
pub struct IdeaUpdate {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: Option<String>,
}

fn validate_title(title: &str) -> IdeaResult<()> {
    if title.trim().is_empty() {
        return Err(IdeaError::Validation {
            message: "title: must not be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Service owning the CRUD contract for ideas.
pub struct IdeaService<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for IdeaService<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> IdeaService<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    /// List up to [`MAX_LIST_RESULTS`] ideas in store order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> IdeaResult<Vec<Idea>> {
        Ok(self.db.ideas().list(MAX_LIST_RESULTS).await?)
    }

    /// Get a single idea by ID.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> IdeaResult<Idea> {
        self.db
            .ideas()
            .find(id)
            .await?
            .ok_or_else(|| IdeaError::NotFound { id: id.to_string() })
    }

    /// Create an idea with a fresh ID and creation timestamp.
    #[instrument(skip(self, new), fields(title = %new.title))]
    pub async fn create(&self, new: NewIdea) -> IdeaResult<Idea> {
        validate_title(&new.title)?;

        let description = new
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        let idea = Idea {
            id: generate_entity_id(),
            title: new.title,
            description: Some(description),
            status: new.status,
            priority: new.priority,
            created_at: current_timestamp(),
        };

        self.db
            .ideas()
            .insert(&idea)
            .await
            .map_err(|e| IdeaError::Internal {
                message: format!("Failed to create idea: {}", e),
            })?;

        info!(id = %idea.id, "Idea created");
        Ok(idea)
    }

    /// Replace title, description, status and priority.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: &str, update: IdeaUpdate) -> IdeaResult<Idea> {
        validate_title(&update.title)?;

        let changes = IdeaChanges::Full(IdeaFields {
            title: update.title,
            description: update.description,
            status: update.status,
            priority: update.priority,
        });
        self.apply(id, changes).await
    }

    /// Replace the status only.
    #[instrument(skip(self))]
    pub async fn change_status(&self, id: &str, status: String) -> IdeaResult<Idea> {
        self.apply(id, IdeaChanges::Status(status)).await
    }

    /// Delete an idea.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> IdeaResult<()> {
        let deleted = self.db.ideas().delete(id).await?;
        if deleted == 0 {
            return Err(IdeaError::NotFound { id: id.to_string() });
        }
        info!(id, "Idea deleted");
        Ok(())
    }

    /// Run an update and return the record as stored afterwards.
    ///
    /// Zero modified records means either an unknown ID or a write of
    /// identical values; the re-read tells them apart.
    async fn apply(&self, id: &str, changes: IdeaChanges) -> IdeaResult<Idea> {
        let ideas = self.db.ideas();
        let outcome = ideas.update(id, &changes).await?;

        if outcome.modified == 0 {
            return match ideas.find(id).await? {
                Some(current) => {
                    debug!(id, "Update left idea unchanged");
                    Ok(current)
                }
                None => Err(IdeaError::NotFound { id: id.to_string() }),
            };
        }

        debug!(id, matched = outcome.matched, "Idea updated");
        ideas
            .find(id)
            .await?
            .ok_or_else(|| IdeaError::NotFound { id: id.to_string() })
    }
}
