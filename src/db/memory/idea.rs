//! In-memory IdeaRepository implementation.

use std::sync::{PoisonError, RwLock};

use crate::db::{
    DbError, DbResult, IDEA_ENTITY, Idea, IdeaChanges, IdeaRepository, UpdateOutcome,
};

/// Vec-backed idea repository.
pub struct MemoryIdeaRepository<'a> {
    pub(crate) ideas: &'a RwLock<Vec<Idea>>,
}

fn poisoned<T>(e: PoisonError<T>) -> DbError {
    DbError::Database {
        message: format!("Failed to acquire store lock: {}", e),
    }
}

impl<'a> IdeaRepository for MemoryIdeaRepository<'a> {
    async fn list(&self, limit: usize) -> DbResult<Vec<Idea>> {
        let ideas = self.ideas.read().map_err(poisoned)?;
        Ok(ideas.iter().take(limit).cloned().collect())
    }

    async fn find(&self, id: &str) -> DbResult<Option<Idea>> {
        let ideas = self.ideas.read().map_err(poisoned)?;
        Ok(ideas.iter().find(|idea| idea.id == id).cloned())
    }

    async fn insert(&self, idea: &Idea) -> DbResult<()> {
        let mut ideas = self.ideas.write().map_err(poisoned)?;
        if ideas.iter().any(|existing| existing.id == idea.id) {
            return Err(DbError::AlreadyExists {
                entity_type: IDEA_ENTITY.to_string(),
                id: idea.id.clone(),
            });
        }
        ideas.push(idea.clone());
        Ok(())
    }

    async fn update(&self, id: &str, changes: &IdeaChanges) -> DbResult<UpdateOutcome> {
        let mut ideas = self.ideas.write().map_err(poisoned)?;
        let Some(idea) = ideas.iter_mut().find(|idea| idea.id == id) else {
            return Ok(UpdateOutcome::default());
        };

        let modified = changes.apply_to(idea);
        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(modified),
        })
    }

    async fn delete(&self, id: &str) -> DbResult<u64> {
        let mut ideas = self.ideas.write().map_err(poisoned)?;
        let before = ideas.len();
        ideas.retain(|idea| idea.id != id);
        Ok((before - ideas.len()) as u64)
    }
}
