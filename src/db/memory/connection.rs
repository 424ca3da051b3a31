//! In-memory database handle.

use std::sync::{Arc, RwLock};

use super::idea::MemoryIdeaRepository;
use crate::db::{Database, DbResult, Idea};

/// In-memory database implementation.
///
/// Cloning shares the same underlying collection.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    ideas: Arc<RwLock<Vec<Idea>>>,
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Database for MemoryDatabase {
    type Ideas<'a> = MemoryIdeaRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        Ok(())
    }

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }

    async fn shutdown(&self) {}

    fn ideas(&self) -> Self::Ideas<'_> {
        MemoryIdeaRepository { ideas: &self.ideas }
    }
}
