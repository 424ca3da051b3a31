//! Test doubles shared across module tests.

use crate::db::{Database, DbError, DbResult, Idea, IdeaChanges, IdeaRepository, UpdateOutcome};

/// Database whose every operation fails as if the server went away.
pub struct UnreachableDatabase;

pub struct UnreachableIdeas;

fn unreachable() -> DbError {
    DbError::Connection {
        message: "server selection timeout".to_string(),
    }
}

impl IdeaRepository for UnreachableIdeas {
    async fn list(&self, _limit: usize) -> DbResult<Vec<Idea>> {
        Err(unreachable())
    }

    async fn find(&self, _id: &str) -> DbResult<Option<Idea>> {
        Err(unreachable())
    }

    async fn insert(&self, _idea: &Idea) -> DbResult<()> {
        Err(unreachable())
    }

    async fn update(&self, _id: &str, _changes: &IdeaChanges) -> DbResult<UpdateOutcome> {
        Err(unreachable())
    }

    async fn delete(&self, _id: &str) -> DbResult<u64> {
        Err(unreachable())
    }
}

impl Database for UnreachableDatabase {
    type Ideas<'a> = UnreachableIdeas;

    async fn migrate(&self) -> DbResult<()> {
        Err(unreachable())
    }

    async fn ping(&self) -> DbResult<()> {
        Err(unreachable())
    }

    async fn shutdown(&self) {}

    fn ideas(&self) -> Self::Ideas<'_> {
        UnreachableIdeas
    }
}
