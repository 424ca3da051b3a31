//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! document stores to be swapped without changing business logic.
//! Every method returns a `Send` future so handlers generic over
//! `D: Database` stay usable from axum and rmcp.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Idea, IdeaChanges, UpdateOutcome},
};

/// Repository for Idea operations, keyed by the application `id` field.
pub trait IdeaRepository: Send + Sync {
    /// Fetch up to `limit` ideas in the store's natural order.
    fn list(&self, limit: usize) -> impl Future<Output = DbResult<Vec<Idea>>> + Send;

    /// Find an idea by ID, `None` when absent.
    fn find(&self, id: &str) -> impl Future<Output = DbResult<Option<Idea>>> + Send;

    /// Insert a new idea.
    fn insert(&self, idea: &Idea) -> impl Future<Output = DbResult<()>> + Send;

    /// Apply `changes` to the idea with the given ID.
    fn update(
        &self,
        id: &str,
        changes: &IdeaChanges,
    ) -> impl Future<Output = DbResult<UpdateOutcome>> + Send;

    /// Delete the idea with the given ID, returning the number of records removed.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<u64>> + Send;
}

/// Combined database interface.
///
/// Uses a generic associated type so repositories borrow the database
/// without dynamic dispatch.
pub trait Database: Send + Sync {
    type Ideas<'a>: IdeaRepository
    where
        Self: 'a;

    /// Prepare the store (indexes and the like). Safe to call repeatedly.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Check connectivity.
    fn ping(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Release client resources. Called once at process shutdown.
    fn shutdown(&self) -> impl Future<Output = ()> + Send;

    /// Get the idea repository.
    fn ideas(&self) -> Self::Ideas<'_>;
}
