//! In-memory implementation of the database traits.
//!
//! Mirrors the document-store semantics the service relies on: insertion
//! order as natural order, `id` uniqueness, and separate matched/modified
//! counts on update. Used by tests and by `IDEAS_STORE=memory`.

mod connection;
mod idea;

#[cfg(test)]
mod idea_test;

pub use connection::MemoryDatabase;
pub use idea::MemoryIdeaRepository;
