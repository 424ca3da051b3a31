//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different document stores (MongoDB, in-memory, etc.)
//! to be swapped without changing business logic.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Idea) and update descriptions
//! - `repository`: Trait definitions for data access
//! - `mongo`: MongoDB-backed implementation
//! - `memory`: In-process implementation for tests and local runs

mod error;
pub mod memory;
mod models;
pub mod mongo;
mod repository;
#[cfg(test)]
pub(crate) mod testing;
mod utils;


pub use error::{DbError, DbResult};
pub use memory::MemoryDatabase;
pub use models::*;
pub use mongo::MongoDatabase;
pub use repository::*;
pub use utils::{current_timestamp, generate_entity_id};
