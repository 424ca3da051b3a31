//! MongoDB implementation of the database traits.
//!
//! Ideas live in a single `ideas` collection. The application `id` field is
//! the natural key (unique index); Mongo's own `_id` is never exposed.

mod connection;
mod idea;


pub use connection::MongoDatabase;
pub use idea::MongoIdeaRepository;

/// Name of the collection holding idea documents.
pub const IDEAS_COLLECTION: &str = "ideas";
