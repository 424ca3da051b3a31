//! Business logic over the database traits.
//!
//! Handlers (HTTP and MCP) call into these services instead of talking to
//! repositories directly, so validation and update reconciliation live in
//! one place.

mod error;
mod ideas;


pub use error::{IdeaError, IdeaResult};
pub use ideas::{DEFAULT_DESCRIPTION, IdeaService, IdeaUpdate, MAX_LIST_RESULTS, NewIdea};
