//! Domain models for the ideas store.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity name used in errors and logs.
pub const IDEA_ENTITY: &str = "Idea";

/// An idea record.
///
/// `id` is application-assigned and is the lookup key for every mutation;
/// stores keep their own native key (if any) out of this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Replacement values for the mutable fields of an idea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaFields {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: Option<String>,
}

/// The set of fields an update writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaChanges {
    /// Replace title, description, status and priority.
    Full(IdeaFields),
    /// Replace status only.
    Status(String),
}

impl IdeaChanges {
    /// Write the changes onto `idea`, returning whether any value differed.
    pub fn apply_to(&self, idea: &mut Idea) -> bool {
        match self {
            IdeaChanges::Full(fields) => {
                let changed = idea.title != fields.title
                    || idea.description != fields.description
                    || idea.status != fields.status
                    || idea.priority != fields.priority;
                idea.title = fields.title.clone();
                idea.description = fields.description.clone();
                idea.status = fields.status.clone();
                idea.priority = fields.priority.clone();
                changed
            }
            IdeaChanges::Status(status) => {
                let changed = idea.status != *status;
                idea.status = status.clone();
                changed
            }
        }
    }
}

/// Counts reported by a store after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    /// Records whose `id` matched.
    pub matched: u64,
    /// Records whose stored values actually changed.
    pub modified: u64,
}
