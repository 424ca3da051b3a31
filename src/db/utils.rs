//! Database utility functions.

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// Generate a UUID v4 identifier for a new entity.
pub fn generate_entity_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC time at millisecond precision.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
