//! MongoDB IdeaRepository implementation.

use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Document, doc, serde_helpers::chrono_datetime_as_bson_datetime},
    error::{ErrorKind, WriteFailure},
};
use serde::{Deserialize, Serialize};

use crate::db::{
    DbError, DbResult, IDEA_ENTITY, Idea, IdeaChanges, IdeaRepository, UpdateOutcome,
};

/// Server error code for a unique index violation.
const DUPLICATE_KEY: i32 = 11000;

/// Stored shape of an idea.
///
/// `created_at` is a BSON Date, not a string. Mongo's own `_id` is left to
/// the server and ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct IdeaDocument {
    id: String,
    title: String,
    description: Option<String>,
    status: String,
    priority: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

impl From<&Idea> for IdeaDocument {
    fn from(idea: &Idea) -> Self {
        Self {
            id: idea.id.clone(),
            title: idea.title.clone(),
            description: idea.description.clone(),
            status: idea.status.clone(),
            priority: idea.priority.clone(),
            created_at: idea.created_at,
        }
    }
}

impl From<IdeaDocument> for Idea {
    fn from(doc: IdeaDocument) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            description: doc.description,
            status: doc.status,
            priority: doc.priority,
            created_at: doc.created_at,
        }
    }
}

/// Collection-backed idea repository.
pub struct MongoIdeaRepository {
    pub(crate) collection: Collection<IdeaDocument>,
}

fn by_id(id: &str) -> Document {
    doc! { "id": id }
}

fn database_error(e: mongodb::error::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY
    )
}

/// `$set` document for an update.
fn set_document(changes: &IdeaChanges) -> Document {
    match changes {
        IdeaChanges::Full(fields) => doc! {
            "$set": {
                "title": fields.title.as_str(),
                "description": fields.description.clone(),
                "status": fields.status.as_str(),
                "priority": fields.priority.clone(),
            }
        },
        IdeaChanges::Status(status) => doc! {
            "$set": { "status": status.as_str() }
        },
    }
}

impl IdeaRepository for MongoIdeaRepository {
    async fn list(&self, limit: usize) -> DbResult<Vec<Idea>> {
        let cursor = self
            .collection
            .find(doc! {})
            .limit(limit as i64)
            .await
            .map_err(database_error)?;

        let docs: Vec<IdeaDocument> = cursor.try_collect().await.map_err(database_error)?;
        Ok(docs.into_iter().map(Idea::from).collect())
    }

    async fn find(&self, id: &str) -> DbResult<Option<Idea>> {
        let doc = self
            .collection
            .find_one(by_id(id))
            .await
            .map_err(database_error)?;
        Ok(doc.map(Idea::from))
    }

    async fn insert(&self, idea: &Idea) -> DbResult<()> {
        let doc = IdeaDocument::from(idea);
        self.collection.insert_one(&doc).await.map_err(|e| {
            if is_duplicate_key(&e) {
                DbError::AlreadyExists {
                    entity_type: IDEA_ENTITY.to_string(),
                    id: idea.id.clone(),
                }
            } else {
                database_error(e)
            }
        })?;
        Ok(())
    }

    async fn update(&self, id: &str, changes: &IdeaChanges) -> DbResult<UpdateOutcome> {
        let result = self
            .collection
            .update_one(by_id(id), set_document(changes))
            .await
            .map_err(database_error)?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete(&self, id: &str) -> DbResult<u64> {
        let result = self
            .collection
            .delete_one(by_id(id))
            .await
            .map_err(database_error)?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use mongodb::bson::{self, Bson, oid::ObjectId};

    use super::*;
    use crate::db::IdeaFields;

    #[test]
    fn created_at_is_stored_as_bson_date() {
        let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let idea = Idea {
            id: "abc".to_string(),
            title: "T".to_string(),
            description: Some("alta".to_string()),
            status: "pending".to_string(),
            priority: None,
            created_at,
        };

        let stored = bson::to_document(&IdeaDocument::from(&idea)).unwrap();

        assert!(matches!(stored.get("created_at"), Some(Bson::DateTime(_))));
        assert_eq!(
            stored.get_datetime("created_at").unwrap().timestamp_millis(),
            created_at.timestamp_millis()
        );
    }

    #[test]
    fn reads_documents_with_native_id_and_date() {
        let created_at = Utc.with_ymd_and_hms(2024, 11, 5, 8, 0, 0).unwrap();
        let stored = doc! {
            "_id": ObjectId::new(),
            "id": "legacy-1",
            "title": "Old idea",
            "description": "alta",
            "status": "pending",
            "priority": Bson::Null,
            "created_at": bson::DateTime::from_millis(created_at.timestamp_millis()),
        };

        let idea = Idea::from(bson::from_document::<IdeaDocument>(stored).unwrap());

        assert_eq!(idea.id, "legacy-1");
        assert_eq!(idea.title, "Old idea");
        assert_eq!(idea.priority, None);
        assert_eq!(idea.created_at, created_at);
    }

    #[test]
    fn status_update_only_sets_status() {
        let update = set_document(&IdeaChanges::Status("done".to_string()));
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("status").unwrap(), "done");
    }

    #[test]
    fn full_update_sets_every_mutable_field() {
        let update = set_document(&IdeaChanges::Full(IdeaFields {
            title: "T".to_string(),
            description: None,
            status: "pending".to_string(),
            priority: Some("high".to_string()),
        }));
        let set = update.get_document("$set").unwrap();

        let keys: Vec<_> = set.keys().map(String::as_str).collect();
        assert_eq!(keys, ["title", "description", "status", "priority"]);
        assert!(set.is_null("description"));
        assert_eq!(set.get_str("priority").unwrap(), "high");
    }

    #[test]
    fn filter_targets_application_id() {
        let filter = by_id("abc");
        assert_eq!(filter.get_str("id").unwrap(), "abc");
        assert!(filter.get("_id").is_none());
    }
}
