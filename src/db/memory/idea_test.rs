//! Tests for the in-memory idea repository.

use crate::db::{
    Database, DbError, Idea, IdeaChanges, IdeaFields, IdeaRepository, MemoryDatabase,
    UpdateOutcome, current_timestamp, generate_entity_id,
};

fn idea(title: &str) -> Idea {
    Idea {
        id: generate_entity_id(),
        title: title.to_string(),
        description: None,
        status: "pending".to_string(),
        priority: None,
        created_at: current_timestamp(),
    }
}

#[tokio::test]
async fn insert_then_find_returns_same_record() {
    let db = MemoryDatabase::new();
    let created = idea("Solar kettle");

    db.ideas().insert(&created).await.unwrap();
    let found = db.ideas().find(&created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn find_missing_returns_none() {
    let db = MemoryDatabase::new();
    assert_eq!(db.ideas().find("nope").await.unwrap(), None);
}

#[tokio::test]
async fn duplicate_id_is_rejected() {
    let db = MemoryDatabase::new();
    let first = idea("One");
    let mut second = idea("Two");
    second.id = first.id.clone();

    db.ideas().insert(&first).await.unwrap();
    let err = db.ideas().insert(&second).await.unwrap_err();

    assert!(matches!(err, DbError::AlreadyExists { .. }));
}

#[tokio::test]
async fn list_keeps_insertion_order_and_caps_results() {
    let db = MemoryDatabase::new();
    for n in 0..5 {
        db.ideas().insert(&idea(&format!("idea {n}"))).await.unwrap();
    }

    let listed = db.ideas().list(3).await.unwrap();
    let titles: Vec<_> = listed.iter().map(|i| i.title.as_str()).collect();

    assert_eq!(titles, ["idea 0", "idea 1", "idea 2"]);
}

#[tokio::test]
async fn update_reports_matched_and_modified_counts() {
    let db = MemoryDatabase::new();
    let created = idea("Counts");
    db.ideas().insert(&created).await.unwrap();

    let changed = db
        .ideas()
        .update(&created.id, &IdeaChanges::Status("done".to_string()))
        .await
        .unwrap();
    assert_eq!(changed, UpdateOutcome { matched: 1, modified: 1 });

    let unchanged = db
        .ideas()
        .update(&created.id, &IdeaChanges::Status("done".to_string()))
        .await
        .unwrap();
    assert_eq!(unchanged, UpdateOutcome { matched: 1, modified: 0 });

    let missing = db
        .ideas()
        .update(
            "missing",
            &IdeaChanges::Full(IdeaFields {
                title: "x".to_string(),
                description: None,
                status: "y".to_string(),
                priority: None,
            }),
        )
        .await
        .unwrap();
    assert_eq!(missing, UpdateOutcome::default());
}

#[tokio::test]
async fn delete_removes_record_once() {
    let db = MemoryDatabase::new();
    let created = idea("Ephemeral");
    db.ideas().insert(&created).await.unwrap();

    assert_eq!(db.ideas().delete(&created.id).await.unwrap(), 1);
    assert_eq!(db.ideas().delete(&created.id).await.unwrap(), 0);
    assert_eq!(db.ideas().find(&created.id).await.unwrap(), None);
}

#[tokio::test]
async fn clones_share_the_same_collection() {
    let db = MemoryDatabase::new();
    let clone = db.clone();
    let created = idea("Shared");

    db.ideas().insert(&created).await.unwrap();

    assert!(clone.ideas().find(&created.id).await.unwrap().is_some());
}
