//! Integration tests for the in-memory journal store, exercised through the
//! `JournalStoreService` port. Each test builds a fresh store for isolation.

use std::time::Duration;

use aceso_core::domain::{InputMode, NewJournalEntry};
use aceso_core::insights::mood_insight;
use aceso_core::ports::{JournalStoreService, PortError};
use api_lib::adapters::MemStorage;
use chrono::Utc;
use uuid::Uuid;

fn new_entry(content: &str, mood_rating: Option<f64>) -> NewJournalEntry {
    NewJournalEntry {
        content: content.to_string(),
        input_mode: InputMode::Text,
        emotions: None,
        mood_rating,
    }
}

#[tokio::test]
async fn create_assigns_id_and_timestamp() {
    let store = MemStorage::new();
    let before = Utc::now();

    let entry = store
        .create_entry(new_entry("First entry", Some(4.0)))
        .await
        .expect("create entry");

    assert_eq!(entry.content, "First entry");
    assert_eq!(entry.input_mode, InputMode::Text);
    assert_eq!(entry.mood_rating, Some(4.0));
    assert!(entry.timestamp >= before && entry.timestamp <= Utc::now());
}

#[tokio::test]
async fn get_round_trips_a_created_entry() {
    let store = MemStorage::new();
    let created = store
        .create_entry(new_entry("Round trip", None))
        .await
        .expect("create entry");

    let fetched = store.get_entry(created.id).await.expect("get entry");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let store = MemStorage::new();
    let err = store.get_entry(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, PortError::NotFound(_)));
}

#[tokio::test]
async fn empty_content_is_rejected_at_the_creation_boundary() {
    let store = MemStorage::new();

    let err = store.create_entry(new_entry("", None)).await.unwrap_err();
    assert!(matches!(err, PortError::InvalidInput(_)));

    let err = store
        .create_entry(new_entry("   \n", None))
        .await
        .unwrap_err();
    assert!(matches!(err, PortError::InvalidInput(_)));

    // Nothing was persisted.
    assert!(store.list_entries().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_entries_newest_first() {
    let store = MemStorage::new();
    for content in ["oldest", "middle", "newest"] {
        store
            .create_entry(new_entry(content, Some(3.0)))
            .await
            .expect("create entry");
        // Space out the server-assigned timestamps.
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let entries = store.list_entries().await.expect("list entries");
    let contents: Vec<&str> = entries.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn insights_over_a_fresh_store_snapshot() {
    let store = MemStorage::new();
    store
        .create_entry(new_entry("Good day", Some(5.0)))
        .await
        .expect("create entry");
    store
        .create_entry(new_entry("Fine day", Some(3.0)))
        .await
        .expect("create entry");

    let entries = store.list_entries().await.expect("list entries");
    let insight = mood_insight(&entries, Utc::now());

    assert_eq!(insight.weekly_average, 4.0);
    assert_eq!(insight.total_entries, 2);
    // Both entries were created just now, so the streak is today alone.
    assert_eq!(insight.streak_days, 1);
}
