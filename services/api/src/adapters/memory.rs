//! services/api/src/adapters/memory.rs
//!
//! This module contains the in-memory journal store, the concrete
//! implementation of the `JournalStoreService` port from the `core` crate.
//! A real deployment would swap this adapter for a relational store behind
//! the same port.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use aceso_core::domain::{JournalEntry, NewJournalEntry};
use aceso_core::ports::{JournalStoreService, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An in-memory store adapter that implements the `JournalStoreService` port.
///
/// Constructed once at process start and injected into handlers; a fresh
/// instance per test gives full isolation. The write lock makes entry
/// creation atomic from the perspective of concurrent readers.
#[derive(Default)]
pub struct MemStorage {
    entries: RwLock<HashMap<Uuid, JournalEntry>>,
}

impl MemStorage {
    /// Creates a new, empty `MemStorage`.
    pub fn new() -> Self {
        Self::default()
    }
}

//=========================================================================================
// `JournalStoreService` Trait Implementation
//=========================================================================================

#[async_trait]
impl JournalStoreService for MemStorage {
    async fn create_entry(&self, new_entry: NewJournalEntry) -> PortResult<JournalEntry> {
        if new_entry.content.trim().is_empty() {
            return Err(PortError::InvalidInput(
                "Journal content must not be empty".to_string(),
            ));
        }

        let entry = JournalEntry {
            id: Uuid::new_v4(),
            content: new_entry.content,
            input_mode: new_entry.input_mode,
            timestamp: Utc::now(),
            emotions: new_entry.emotions,
            mood_rating: new_entry.mood_rating,
        };

        let mut entries = self.entries.write().await;
        entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn list_entries(&self) -> PortResult<Vec<JournalEntry>> {
        let entries = self.entries.read().await;
        let mut all: Vec<JournalEntry> = entries.values().cloned().collect();
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(all)
    }

    async fn get_entry(&self, entry_id: Uuid) -> PortResult<JournalEntry> {
        let entries = self.entries.read().await;
        entries.get(&entry_id).cloned().ok_or_else(|| {
            PortError::NotFound(format!("Journal entry {} not found", entry_id))
        })
    }
}
