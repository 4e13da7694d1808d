//! crates/aceso_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like storage
//! backends or AI providers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AssistantMessage, EmotionAnalysis, JournalEntry, NewJournalEntry};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., storage, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The journal entry store.
///
/// Append-only from the core's perspective: entries are created once with a
/// generated id and server-assigned timestamp, and never updated or deleted.
/// `list_entries` must return a consistent snapshot for the duration of one
/// aggregation call, and `create_entry` must be atomic from the point of view
/// of concurrent readers.
#[async_trait]
pub trait JournalStoreService: Send + Sync {
    /// Persists a new entry. Rejects empty or whitespace-only content with
    /// `PortError::InvalidInput`.
    async fn create_entry(&self, new_entry: NewJournalEntry) -> PortResult<JournalEntry>;

    /// Returns all entries ordered by timestamp descending.
    async fn list_entries(&self) -> PortResult<Vec<JournalEntry>>;

    /// Returns a single entry, or `PortError::NotFound`.
    async fn get_entry(&self, entry_id: Uuid) -> PortResult<JournalEntry>;
}

#[async_trait]
pub trait EmotionAnalysisService: Send + Sync {
    /// Analyzes the emotional content of one journal entry's text.
    async fn analyze(&self, text: &str) -> PortResult<EmotionAnalysis>;
}

#[async_trait]
pub trait AssistantChatService: Send + Sync {
    /// Produces the companion's reply to a user message, given the recent
    /// conversation history (oldest first).
    async fn chat(&self, message: &str, history: &[AssistantMessage]) -> PortResult<String>;
}
