//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use aceso_core::ports::{AssistantChatService, EmotionAnalysisService, JournalStoreService};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all
/// handlers. All collaborators are held behind their core ports, so handlers
/// never depend on a concrete store or AI provider.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JournalStoreService>,
    pub config: Arc<Config>,
    pub emotion_adapter: Arc<dyn EmotionAnalysisService>,
    pub assistant_adapter: Arc<dyn AssistantChatService>,
}
