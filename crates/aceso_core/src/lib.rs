pub mod domain;
pub mod insights;
pub mod ports;
pub mod strategies;

pub use domain::{
    AssistantMessage, AssistantRole, CopingStrategy, Difficulty, EmotionAnalysis, InputMode,
    JournalEntry, MoodInsight, NewJournalEntry, Sentiment, StrategyCategory, Trend,
};
pub use insights::mood_insight;
pub use ports::{
    AssistantChatService, EmotionAnalysisService, JournalStoreService, PortError, PortResult,
};
