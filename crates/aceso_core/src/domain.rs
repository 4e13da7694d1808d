//! crates/aceso_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage backend or web framework;
//! serde derives exist because every one of them is a wire payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// How a journal entry was captured on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Text,
    Voice,
}

/// Overall sentiment classification produced by the emotion analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Mixed,
    Neutral,
}

/// The per-entry analysis produced by the emotion analyzer.
///
/// Attached to exactly one `JournalEntry` at creation time and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionAnalysis {
    pub primary_emotion: String,
    /// Up to 3 supporting emotions.
    pub secondary_emotions: Vec<String>,
    pub sentiment: Sentiment,
    /// -1 (very negative) to 1 (very positive).
    pub sentiment_score: f64,
    /// Analyzer confidence, 0 to 1.
    pub confidence: f64,
    /// Emotional intensity, 0 to 1.
    pub intensity: f64,
    /// Up to 3 key themes.
    pub themes: Vec<String>,
    /// A brief supportive summary (1-2 sentences).
    pub summary: String,
}

impl EmotionAnalysis {
    /// Derives the 1-5 mood rating from the sentiment classification.
    ///
    /// Base mood per sentiment class, adjusted by half the sentiment score,
    /// rounded to one decimal and then clamped into [1, 5].
    pub fn mood_rating(&self) -> f64 {
        let base = match self.sentiment {
            Sentiment::Positive => 4.0,
            Sentiment::Neutral => 3.0,
            Sentiment::Mixed => 2.5,
            Sentiment::Negative => 2.0,
        };
        let rating = base + self.sentiment_score * 0.5;
        ((rating * 10.0).round() / 10.0).clamp(1.0, 5.0)
    }
}

/// Represents one journal submission.
///
/// Created once by the store with a generated id and server-assigned
/// timestamp; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub content: String,
    pub input_mode: InputMode,
    pub timestamp: DateTime<Utc>,
    pub emotions: Option<EmotionAnalysis>,
    pub mood_rating: Option<f64>,
}

/// The insert shape handed to the store; id and timestamp are store-assigned.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub content: String,
    pub input_mode: InputMode,
    pub emotions: Option<EmotionAnalysis>,
    pub mood_rating: Option<f64>,
}

/// Three-way mood trend comparing two consecutive 7-day windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

/// Aggregated mood statistics, recomputed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodInsight {
    /// Mean mood rating over the last 7 days, rounded to one decimal.
    pub weekly_average: f64,
    pub trend: Trend,
    /// Occurrence counts over primary and secondary emotions combined.
    pub emotion_distribution: HashMap<String, u32>,
    pub total_entries: usize,
    /// Consecutive calendar days ending today with at least one entry.
    pub streak_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyCategory {
    Breathing,
    Meditation,
    Movement,
    Grounding,
    Social,
    Creative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// One catalog-defined self-help technique.
///
/// The catalog itself is immutable; `personalized_reason` is computed per
/// request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopingStrategy {
    pub id: String,
    pub title: String,
    pub category: StrategyCategory,
    pub description: String,
    pub steps: Vec<String>,
    pub duration: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalized_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantRole {
    User,
    Assistant,
}

/// One turn of companion-chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantMessage {
    pub role: AssistantRole,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(sentiment: Sentiment, score: f64) -> EmotionAnalysis {
        EmotionAnalysis {
            primary_emotion: "calm".to_string(),
            secondary_emotions: vec![],
            sentiment,
            sentiment_score: score,
            confidence: 0.9,
            intensity: 0.4,
            themes: vec![],
            summary: "ok".to_string(),
        }
    }

    #[test]
    fn mood_rating_uses_sentiment_base_plus_half_score() {
        assert_eq!(analysis(Sentiment::Positive, 0.8).mood_rating(), 4.4);
        assert_eq!(analysis(Sentiment::Neutral, 0.0).mood_rating(), 3.0);
        assert_eq!(analysis(Sentiment::Mixed, -0.2).mood_rating(), 2.4);
        assert_eq!(analysis(Sentiment::Negative, -1.0).mood_rating(), 1.5);
    }

    #[test]
    fn mood_rating_is_clamped_into_range() {
        // Positive base 4.0 + 0.5 stays inside; negative base 2.0 - 0.5 too,
        // so only out-of-range analyzer scores can push past the bounds.
        let mut a = analysis(Sentiment::Positive, 0.0);
        a.sentiment_score = 4.0;
        assert_eq!(a.mood_rating(), 5.0);
        a.sentiment = Sentiment::Negative;
        a.sentiment_score = -4.0;
        assert_eq!(a.mood_rating(), 1.0);
    }

    #[test]
    fn sentiment_uses_lowercase_wire_labels() {
        assert_eq!(serde_json::to_string(&Sentiment::Mixed).unwrap(), "\"mixed\"");
        let s: Sentiment = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(s, Sentiment::Negative);
    }
}
