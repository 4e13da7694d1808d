//! services/api/src/adapters/emotion_llm.rs
//!
//! This module contains the adapter for the emotion-analysis LLM.
//! It implements the `EmotionAnalysisService` port from the `core` crate.

const SYSTEM_PROMPT: &str = r#"You are an expert in emotional intelligence and mental health. Analyze the following journal entry and identify:
1. The primary emotion (one word)
2. Secondary emotions (up to 3)
3. Overall sentiment (positive, negative, neutral, or mixed)
4. Sentiment score (-1 to 1, where -1 is very negative and 1 is very positive)
5. Confidence in your analysis (0 to 1)
6. Emotional intensity (0 to 1)
7. Key themes (up to 3)
8. A brief supportive summary (1-2 sentences)

Respond with JSON in this exact format:
{
  "primaryEmotion": "string",
  "secondaryEmotions": ["string", "string"],
  "sentiment": "positive|negative|neutral|mixed",
  "sentimentScore": number,
  "confidence": number,
  "intensity": number,
  "themes": ["string", "string"],
  "summary": "string"
}"#;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat,
    },
    error::OpenAIError,
    Client,
};
use async_trait::async_trait;
use serde::Deserialize;

use aceso_core::domain::{EmotionAnalysis, Sentiment};
use aceso_core::ports::{EmotionAnalysisService, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `EmotionAnalysisService` using an
/// OpenAI-compatible LLM with a JSON-object response format.
#[derive(Clone)]
pub struct OpenAiEmotionAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiEmotionAdapter {
    /// Creates a new `OpenAiEmotionAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }
}

/// The analyzer's raw JSON payload. Every field is optional so a partial
/// model response still decodes; defaults and clamping are applied in
/// `parse_analysis`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    primary_emotion: Option<String>,
    secondary_emotions: Option<Vec<String>>,
    sentiment: Option<String>,
    sentiment_score: Option<f64>,
    confidence: Option<f64>,
    intensity: Option<f64>,
    themes: Option<Vec<String>>,
    summary: Option<String>,
}

/// Unknown or missing sentiment labels fall back to neutral.
fn sentiment_from_label(label: &str) -> Sentiment {
    match label {
        "positive" => Sentiment::Positive,
        "negative" => Sentiment::Negative,
        "mixed" => Sentiment::Mixed,
        _ => Sentiment::Neutral,
    }
}

/// Decodes the model's JSON content and normalizes it into a well-formed
/// `EmotionAnalysis`: missing fields fall back to neutral defaults and the
/// numeric scores are clamped into their documented ranges.
fn parse_analysis(content: &str) -> PortResult<EmotionAnalysis> {
    let raw: RawAnalysis = serde_json::from_str(content).map_err(|e| {
        PortError::Unexpected(format!("Emotion analyzer returned invalid JSON: {}", e))
    })?;

    Ok(EmotionAnalysis {
        primary_emotion: raw.primary_emotion.unwrap_or_else(|| "neutral".to_string()),
        secondary_emotions: raw.secondary_emotions.unwrap_or_default(),
        sentiment: raw
            .sentiment
            .as_deref()
            .map_or(Sentiment::Neutral, sentiment_from_label),
        sentiment_score: raw.sentiment_score.unwrap_or(0.0).clamp(-1.0, 1.0),
        confidence: raw.confidence.unwrap_or(0.7).clamp(0.0, 1.0),
        intensity: raw.intensity.unwrap_or(0.5).clamp(0.0, 1.0),
        themes: raw.themes.unwrap_or_default(),
        summary: raw
            .summary
            .unwrap_or_else(|| "Your entry has been analyzed.".to_string()),
    })
}

//=========================================================================================
// `EmotionAnalysisService` Trait Implementation
//=========================================================================================

#[async_trait]
impl EmotionAnalysisService for OpenAiEmotionAdapter {
    /// Analyzes the emotional content of one journal entry's text.
    async fn analyze(&self, text: &str) -> PortResult<EmotionAnalysis> {
        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_PROMPT)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(text)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .response_format(ResponseFormat::JsonObject)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                PortError::Unexpected(
                    "Emotion analyzer response contained no text content.".to_string(),
                )
            })?;

        parse_analysis(&content)
    }
}
