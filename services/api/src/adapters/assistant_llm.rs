//! services/api/src/adapters/assistant_llm.rs
//!
//! This module contains the adapter for the wellness-companion LLM.
//! It implements the `AssistantChatService` port from the `core` crate.

const SYSTEM_PROMPT: &str = r#"You are a compassionate AI wellness companion named Aceso. Your role is to:
- Provide emotional support and empathetic listening
- Help users process their feelings without judgment
- Suggest healthy coping strategies when appropriate
- Encourage professional help for serious mental health concerns
- Be warm, supportive, and understanding
- Keep responses concise but meaningful (2-4 sentences typically)
- Never diagnose or replace professional therapy
- Focus on validation, reflection, and gentle guidance

Important: If the user expresses suicidal thoughts or severe crisis, immediately encourage them to contact crisis resources (988 Suicide & Crisis Lifeline, Crisis Text Line: text HOME to 741741)."#;

/// The reply used when the model returns no text content.
const FALLBACK_REPLY: &str = "I'm here to listen. How are you feeling?";

/// Only the most recent turns of history are forwarded to the model.
const HISTORY_WINDOW: usize = 5;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    error::OpenAIError,
    Client,
};
use async_trait::async_trait;

use aceso_core::domain::{AssistantMessage, AssistantRole};
use aceso_core::ports::{AssistantChatService, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `AssistantChatService` using an
/// OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiAssistantAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiAssistantAdapter {
    /// Creates a new `OpenAiAssistantAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }
}

//=========================================================================================
// `AssistantChatService` Trait Implementation
//=========================================================================================

#[async_trait]
impl AssistantChatService for OpenAiAssistantAdapter {
    /// Produces the companion's reply, forwarding the last few history turns
    /// for conversational context.
    async fn chat(&self, message: &str, history: &[AssistantMessage]) -> PortResult<String> {
        let mut messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_PROMPT)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let window_start = history.len().saturating_sub(HISTORY_WINDOW);
        for turn in &history[window_start..] {
            let chat_message = match turn.role {
                AssistantRole::User => ChatCompletionRequestUserMessageArgs::default()
                    .content(turn.content.as_str())
                    .build()
                    .map_err(|e| PortError::Unexpected(e.to_string()))?
                    .into(),
                AssistantRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
                    .content(turn.content.as_str())
                    .build()
                    .map_err(|e| PortError::Unexpected(e.to_string()))?
                    .into(),
            };
            messages.push(chat_message);
        }

        messages.push(
            ChatCompletionRequestUserMessageArgs::default()
                .content(message)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        let reply = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());

        Ok(reply)
    }
}
