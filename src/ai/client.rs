//! HTTP client for OpenAI-compatible chat completions.

use crate::constants::{CHAT_COMPLETIONS_PATH, CHAT_MAX_TOKENS, CHAT_TEMPERATURE};
use crate::errors::{AppResult, ChatError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Message,
}

/// Response from chat completion.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Client for a chat completions provider.
pub struct ChatClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.base_url)
            .field("api_key", &crate::constants::REDACTED_PLACEHOLDER)
            .field("model", &self.model)
            .finish()
    }
}

impl ChatClient {
    /// Creates a new chat client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the provider (e.g., "https://api.together.xyz")
    /// * `api_key` - Bearer token sent with every request
    /// * `model` - Model name passed through to the provider
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a chat completion request and returns the first choice's content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The provider is not reachable (`ChatError::Offline`)
    /// - The provider answers with a non-success status (`ChatError::Unavailable`)
    /// - The response body has no choices or cannot be parsed (`ChatError::InvalidResponse`)
    pub fn chat(&self, messages: &[Message]) -> AppResult<String> {
        debug!(
            model = %self.model,
            messages = messages.len(),
            "Sending chat request"
        );

        let url = format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH);
        let request = ChatRequest {
            model: &self.model,
            messages,
            max_tokens: CHAT_MAX_TOKENS,
            temperature: CHAT_TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(ChatError::Offline)?;

        let status = response.status();
        if !status.is_success() {
            debug!("Chat API answered with HTTP {}", status);
            return Err(ChatError::Unavailable {
                status: status.as_u16(),
            }
            .into());
        }

        let chat_response: ChatResponse = response.json().map_err(|e| {
            ChatError::InvalidResponse(format!("Failed to parse chat response: {}", e))
        })?;

        let reply = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ChatError::InvalidResponse("Response contained no choices".to_string()))?;

        debug!("Received chat response");
        Ok(reply)
    }
}
