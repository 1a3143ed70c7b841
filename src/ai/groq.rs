//! Groq API client
//!
//! Chat-completion client for Groq's OpenAI-compatible REST API, used to
//! translate questions into SQL.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use super::{AiError, AiResult, CompletionProvider};
use crate::config::DEFAULT_MODEL;

/// Groq OpenAI-compatible API base
const BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Request timeout in seconds
const TIMEOUT_SECONDS: u64 = 60;

/// Sampling temperature for SQL generation
const TEMPERATURE: f32 = 0.1;

/// Completion token cap
const MAX_TOKENS: u32 = 500;

/// Groq chat-completion client
#[derive(Debug, Clone)]
pub struct GroqClient {
    api_key: String,
    model: String,
    client: Client,
    base_url: String,
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

/// A single chat message
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat-completion response body
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

/// One completion choice
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

/// The message inside a choice
#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Token accounting reported by the API
#[derive(Debug, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: Option<u32>,
    #[serde(default)]
    completion_tokens: Option<u32>,
    #[serde(default)]
    total_tokens: Option<u32>,
}

impl GroqClient {
    /// Create a new Groq client
    pub fn new(api_key: String, model: String) -> AiResult<Self> {
        if api_key.is_empty() {
            return Err(AiError::AuthenticationError);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECONDS))
            .build()
            .map_err(AiError::HttpError)?;

        Ok(Self {
            api_key,
            model,
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Create from environment variables (`GROQ_API_KEY`, optional `MODEL_NAME`)
    pub fn from_env() -> AiResult<Self> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| AiError::AuthenticationError)?;
        let model = std::env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(api_key, model)
    }

    /// Send a chat-completion request and return the first choice's text
    async fn send_request(&self, system_prompt: &str, user_prompt: &str) -> AiResult<String> {
        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!("Sending request to Groq API: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(AiError::HttpError)?;

        let status = response.status();
        let response_text = response.text().await.map_err(AiError::HttpError)?;

        debug!("Groq API response status: {}", status);

        if !status.is_success() {
            error!("Groq API error: {} - {}", status, response_text);
            return Err(AiError::ApiError(format!(
                "HTTP {}: {}",
                status, response_text
            )));
        }

        let chat_response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse Groq response: {}", e);
            AiError::JsonError(e)
        })?;

        let choice = chat_response
            .choices
            .first()
            .ok_or_else(|| AiError::InvalidResponse("No choices in response".to_string()))?;

        if let Some(usage) = &chat_response.usage {
            info!(
                "Groq API usage - Prompt: {:?} tokens, Completion: {:?} tokens, Total: {:?} tokens",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(choice.message.content.clone())
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AiResult<String> {
        self.send_request(system_prompt, user_prompt).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
