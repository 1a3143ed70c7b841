//! Text-to-SQL generation
//!
//! The completion-provider abstraction, the Groq client that implements it,
//! and the generator that turns a natural-language question into a SQL
//! string.

pub mod generator;
pub mod groq;
pub mod utils;

pub use generator::SqlGenerator;
pub use groq::GroqClient;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors from the completion layer
#[derive(Error, Debug)]
pub enum AiError {
    #[error("API key is missing or empty")]
    AuthenticationError,

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for AI operations
pub type AiResult<T> = Result<T, AiError>;

/// The capability of producing a chat completion from a system prompt plus a
/// user prompt. Implemented by the Groq client and by scripted fakes in
/// tests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Call the model with system + user prompts, return the raw text reply
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AiResult<String>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}

/// Shared handle to a completion provider
pub type SharedCompletionProvider = Arc<dyn CompletionProvider>;
