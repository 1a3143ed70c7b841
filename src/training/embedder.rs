//! Text embeddings for the example store
//!
//! Embeds training content for pgvector similarity search. Groq serves no
//! embedding endpoint, so the store talks to an OpenAI-compatible one.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use super::TrainerError;

/// Embedding vector type (matches the pgvector column)
pub type Embedding = Vec<f32>;

/// Default OpenAI-compatible embeddings endpoint
const DEFAULT_API_URL: &str = "https://api.openai.com/v1/embeddings";

/// Default embedding model
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Dimension of the default model
const DEFAULT_DIMENSION: usize = 1536;

/// Trait for text embedding services
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for the text
    async fn embed(&self, text: &str) -> Result<Embedding, TrainerError>;

    /// Model identifier for storage
    fn model_name(&self) -> &str;

    /// Embedding dimension
    fn dimension(&self) -> usize;
}

/// Shared embedder handle
pub type SharedEmbedder = Arc<dyn Embedder>;

/// Client for an OpenAI-compatible embeddings endpoint
pub struct HttpEmbedder {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    dimension: usize,
}

impl HttpEmbedder {
    /// Create an embedder for the default endpoint and model
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            dimension: DEFAULT_DIMENSION,
        }
    }

    /// Create an embedder for a specific endpoint and model
    pub fn with_endpoint(api_key: String, api_url: String, model: String, dimension: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
            dimension,
        }
    }

    /// Create from environment variables.
    ///
    /// `EMBEDDING_API_KEY` falls back to `OPENAI_API_KEY`; endpoint, model
    /// and dimension are overridable via `EMBEDDING_API_URL`,
    /// `EMBEDDING_MODEL` and `EMBEDDING_DIMENSION`.
    pub fn from_env() -> Result<Self, TrainerError> {
        let api_key = std::env::var("EMBEDDING_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .map_err(|_| TrainerError::MissingConfig("EMBEDDING_API_KEY"))?;
        let api_url =
            std::env::var("EMBEDDING_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = std::env::var("EMBEDDING_MODEL")
            .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string());
        let dimension = std::env::var("EMBEDDING_DIMENSION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_DIMENSION);

        Ok(Self::with_endpoint(api_key, api_url, model, dimension))
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, TrainerError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": self.model,
                "input": text
            }))
            .send()
            .await?
            .error_for_status()?
            .json::<EmbeddingResponse>()
            .await?;

        response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(TrainerError::EmptyEmbedding)
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Null embedder for testing (returns zero vectors)
pub struct NullEmbedder {
    dimension: usize,
}

impl NullEmbedder {
    pub fn new() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl Default for NullEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for NullEmbedder {
    async fn embed(&self, _text: &str) -> Result<Embedding, TrainerError> {
        Ok(vec![0.0; self.dimension])
    }

    fn model_name(&self) -> &str {
        "null"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_embedder() {
        let embedder = NullEmbedder::new();
        let embedding = embedder.embed("test").await.unwrap();
        assert_eq!(embedding.len(), 1536);
        assert!(embedding.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_default_configuration() {
        let embedder = HttpEmbedder::new("key".to_string());
        assert_eq!(embedder.model_name(), "text-embedding-3-small");
        assert_eq!(embedder.dimension(), 1536);
    }
}
