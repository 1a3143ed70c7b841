//! SQL generation
//!
//! Wraps a completion provider with the schema context and the fixed user
//! prompt, and normalizes whatever the model returns.

use tracing::debug;

use super::{utils, AiResult, SharedCompletionProvider};

/// Turns a natural-language question into a SQL string.
pub struct SqlGenerator {
    provider: SharedCompletionProvider,
    schema_context: String,
}

impl SqlGenerator {
    /// Create a generator over the given provider and schema context
    pub fn new(provider: SharedCompletionProvider, schema_context: String) -> Self {
        Self {
            provider,
            schema_context,
        }
    }

    /// Build the user prompt for a question
    fn build_user_prompt(question: &str) -> String {
        format!(
            "Generate a PostgreSQL query for: {question}\n\nReturn ONLY the SQL query, nothing else."
        )
    }

    /// Generate SQL for a question.
    ///
    /// The result is fence-stripped and trimmed but otherwise passed through
    /// as the model produced it; an empty string means the model gave no
    /// usable output. Callers decide what to do with either.
    pub async fn generate(&self, question: &str) -> AiResult<String> {
        debug!("Generating SQL for question: {}", question);

        let raw = self
            .provider
            .complete(&self.schema_context, &Self::build_user_prompt(question))
            .await?;

        let sql = utils::strip_code_fences(&raw);
        debug!("Generated SQL: {}", sql);

        Ok(sql)
    }

    /// Model name of the underlying provider
    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AiError, CompletionProvider};
    use std::sync::Arc;

    struct ScriptedProvider {
        reply: AiResult<String>,
    }

    impl ScriptedProvider {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(AiError::ApiError(message.to_string())),
            })
        }
    }

    #[async_trait::async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(&self, _system: &str, _user: &str) -> AiResult<String> {
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(AiError::ApiError(msg)) => Err(AiError::ApiError(msg.clone())),
                Err(_) => unreachable!("scripted provider only fails with ApiError"),
            }
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_generate_strips_fences() {
        let generator = SqlGenerator::new(
            ScriptedProvider::replying("```sql\nSELECT 1\n```"),
            "context".to_string(),
        );
        let sql = generator.generate("the number one").await.unwrap();
        assert_eq!(sql, "SELECT 1");
    }

    #[tokio::test]
    async fn test_generate_passes_prose_through() {
        let generator = SqlGenerator::new(
            ScriptedProvider::replying("I cannot answer that."),
            "context".to_string(),
        );
        let sql = generator.generate("nonsense").await.unwrap();
        assert_eq!(sql, "I cannot answer that.");
    }

    #[tokio::test]
    async fn test_generate_propagates_provider_error() {
        let generator =
            SqlGenerator::new(ScriptedProvider::failing("quota exceeded"), "context".to_string());
        let err = generator.generate("anything").await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn test_user_prompt_shape() {
        let prompt = SqlGenerator::build_user_prompt("total spend this year");
        assert!(prompt.starts_with("Generate a PostgreSQL query for: total spend this year"));
        assert!(prompt.ends_with("Return ONLY the SQL query, nothing else."));
    }

    #[test]
    fn test_model_name_comes_from_the_provider() {
        let generator =
            SqlGenerator::new(ScriptedProvider::replying("SELECT 1"), "context".to_string());
        assert_eq!(generator.model_name(), "scripted");
    }
}
