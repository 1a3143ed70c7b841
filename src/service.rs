//! Query orchestration
//!
//! Runs a question through the generate-then-execute pipeline and folds every
//! failure into the response body. `answer` never fails: a missing API key, a
//! provider error, an empty generation, a missing database, or a SQL error
//! all come back as an `error` field in an otherwise well-formed response.

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::{info, warn};

use crate::ai::SqlGenerator;
use crate::database::SqlExecutor;

/// An incoming question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

/// The answer to a question.
///
/// `sql` is present exactly when generation succeeded with non-empty output,
/// whether or not execution worked afterwards. Absent fields are omitted from
/// the serialized JSON entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<JsonMap<String, JsonValue>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    fn error(question: String, message: impl Into<String>) -> Self {
        Self {
            question,
            sql: None,
            results: None,
            error: Some(message.into()),
        }
    }
}

/// Generate-then-execute pipeline over optional capabilities.
///
/// Either half may be absent when its configuration was missing at startup;
/// the pipeline degrades per request instead of refusing to start.
pub struct QueryService {
    generator: Option<SqlGenerator>,
    executor: Option<SqlExecutor>,
}

impl QueryService {
    /// Create a service from whatever capabilities are configured
    pub fn new(generator: Option<SqlGenerator>, executor: Option<SqlExecutor>) -> Self {
        Self {
            generator,
            executor,
        }
    }

    /// Whether a completion provider was configured at startup
    pub fn groq_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Whether a database was configured at startup
    pub fn database_configured(&self) -> bool {
        self.executor.is_some()
    }

    /// Answer a question.
    ///
    /// The stages run in a fixed order and the first failure stops the
    /// pipeline: provider presence, generation, non-empty output, database
    /// presence, execution. The database is never touched unless generation
    /// produced something.
    pub async fn answer(&self, question: String) -> QueryResponse {
        info!("Processing question: {}", question);

        let Some(generator) = &self.generator else {
            warn!("Question rejected: no completion provider configured");
            return QueryResponse::error(
                question,
                "GROQ_API_KEY not configured. Please set your API key.",
            );
        };

        let sql = match generator.generate(&question).await {
            Ok(sql) => sql,
            Err(e) => {
                warn!("SQL generation failed: {}", e);
                return QueryResponse::error(question, format!("Error generating SQL: {e}"));
            }
        };

        if sql.is_empty() {
            warn!("Model produced no SQL for the question");
            return QueryResponse::error(question, "Could not generate SQL for this question");
        }

        let Some(executor) = &self.executor else {
            warn!("Stopping after generation: no database configured");
            return QueryResponse {
                question,
                sql: Some(sql),
                results: None,
                error: Some("Database not configured".to_string()),
            };
        };

        match executor.run(&sql).await {
            Ok(results) => {
                info!("Question answered with {} rows", results.len());
                QueryResponse {
                    question,
                    sql: Some(sql),
                    results: Some(results),
                    error: None,
                }
            }
            Err(e) => {
                warn!("SQL execution failed: {}", e);
                QueryResponse {
                    question,
                    sql: Some(sql),
                    results: None,
                    error: Some(format!("Error executing SQL: {e}")),
                }
            }
        }
    }
}
