//! Offline training
//!
//! Seeds the example store with the invoicing DDL and business documentation
//! so a retrieval-augmented pipeline can ground its SQL generation. The
//! trainer composes two capabilities: the store that holds the examples and
//! the completion provider the examples are meant for.

pub mod embedder;
pub mod store;

pub use embedder::{Embedder, HttpEmbedder, NullEmbedder, SharedEmbedder};
pub use store::PgVectorExampleStore;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::ai::SharedCompletionProvider;
use crate::schema::{DDL_STATEMENTS, DOCUMENTATION};

/// Errors from training operations
#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("{0} environment variable not set")]
    MissingConfig(&'static str),

    #[error("embedding request failed: {0}")]
    Embedding(#[from] reqwest::Error),

    #[error("empty embedding response")]
    EmptyEmbedding,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Destination for training examples
#[async_trait]
pub trait ExampleStore: Send + Sync {
    /// Register a DDL statement
    async fn add_ddl(&self, ddl: &str) -> Result<(), TrainerError>;

    /// Register a documentation string
    async fn add_documentation(&self, doc: &str) -> Result<(), TrainerError>;
}

/// Shared handle to an example store
pub type SharedExampleStore = Arc<dyn ExampleStore>;

/// What a training run accomplished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingReport {
    pub ddl_count: usize,
    pub documentation_count: usize,
}

/// Seeds an example store with the fixed schema corpus.
pub struct Trainer {
    store: SharedExampleStore,
    provider: SharedCompletionProvider,
}

impl Trainer {
    /// Create a trainer over a store and the provider it trains for
    pub fn new(store: SharedExampleStore, provider: SharedCompletionProvider) -> Self {
        Self { store, provider }
    }

    /// Run the full seeding pass.
    ///
    /// Every DDL statement, then every documentation string, in order. The
    /// first failure aborts the run; there is no partial-progress tracking
    /// and reruns append.
    pub async fn run(&self) -> Result<TrainingReport, TrainerError> {
        info!("Training against model: {}", self.provider.model_name());

        for ddl in DDL_STATEMENTS {
            self.store.add_ddl(ddl).await?;
            let head: String = ddl.chars().take(50).collect();
            info!("Trained on DDL: {}...", head);
        }

        for doc in DOCUMENTATION {
            self.store.add_documentation(doc).await?;
            info!("Trained on documentation: {}", doc);
        }

        Ok(TrainingReport {
            ddl_count: DDL_STATEMENTS.len(),
            documentation_count: DOCUMENTATION.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AiResult, CompletionProvider};
    use std::sync::Mutex;

    struct RecordingStore {
        ddl: Mutex<Vec<String>>,
        docs: Mutex<Vec<String>>,
        fail_after: Option<usize>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                ddl: Mutex::new(Vec::new()),
                docs: Mutex::new(Vec::new()),
                fail_after: None,
            }
        }

        fn failing_after(n: usize) -> Self {
            Self {
                fail_after: Some(n),
                ..Self::new()
            }
        }

        fn total(&self) -> usize {
            self.ddl.lock().unwrap().len() + self.docs.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ExampleStore for RecordingStore {
        async fn add_ddl(&self, ddl: &str) -> Result<(), TrainerError> {
            if self.fail_after == Some(self.total()) {
                return Err(TrainerError::EmptyEmbedding);
            }
            self.ddl.lock().unwrap().push(ddl.to_string());
            Ok(())
        }

        async fn add_documentation(&self, doc: &str) -> Result<(), TrainerError> {
            if self.fail_after == Some(self.total()) {
                return Err(TrainerError::EmptyEmbedding);
            }
            self.docs.lock().unwrap().push(doc.to_string());
            Ok(())
        }
    }

    struct StaticProvider;

    #[async_trait]
    impl CompletionProvider for StaticProvider {
        async fn complete(&self, _system: &str, _user: &str) -> AiResult<String> {
            Ok("SELECT 1".to_string())
        }

        fn model_name(&self) -> &str {
            "static"
        }
    }

    #[tokio::test]
    async fn test_run_seeds_full_corpus() {
        let store = Arc::new(RecordingStore::new());
        let trainer = Trainer::new(store.clone(), Arc::new(StaticProvider));

        let report = trainer.run().await.unwrap();

        assert_eq!(report.ddl_count, 5);
        assert_eq!(report.documentation_count, 9);
        assert_eq!(store.ddl.lock().unwrap().len(), 5);
        assert_eq!(store.docs.lock().unwrap().len(), 9);
        assert!(store.ddl.lock().unwrap()[0].contains("CREATE TABLE Vendor"));
        assert!(store.docs.lock().unwrap()[0].contains("Invoice table"));
    }

    #[tokio::test]
    async fn test_first_failure_aborts_the_run() {
        let store = Arc::new(RecordingStore::failing_after(3));
        let trainer = Trainer::new(store.clone(), Arc::new(StaticProvider));

        let result = trainer.run().await;

        assert!(matches!(result, Err(TrainerError::EmptyEmbedding)));
        assert_eq!(store.total(), 3);
    }
}
