//! pgvector-backed example store

use async_trait::async_trait;
use pgvector::Vector;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use super::{ExampleStore, SharedEmbedder, TrainerError};

/// Example kind stored for DDL statements
const KIND_DDL: &str = "ddl";

/// Example kind stored for documentation strings
const KIND_DOCUMENTATION: &str = "documentation";

/// Stores training examples in Postgres with pgvector embeddings.
pub struct PgVectorExampleStore {
    pool: PgPool,
    embedder: SharedEmbedder,
}

impl PgVectorExampleStore {
    /// Create a store over the given pool and embedder
    pub fn new(pool: PgPool, embedder: SharedEmbedder) -> Self {
        Self { pool, embedder }
    }

    /// Create the vector extension and the examples table when missing.
    ///
    /// Creating the extension needs sufficient privileges; a failure here
    /// aborts the training run like any other store error.
    pub async fn ensure_schema(&self) -> Result<(), TrainerError> {
        info!("Ensuring training example schema exists");

        sqlx::query("CREATE EXTENSION IF NOT EXISTS vector")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS nlq_training_examples (
                id UUID PRIMARY KEY,
                kind TEXT NOT NULL,
                content TEXT NOT NULL,
                embedding vector,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Embed the content and insert one example row
    async fn insert(&self, kind: &str, content: &str) -> Result<(), TrainerError> {
        let embedding = self.embedder.embed(content).await?;

        debug!(
            "Storing {} example ({} chars, {} dims)",
            kind,
            content.len(),
            embedding.len()
        );

        sqlx::query(
            r#"
            INSERT INTO nlq_training_examples (id, kind, content, embedding)
            VALUES ($1, $2, $3, $4::vector)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(kind)
        .bind(content)
        .bind(Vector::from(embedding))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ExampleStore for PgVectorExampleStore {
    async fn add_ddl(&self, ddl: &str) -> Result<(), TrainerError> {
        self.insert(KIND_DDL, ddl).await
    }

    async fn add_documentation(&self, doc: &str) -> Result<(), TrainerError> {
        self.insert(KIND_DOCUMENTATION, doc).await
    }
}
