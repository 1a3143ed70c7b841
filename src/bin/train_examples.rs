//! Seed the example store with the invoicing schema corpus
//!
//! Registers the five table DDL statements and the nine documentation
//! strings in the pgvector-backed store so retrieval-augmented SQL
//! generation has something to ground on. One-shot; reruns append.
//!
//! Unlike the server, both the API key and the database are required here.
//!
//! Run with:
//!   DATABASE_URL="postgresql:///invoices" GROQ_API_KEY=... \
//!   OPENAI_API_KEY=... cargo run --bin train_examples

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

use invoice_nlq::ai::GroqClient;
use invoice_nlq::config::AppConfig;
use invoice_nlq::training::{Embedder, HttpEmbedder, PgVectorExampleStore, Trainer};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    dotenvy::dotenv().ok();

    info!("Starting example store training...");

    let config = AppConfig::from_env();

    let api_key = config
        .groq_api_key
        .clone()
        .context("GROQ_API_KEY must be set")?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL must be set")?;

    let provider =
        GroqClient::new(api_key, config.model.clone()).context("Failed to build Groq client")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    info!("Connected to database");

    let embedder = HttpEmbedder::from_env().context("Failed to configure embedder")?;
    info!(
        "Embedding with {} ({}-dim)",
        embedder.model_name(),
        embedder.dimension()
    );

    let store = PgVectorExampleStore::new(pool, Arc::new(embedder));
    store
        .ensure_schema()
        .await
        .context("Failed to prepare example schema")?;

    let trainer = Trainer::new(Arc::new(store), Arc::new(provider));
    let report = trainer.run().await.context("Training failed")?;

    info!(
        "Training completed successfully: {} DDL statements, {} documentation entries",
        report.ddl_count, report.documentation_count
    );

    Ok(())
}
