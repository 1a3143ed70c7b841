//! HTTP server for natural-language invoice analytics
//!
//! Accepts questions over HTTP, generates SQL through Groq, executes it
//! against Postgres and returns SQL plus rows as JSON. Starts fine without
//! an API key or database; the gaps are reported per request.
//!
//! Run with:
//!   GROQ_API_KEY=... DATABASE_URL="postgresql:///invoices" cargo run --bin nlq_server

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use invoice_nlq::ai::{GroqClient, SqlGenerator};
use invoice_nlq::api::{create_router, AppState};
use invoice_nlq::config::AppConfig;
use invoice_nlq::database::{connect_lazy_pool, mask_database_url, PoolConfig, SqlExecutor};
use invoice_nlq::schema::schema_context;
use invoice_nlq::service::QueryService;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("invoice_nlq=info,nlq_server=info,tower_http=debug")
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    let generator = match &config.groq_api_key {
        Some(api_key) => {
            let client = GroqClient::new(api_key.clone(), config.model.clone())
                .context("Failed to build Groq client")?;
            let generator = SqlGenerator::new(Arc::new(client), schema_context(&config.currency));
            info!("Generating SQL with {}", generator.model_name());
            Some(generator)
        }
        None => {
            warn!("GROQ_API_KEY not set. SQL generation will not work.");
            None
        }
    };

    let executor = match &config.database_url {
        Some(database_url) => {
            let pool = connect_lazy_pool(database_url, &PoolConfig::default()).with_context(
                || format!("Invalid DATABASE_URL: {}", mask_database_url(database_url)),
            )?;
            Some(SqlExecutor::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set");
            None
        }
    };

    let service = QueryService::new(generator, executor);

    info!("Starting invoice NLQ service on port {}...", config.port);
    info!("Groq configured: {}", service.groq_configured());
    info!("Database configured: {}", service.database_configured());

    let app = create_router(AppState::new(service));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app).await?;

    Ok(())
}
