//! Natural-language invoice analytics
//!
//! Turns questions about an invoicing database into real SQL results: a
//! Groq-hosted model translates the question into PostgreSQL against a fixed
//! schema description, the query runs against the application database, and
//! both the SQL and the rows come back as JSON.
//!
//! # Architecture
//!
//! ```text
//! POST /api/query {"question": ...}
//!       │
//!       ▼
//! ┌─────────────────────────────────────────┐
//! │  SqlGenerator (Groq chat completion)    │
//! │  schema context + question → SQL text   │
//! └─────────────────────────────────────────┘
//!       │
//!       ▼
//! ┌─────────────────────────────────────────┐
//! │  SqlExecutor (Postgres)                 │
//! │  rows → [{column: number | string}]     │
//! └─────────────────────────────────────────┘
//!       │
//!       ▼
//! {"question", "sql", "results" | "error"}
//! ```
//!
//! Every failure along the way folds into the response's `error` field; the
//! endpoint itself never fails. A separate offline trainer ([`training`])
//! seeds a pgvector store with the schema DDL and business documentation.

pub mod ai;
pub mod api;
pub mod config;
pub mod database;
pub mod schema;
pub mod service;
pub mod training;

pub use ai::{CompletionProvider, GroqClient, SqlGenerator};
pub use api::{create_router, AppState};
pub use config::AppConfig;
pub use database::SqlExecutor;
pub use service::{QueryRequest, QueryResponse, QueryService};
pub use training::{ExampleStore, PgVectorExampleStore, Trainer};
