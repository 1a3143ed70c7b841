//! HTTP facade
//!
//! axum router exposing the query service: a root status endpoint, a health
//! probe, and the query endpoint, all behind permissive CORS.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::service::{QueryRequest, QueryResponse, QueryService};

/// Service name reported by the root endpoint
const SERVICE_NAME: &str = "Invoice NLQ Analytics API";

/// Application state shared with all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QueryService>,
}

impl AppState {
    pub fn new(service: QueryService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Root status payload
#[derive(Serialize)]
pub struct RootStatus {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub groq_configured: bool,
    pub database_configured: bool,
}

/// Health probe payload
#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub groq_configured: bool,
    pub database_configured: bool,
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/query", post(query))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// Root status endpoint
async fn root(State(state): State<AppState>) -> Json<RootStatus> {
    Json(RootStatus {
        message: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        groq_configured: state.service.groq_configured(),
        database_configured: state.service.database_configured(),
    })
}

/// Health probe
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        groq_configured: state.service.groq_configured(),
        database_configured: state.service.database_configured(),
    })
}

/// Answer a natural-language question.
///
/// Every handled outcome is a 200; failures travel in the response body's
/// `error` field. Malformed JSON never reaches this handler.
async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryResponse> {
    Json(state.service.answer(request.question).await)
}
