//! Runtime configuration
//!
//! All settings come from environment variables, optionally loaded from a
//! .env file by the binaries. There are no module-level globals: the binaries
//! build an `AppConfig` once at startup and pass it to whatever needs it.

/// Default chat-completion model on Groq.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default display currency for invoice amounts.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Application configuration assembled from the environment.
///
/// A missing API key or database URL is not an error: the service starts
/// anyway and reports the gap per request through its configuration flags.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub groq_api_key: Option<String>,
    pub database_url: Option<String>,
    pub model: String,
    pub port: u16,
    pub currency: String,
}

impl AppConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            groq_api_key: env_non_empty("GROQ_API_KEY"),
            database_url: env_non_empty("DATABASE_URL")
                .map(|url| normalize_database_url(&url)),
            model: std::env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            currency: std::env::var("INVOICE_CURRENCY")
                .unwrap_or_else(|_| DEFAULT_CURRENCY.to_string()),
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Normalize a database URL to the plain `postgresql://` form.
///
/// A driver-qualified scheme such as `postgresql+psycopg://` or
/// `postgresql+asyncpg://` loses its `+driver` suffix. URLs without a suffix
/// pass through unchanged.
pub fn normalize_database_url(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => match scheme.split_once('+') {
            Some((base, _driver)) => format!("{}://{}", base, rest),
            None => url.to_string(),
        },
        None => url.to_string(),
    }
}
