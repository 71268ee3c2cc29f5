use anyhow::{Context, Result};
use tracing::warn;

/// Connection details for the managed backend (REST gateway + edge functions).
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Base URL with any trailing slash removed, so paths can be appended directly.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Application configuration loaded from environment variables.
///
/// Only `PORT` is validated at startup. The backend credentials are optional
/// here and reported as `ConfigMissing` by whichever request needs them.
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase: Option<SupabaseConfig>,
    /// When set, profiles are read straight from Postgres instead of the REST gateway.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let supabase = match (optional_env("SUPABASE_URL"), optional_env("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(SupabaseConfig { url, anon_key }),
            (url, key) => {
                if url.is_some() || key.is_some() {
                    warn!("SUPABASE_URL and SUPABASE_ANON_KEY must be set together; ignoring partial configuration");
                }
                None
            }
        };

        Ok(Config {
            supabase,
            database_url: optional_env("DATABASE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
