use std::sync::Arc;

use crate::config::Config;
use crate::ingest::IngestClient;
use crate::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only profile source. Postgres when DATABASE_URL is set, REST gateway otherwise.
    pub store: Arc<dyn ProfileStore>,
    pub ingest: IngestClient,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(
        store: impl ProfileStore + 'static,
        supabase: Option<crate::config::SupabaseConfig>,
    ) -> Self {
        let config = Config {
            supabase: supabase.clone(),
            database_url: None,
            port: 0,
            rust_log: "debug".to_string(),
        };
        AppState {
            store: Arc::new(store),
            ingest: IngestClient::new(reqwest::Client::new(), supabase),
            config,
        }
    }
}
