mod browse;
mod config;
mod db;
mod errors;
mod ingest;
mod models;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::ingest::IngestClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{PgProfileStore, ProfileStore, RestProfileStore};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent API v{}", env!("CARGO_PKG_VERSION"));

    if config.supabase.is_none() {
        warn!("SUPABASE_URL / SUPABASE_ANON_KEY not set; ingestion requests will fail with 500");
    }

    let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

    let store: Arc<dyn ProfileStore> = match &config.database_url {
        Some(url) => {
            info!("Profile store: PostgreSQL");
            Arc::new(PgProfileStore::new(create_pool(url)?))
        }
        None => {
            info!("Profile store: REST gateway");
            Arc::new(RestProfileStore::new(http.clone(), config.supabase.clone()))
        }
    };

    let ingest = IngestClient::new(http, config.supabase.clone());

    let state = AppState {
        store,
        ingest,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
