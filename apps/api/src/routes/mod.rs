pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::browse::handlers as browse;
use crate::ingest::handlers as ingest;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Browse + detail views
        .route("/api/profiles", get(browse::handle_list_profiles))
        .route("/api/profiles/:id", get(browse::handle_get_profile))
        // Ingestion proxy
        .route("/api/ingest", post(ingest::handle_ingest))
        .with_state(state)
}
