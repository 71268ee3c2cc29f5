use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a status object with service version and which backend settings are present.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let store = if state.config.database_url.is_some() {
        "postgres"
    } else {
        "rest"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "talent-api",
        "store": store,
        "supabase_configured": state.config.supabase.is_some()
    }))
}
