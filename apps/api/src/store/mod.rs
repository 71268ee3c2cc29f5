// Profile store client. The only path by which profiles enter the service.
// Two backends implement ProfileStore: direct Postgres (PgProfileStore) and the
// managed backend's REST gateway (RestProfileStore). AppState holds an
// Arc<dyn ProfileStore> chosen at startup from config.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::models::Profile;

pub mod postgres;
pub mod rest;

pub use postgres::PgProfileStore;
pub use rest::RestProfileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile {0} not found")]
    NotFound(String),

    #[error("{count} profiles matched id {id}")]
    AmbiguousResult { id: String, count: usize },

    #[error("profile store is not configured")]
    ConfigMissing,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Read-only access to the `profiles` table.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Every profile, newest `created_at` first.
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError>;

    /// Exactly one profile by id. Zero matches is `NotFound`, several is `AmbiguousResult`.
    async fn get_profile(&self, id: &str) -> Result<Profile, StoreError>;
}

/// Loads the browse snapshot. A failing store yields an empty list and an
/// error log line; the caller always gets a collection to render.
pub async fn load_snapshot(store: &dyn ProfileStore) -> Vec<Profile> {
    match store.list_profiles().await {
        Ok(profiles) => {
            info!("Loaded {} profiles", profiles.len());
            profiles
        }
        Err(e) => {
            error!("Error fetching profiles: {e}");
            Vec::new()
        }
    }
}

/// Collapses a by-id result set to the single expected row.
pub(crate) fn expect_single(mut rows: Vec<Profile>, id: &str) -> Result<Profile, StoreError> {
    match rows.len() {
        0 => Err(StoreError::NotFound(id.to_string())),
        1 => Ok(rows.remove(0)),
        count => Err(StoreError::AmbiguousResult {
            id: id.to_string(),
            count,
        }),
    }
}
