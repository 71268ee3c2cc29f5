use serde::Serialize;
use tracing::{error, warn};

use crate::models::Profile;
use crate::store::{ProfileStore, StoreError};

/// Inline drawer over the table. Open always carries its profile, so a closed
/// drawer can never show a leftover one.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open(Profile),
}

impl DrawerState {
    pub fn open(&mut self, profile: Profile) {
        *self = DrawerState::Open(profile);
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            DrawerState::Open(p) => Some(p),
            DrawerState::Closed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "profile", rename_all = "snake_case")]
pub enum DetailState {
    Loading,
    Ready(Profile),
    NotFound,
}

/// The dedicated profile page. Always does its own single-record fetch,
/// even when the table already holds the profile.
///
/// The view owns its state; dropping it mid-fetch drops the pending result
/// with it.
#[derive(Debug)]
pub struct DetailView {
    id: String,
    state: DetailState,
}

impl DetailView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: DetailState::Loading,
        }
    }

    /// Fetches the profile and records the outcome. Every store failure
    /// renders as not found.
    pub async fn load(&mut self, store: &dyn ProfileStore) -> &DetailState {
        self.state = match store.get_profile(&self.id).await {
            Ok(profile) => DetailState::Ready(profile),
            Err(StoreError::NotFound(_)) => DetailState::NotFound,
            Err(e @ StoreError::AmbiguousResult { .. }) => {
                warn!("Error fetching profile: {e}");
                DetailState::NotFound
            }
            Err(e) => {
                error!("Error fetching profile {}: {e}", self.id);
                DetailState::NotFound
            }
        };
        &self.state
    }
}
