use anyhow::anyhow;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::browse::selection::{DetailState, DetailView};
use crate::browse::{BrowseSession, QueryState, SortDirection, TagVocabulary};
use crate::errors::AppError;
use crate::models::{Profile, SortField};
use crate::state::AppState;
use crate::store::load_snapshot;

#[derive(Debug, Serialize)]
pub struct SortInfo {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub profiles: Vec<Profile>,
    pub shown: usize,
    pub total: usize,
    pub has_active_filters: bool,
    pub vocabulary: TagVocabulary,
    pub sort: SortInfo,
    pub drawer: Option<Profile>,
}

impl From<BrowseSession> for BrowseResponse {
    fn from(session: BrowseSession) -> Self {
        let summary = session.summary();
        let (field, direction) = session.sort_label();
        BrowseResponse {
            has_active_filters: session.query().has_active_filters(),
            vocabulary: session.vocabulary().clone(),
            drawer: session.drawer().profile().cloned(),
            profiles: session.visible().to_vec(),
            shown: summary.shown,
            total: summary.total,
            sort: SortInfo { field, direction },
        }
    }
}

/// GET /api/profiles
///
/// Query: `search`, repeated `skills` / `focus_areas` / `excellence` /
/// `domains`, `sort`, `direction`, and `selected` (profile id for the drawer).
/// A store outage yields an empty table (`total: 0`), never an error.
pub async fn handle_list_profiles(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<BrowseResponse>, AppError> {
    let query = QueryState::from_pairs(&params)?;
    let selected = params
        .iter()
        .rev()
        .find(|(key, _)| key == "selected")
        .map(|(_, id)| id.as_str());
    let profiles = load_snapshot(state.store.as_ref()).await;

    let mut session = BrowseSession::with_query(profiles, query);
    if let Some(id) = selected.filter(|id| !id.is_empty()) {
        if !session.select(id) {
            debug!("Selected profile {id} is not in the visible set; drawer stays closed");
        }
    }

    Ok(Json(session.into()))
}

/// GET /api/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Profile>, AppError> {
    let mut view = DetailView::new(id);

    match view.load(state.store.as_ref()).await {
        DetailState::Ready(profile) => Ok(Json(profile.clone())),
        DetailState::NotFound => Err(AppError::NotFound("Profile not found".to_string())),
        DetailState::Loading => Err(AppError::Internal(anyhow!(
            "profile view finished without a result"
        ))),
    }
}
