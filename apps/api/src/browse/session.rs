use serde::Serialize;

use crate::browse::filter::{apply_query, TagVocabulary};
use crate::browse::query::{QueryState, SortDirection};
use crate::browse::selection::DrawerState;
use crate::models::{Profile, SortField};

/// "Showing {shown} of {total} profiles".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
}

/// Table view model: the loaded snapshot plus everything derived from it.
///
/// `visible` is derived once from the full snapshot and the query; a new
/// query means a new session, so the view is never patched in place.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    profiles: Vec<Profile>,
    vocabulary: TagVocabulary,
    query: QueryState,
    visible: Vec<Profile>,
    drawer: DrawerState,
}

impl BrowseSession {
    pub fn with_query(profiles: Vec<Profile>, query: QueryState) -> Self {
        let vocabulary = TagVocabulary::from_profiles(&profiles);
        let visible = apply_query(&profiles, &query);
        Self {
            profiles,
            vocabulary,
            query,
            visible,
            drawer: DrawerState::Closed,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn visible(&self) -> &[Profile] {
        &self.visible
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    pub fn drawer(&self) -> &DrawerState {
        &self.drawer
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            shown: self.visible.len(),
            total: self.profiles.len(),
        }
    }

    /// Opens the drawer on a visible row. Returns `false` if no visible profile has `id`.
    pub fn select(&mut self, id: &str) -> bool {
        match self.visible.iter().find(|p| p.id == id) {
            Some(profile) => {
                self.drawer.open(profile.clone());
                true
            }
            None => false,
        }
    }

    pub fn sort_label(&self) -> (Option<SortField>, SortDirection) {
        (self.query.sort, self.query.direction)
    }
}
