use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{SortField, TagCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Search, tag-filter and sort inputs of one browse session.
///
/// Treated as a value: every change produces a new `QueryState` with fresh
/// tag sets, so `apply_query` only ever sees a snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub search: String,
    selected: [BTreeSet<String>; 4],
    pub sort: Option<SortField>,
    pub direction: SortDirection,
}

impl QueryState {
    pub fn selected(&self, category: TagCategory) -> &BTreeSet<String> {
        &self.selected[category.index()]
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    /// Adds `tag` to the category's selection if absent, removes it otherwise.
    pub fn with_tag_toggled(&self, category: TagCategory, tag: &str) -> Self {
        let mut next = self.clone();
        let set = &mut next.selected[category.index()];
        if !set.remove(tag) {
            set.insert(tag.to_string());
        }
        next
    }

    /// Column-header click: the active column flips direction, a new column starts ascending.
    pub fn with_sort_toggled(&self, field: SortField) -> Self {
        let mut next = self.clone();
        if self.sort == Some(field) {
            next.direction = self.direction.flipped();
        } else {
            next.sort = Some(field);
            next.direction = SortDirection::Asc;
        }
        next
    }

    pub fn with_direction(&self, direction: SortDirection) -> Self {
        Self {
            direction,
            ..self.clone()
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || self.selected.iter().any(|s| !s.is_empty())
    }

    /// Builds the query from `GET /api/profiles` parameters, in order.
    ///
    /// Tag parameters repeat, one value each (`skills=rust&skills=go`), and
    /// values are taken verbatim so tags containing commas or spaces still
    /// match. Each `sort` acts as a column-header click. `direction`, if
    /// given, is applied last. Unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, AppError> {
        let mut state = QueryState::default();
        let mut direction = None;

        for (key, value) in pairs {
            match key.as_str() {
                "search" => state = state.with_search(value.as_str()),
                "sort" => state = apply_sort_param(&state, value)?,
                "direction" => direction = Some(parse_direction(value)?),
                other => {
                    let Some(category) = tag_param(other) else {
                        continue;
                    };
                    if !value.is_empty() && !state.selected(category).contains(value) {
                        state = state.with_tag_toggled(category, value);
                    }
                }
            }
        }

        Ok(match direction {
            Some(direction) => state.with_direction(direction),
            None => state,
        })
    }
}

fn tag_param(key: &str) -> Option<TagCategory> {
    match key {
        "skills" => Some(TagCategory::Skills),
        "focus_areas" => Some(TagCategory::FocusAreas),
        "excellence" => Some(TagCategory::Excellence),
        "domains" => Some(TagCategory::Domains),
        _ => None,
    }
}

fn apply_sort_param(state: &QueryState, value: &str) -> Result<QueryState, AppError> {
    match value.trim() {
        "" | "none" => Ok(QueryState {
            sort: None,
            direction: SortDirection::Asc,
            ..state.clone()
        }),
        s => SortField::parse(s)
            .map(|field| state.with_sort_toggled(field))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown sort field '{s}'; expected years_experience or years_at_current_company"
                ))
            }),
    }
}

fn parse_direction(value: &str) -> Result<SortDirection, AppError> {
    match value.trim() {
        "" | "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        other => Err(AppError::Validation(format!(
            "Unknown sort direction '{other}'; expected asc or desc"
        ))),
    }
}
