use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One candidate record as stored in the `profiles` table.
///
/// Read-only from this service's point of view: the store assigns `id` and the
/// timestamps, and nothing here writes a profile back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: String,
    pub linkedin_url: Option<String>,
    pub full_name: Option<String>,
    pub location_resolved: Option<String>,
    pub current_company: Option<String>,
    pub current_title: Option<String>,
    pub years_experience: Option<f64>,
    pub years_at_current_company: Option<f64>,
    pub skills_tags: Option<Vec<String>>,
    pub focus_area_tags: Option<Vec<String>>,
    pub excellence_tags: Option<Vec<String>>,
    pub domain_tags: Option<Vec<String>>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The four independent tag families a profile carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    Skills,
    FocusAreas,
    Excellence,
    Domains,
}

impl TagCategory {
    pub const ALL: [TagCategory; 4] = [
        TagCategory::Skills,
        TagCategory::FocusAreas,
        TagCategory::Excellence,
        TagCategory::Domains,
    ];

    /// Position in `ALL`; used to index per-category arrays.
    pub fn index(self) -> usize {
        match self {
            TagCategory::Skills => 0,
            TagCategory::FocusAreas => 1,
            TagCategory::Excellence => 2,
            TagCategory::Domains => 3,
        }
    }
}

/// Numeric columns the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    YearsExperience,
    YearsAtCurrentCompany,
}

impl SortField {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "years_experience" => Some(SortField::YearsExperience),
            "years_at_current_company" => Some(SortField::YearsAtCurrentCompany),
            _ => None,
        }
    }
}

impl Profile {
    /// Tag list for a category; an absent list reads as empty.
    pub fn tags(&self, category: TagCategory) -> &[String] {
        let tags = match category {
            TagCategory::Skills => &self.skills_tags,
            TagCategory::FocusAreas => &self.focus_area_tags,
            TagCategory::Excellence => &self.excellence_tags,
            TagCategory::Domains => &self.domain_tags,
        };
        tags.as_deref().unwrap_or(&[])
    }

    /// Value used when sorting by `field`.
    ///
    /// An absent value sorts as `0.0`, not first or last. Profiles with no
    /// recorded experience therefore sit next to genuine zeroes.
    pub fn sort_key(&self, field: SortField) -> f64 {
        let value = match field {
            SortField::YearsExperience => self.years_experience,
            SortField::YearsAtCurrentCompany => self.years_at_current_company,
        };
        match value {
            Some(v) => v,
            None => 0.0,
        }
    }

    /// The four free-text fields searched by the browse view.
    pub fn searchable_fields(&self) -> [Option<&str>; 4] {
        [
            self.full_name.as_deref(),
            self.current_company.as_deref(),
            self.current_title.as_deref(),
            self.location_resolved.as_deref(),
        ]
    }
}
