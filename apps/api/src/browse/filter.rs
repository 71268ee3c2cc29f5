use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::browse::query::{QueryState, SortDirection};
use crate::models::{Profile, TagCategory};

/// Derives the visible list from the full snapshot.
///
/// Pure and recomputed from scratch on every change:
/// 1. text search over name, company, title and location (case-insensitive substring)
/// 2. tag filters: OR within a category, AND across active categories
/// 3. stable sort on the chosen numeric field, absent values counting as zero
///
/// With no sort field the input order (newest first) is kept.
pub fn apply_query(profiles: &[Profile], query: &QueryState) -> Vec<Profile> {
    let needle = query.search.to_lowercase();

    let mut visible: Vec<Profile> = profiles
        .iter()
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .filter(|p| {
            TagCategory::ALL
                .iter()
                .all(|&category| matches_category(p, category, query.selected(category)))
        })
        .cloned()
        .collect();

    if let Some(field) = query.sort {
        // sort_by is stable; descending reverses the comparison, not the output.
        // partial_cmp keeps -0.0 and 0.0 tied, so they hold snapshot order.
        visible.sort_by(|a, b| {
            let (ka, kb) = (a.sort_key(field), b.sort_key(field));
            let ord = match query.direction {
                SortDirection::Asc => ka.partial_cmp(&kb),
                SortDirection::Desc => kb.partial_cmp(&ka),
            };
            ord.unwrap_or(Ordering::Equal)
        });
    }

    visible
}

/// `needle` must already be lowercased.
fn matches_search(profile: &Profile, needle: &str) -> bool {
    profile
        .searchable_fields()
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_category(profile: &Profile, category: TagCategory, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    profile
        .tags(category)
        .iter()
        .any(|tag| selected.contains(tag))
}

/// Sorted, de-duplicated union of one category's tags across `profiles`.
pub fn tag_vocabulary(profiles: &[Profile], category: TagCategory) -> Vec<String> {
    profiles
        .iter()
        .flat_map(|p| p.tags(category).iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Selectable filter values for all four categories.
///
/// Always computed from the loaded snapshot, never the filtered view, so
/// selecting a filter doesn't hide the other options.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagVocabulary {
    pub skills: Vec<String>,
    pub focus_areas: Vec<String>,
    pub excellence: Vec<String>,
    pub domains: Vec<String>,
}

impl TagVocabulary {
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        Self {
            skills: tag_vocabulary(profiles, TagCategory::Skills),
            focus_areas: tag_vocabulary(profiles, TagCategory::FocusAreas),
            excellence: tag_vocabulary(profiles, TagCategory::Excellence),
            domains: tag_vocabulary(profiles, TagCategory::Domains),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::fixtures::{blank, tags};
    use crate::models::SortField;

    fn ids(profiles: &[Profile]) -> Vec<&str> {
        profiles.iter().map(|p| p.id.as_str()).collect()
    }

    /// Newest-first snapshot as the store would return it.
    fn snapshot() -> Vec<Profile> {
        let mut a = blank("a");
        a.full_name = Some("Ada Lovelace".to_string());
        a.current_company = Some("Analytical Engines".to_string());
        a.location_resolved = Some("London, UK".to_string());
        a.years_experience = Some(12.0);
        a.years_at_current_company = Some(3.0);
        a.skills_tags = tags(&["math", "rust"]);
        a.domain_tags = tags(&["fintech"]);

        let mut b = blank("b");
        b.full_name = Some("Grace Hopper".to_string());
        b.current_title = Some("Rear Admiral".to_string());
        b.years_experience = Some(30.0);
        b.skills_tags = tags(&["cobol"]);
        b.focus_area_tags = tags(&["compilers"]);
        b.domain_tags = tags(&["defense"]);

        let mut c = blank("c");
        c.full_name = Some("Linus".to_string());
        c.current_company = Some("Linux Foundation".to_string());
        c.skills_tags = tags(&["c", "rust"]);
        c.focus_area_tags = tags(&["kernels"]);

        let mut d = blank("d");
        d.current_title = Some("Staff Engineer".to_string());
        d.years_experience = Some(3.0);
        d.domain_tags = tags(&["fintech", "defense"]);

        let e = blank("e");

        vec![a, b, c, d, e]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let profiles = snapshot();
        let out = apply_query(&profiles, &QueryState::default());
        assert_eq!(out, profiles);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let profiles = snapshot();
        // "lin" hits "Linus" (name), "Linux Foundation" (company) and nothing in title.
        let out = apply_query(&profiles, &QueryState::default().with_search("LIN"));
        assert_eq!(ids(&out), ["c"]);

        let out = apply_query(&profiles, &QueryState::default().with_search("london"));
        assert_eq!(ids(&out), ["a"]);

        let out = apply_query(&profiles, &QueryState::default().with_search("engineer"));
        assert_eq!(ids(&out), ["d"]);
    }

    #[test]
    fn test_search_results_contain_term() {
        let profiles = snapshot();
        for term in ["a", "ER", "ux", "zzz", "admiral"] {
            let needle = term.to_lowercase();
            for p in apply_query(&profiles, &QueryState::default().with_search(term)) {
                assert!(
                    p.searchable_fields()
                        .iter()
                        .flatten()
                        .any(|f| f.to_lowercase().contains(&needle)),
                    "{} matched {term} without containing it",
                    p.id
                );
            }
        }
    }

    #[test]
    fn test_search_never_matches_absent_fields() {
        let profiles = snapshot();
        let out = apply_query(&profiles, &QueryState::default().with_search("e"));
        assert!(!ids(&out).contains(&"e"));
    }

    #[test]
    fn test_tags_or_within_category() {
        let profiles = snapshot();
        let q = QueryState::default()
            .with_tag_toggled(TagCategory::Skills, "cobol")
            .with_tag_toggled(TagCategory::Skills, "c");
        assert_eq!(ids(&apply_query(&profiles, &q)), ["b", "c"]);
    }

    #[test]
    fn test_tags_and_across_categories() {
        let profiles = snapshot();
        let q = QueryState::default()
            .with_tag_toggled(TagCategory::Skills, "rust")
            .with_tag_toggled(TagCategory::Domains, "fintech");
        assert_eq!(ids(&apply_query(&profiles, &q)), ["a"]);
    }

    #[test]
    fn test_tag_law_holds_for_every_profile() {
        let profiles = snapshot();
        let q = QueryState::default()
            .with_tag_toggled(TagCategory::Skills, "rust")
            .with_tag_toggled(TagCategory::Skills, "cobol")
            .with_tag_toggled(TagCategory::Domains, "defense");
        let filtered = apply_query(&profiles, &q);
        let out = ids(&filtered);

        for p in &profiles {
            let hits = |cat: TagCategory| p.tags(cat).iter().any(|t| q.selected(cat).contains(t));
            let expected = hits(TagCategory::Skills) && hits(TagCategory::Domains);
            assert_eq!(out.contains(&p.id.as_str()), expected, "profile {}", p.id);
        }
    }

    #[test]
    fn test_untagged_profile_excluded_by_active_category() {
        let profiles = snapshot();
        let q = QueryState::default().with_tag_toggled(TagCategory::FocusAreas, "kernels");
        let out = apply_query(&profiles, &q);
        assert_eq!(ids(&out), ["c"]);
    }

    #[test]
    fn test_sort_absent_counts_as_zero_and_is_stable() {
        let profiles = snapshot();
        // years_experience: a=12, b=30, c=None, d=3, e=None
        let q = QueryState::default().with_sort_toggled(SortField::YearsExperience);
        assert_eq!(ids(&apply_query(&profiles, &q)), ["c", "e", "d", "a", "b"]);

        let q = q.with_sort_toggled(SortField::YearsExperience);
        assert_eq!(q.direction, SortDirection::Desc);
        assert_eq!(ids(&apply_query(&profiles, &q)), ["b", "a", "d", "c", "e"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let profiles = snapshot();
        let q = QueryState::default().with_sort_toggled(SortField::YearsAtCurrentCompany);
        let once = apply_query(&profiles, &q);
        let twice = apply_query(&once, &q);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_desc_reverses_distinct_keys_only() {
        let profiles = snapshot();
        let asc = QueryState::default().with_sort_toggled(SortField::YearsAtCurrentCompany);
        let desc = asc.with_sort_toggled(SortField::YearsAtCurrentCompany);

        // Only "a" has a value (3); the rest tie at zero and keep snapshot order.
        assert_eq!(ids(&apply_query(&profiles, &asc)), ["b", "c", "d", "e", "a"]);
        assert_eq!(ids(&apply_query(&profiles, &desc)), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_negative_zero_ties_with_absent_values() {
        let mut x = blank("x");
        x.years_experience = Some(-0.0);
        let mut y = blank("y");
        y.years_experience = Some(1.0);
        let profiles = vec![blank("w"), x, y, blank("z")];

        let asc = QueryState::default().with_sort_toggled(SortField::YearsExperience);
        assert_eq!(ids(&apply_query(&profiles, &asc)), ["w", "x", "z", "y"]);

        let desc = asc.with_sort_toggled(SortField::YearsExperience);
        assert_eq!(ids(&apply_query(&profiles, &desc)), ["y", "w", "x", "z"]);
    }

    #[test]
    fn test_sort_applies_after_filtering() {
        let profiles = snapshot();
        let q = QueryState::default()
            .with_tag_toggled(TagCategory::Domains, "fintech")
            .with_tag_toggled(TagCategory::Domains, "defense")
            .with_sort_toggled(SortField::YearsExperience);
        assert_eq!(ids(&apply_query(&profiles, &q)), ["d", "a", "b"]);
    }

    #[test]
    fn test_vocabulary_sorted_unique() {
        let profiles = snapshot();
        assert_eq!(
            tag_vocabulary(&profiles, TagCategory::Skills),
            ["c", "cobol", "math", "rust"]
        );
        assert_eq!(
            tag_vocabulary(&profiles, TagCategory::Domains),
            ["defense", "fintech"]
        );
        assert!(tag_vocabulary(&profiles, TagCategory::Excellence).is_empty());
    }

    #[test]
    fn test_vocabulary_of_empty_snapshot() {
        assert_eq!(TagVocabulary::from_profiles(&[]), TagVocabulary::default());
    }
}
