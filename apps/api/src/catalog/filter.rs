//! Project filter — free-text search combined with OR-semantics tag facets.
//!
//! Pure functions over the static project list. Source order is always
//! preserved; the filter never re-sorts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::models::Project;

// ────────────────────────────────────────────────────────────────────────────
// Query
// ────────────────────────────────────────────────────────────────────────────

/// Raw query-string parameters for the project listing.
/// `tags` is a comma-separated list, e.g. `?q=react&tags=web,ai`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectQueryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

/// Normalized filter input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectQuery {
    pub text: String,
    pub tags: BTreeSet<String>,
}

impl ProjectQuery {
    pub fn new(text: impl Into<String>, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            text: text.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.text.is_empty() || !self.tags.is_empty()
    }
}

impl From<ProjectQueryParams> for ProjectQuery {
    fn from(params: ProjectQueryParams) -> Self {
        let tags = params
            .tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        Self::new(params.q.unwrap_or_default(), tags)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Predicates
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive substring match against title, summary, or any tech entry.
/// An empty needle matches everything.
pub fn matches_text(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.summary.to_lowercase().contains(&needle)
        || project.tech.iter().any(|t| t.to_lowercase().contains(&needle))
}

/// True when no tags are selected or the project carries at least one of them.
pub fn matches_tags(project: &Project, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || selected.iter().any(|tag| project.has_tag(tag))
}

/// Ordered subsequence of `projects` satisfying both predicates.
pub fn filter_projects<'a>(projects: &'a [Project], query: &ProjectQuery) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| matches_text(p, &query.text) && matches_tags(p, &query.tags))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Outcome
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome<'a> {
    pub projects: Vec<&'a Project>,
    pub shown: usize,
    pub total: usize,
    pub has_active_filters: bool,
    /// Human-readable description of the active filters, `None` when inactive.
    pub summary: Option<String>,
}

pub fn run_filter<'a>(projects: &'a [Project], query: &ProjectQuery) -> FilterOutcome<'a> {
    let matched = filter_projects(projects, query);
    FilterOutcome {
        shown: matched.len(),
        total: projects.len(),
        has_active_filters: query.is_active(),
        summary: describe_filters(query),
        projects: matched,
    }
}

/// `Search: "react" • 2 tags selected`
fn describe_filters(query: &ProjectQuery) -> Option<String> {
    let mut parts = Vec::new();
    if !query.text.is_empty() {
        parts.push(format!("Search: \"{}\"", query.text));
    }
    match query.tags.len() {
        0 => {}
        1 => parts.push("1 tag selected".to_string()),
        n => parts.push(format!("{n} tags selected")),
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::ContentStore;
    use crate::content::test_support::make_project;

    fn slugs(found: &[&Project]) -> Vec<String> {
        found.iter().map(|p| p.slug.clone()).collect()
    }

    fn bundled() -> ContentStore {
        ContentStore::bundled().expect("bundled content must load")
    }

    fn text(q: &str) -> ProjectQuery {
        ProjectQuery::new(q, Vec::<String>::new())
    }

    #[test]
    fn test_empty_query_returns_full_list_in_order() {
        let store = bundled();
        let all = filter_projects(store.projects(), &ProjectQuery::default());
        let expected: Vec<String> = store.projects().iter().map(|p| p.slug.clone()).collect();
        assert_eq!(slugs(&all), expected);
    }

    #[test]
    fn test_result_is_order_preserving_subsequence() {
        let store = bundled();
        let queries = [
            text("a"),
            ProjectQuery::new("", ["web", "ai"]),
            ProjectQuery::new("python", ["ml"]),
            text("zzz"),
        ];

        for query in &queries {
            let found = filter_projects(store.projects(), query);
            let positions: Vec<usize> = found
                .iter()
                .map(|p| {
                    store
                        .projects()
                        .iter()
                        .position(|q| q.slug == p.slug)
                        .unwrap()
                })
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "strictly increasing positions for {query:?}, got {positions:?}"
            );
        }
    }

    #[test]
    fn test_unknown_tag_yields_empty() {
        let store = bundled();
        let found = filter_projects(store.projects(), &ProjectQuery::new("", ["quantum"]));
        assert!(found.is_empty());
    }

    #[test]
    fn test_react_search_matches_react_projects() {
        let store = bundled();
        let found = filter_projects(store.projects(), &text("React"));
        assert_eq!(slugs(&found), vec!["rec-it-app", "transcripto-app", "songchat"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = bundled();
        let upper = filter_projects(store.projects(), &text("SUPABASE"));
        let lower = filter_projects(store.projects(), &text("supabase"));
        assert_eq!(slugs(&upper), slugs(&lower));
        assert_eq!(slugs(&upper), vec!["rec-it-app", "gigs-for-pi"]);
    }

    #[test]
    fn test_search_matches_summary_only_text() {
        let projects = vec![
            make_project("x", &[]),
            Project {
                summary: "Realtime telemetry pipeline".to_string(),
                ..make_project("y", &[])
            },
        ];
        let found = filter_projects(&projects, &text("telemetry"));
        assert_eq!(slugs(&found), vec!["y"]);
    }

    #[test]
    fn test_tags_use_or_semantics() {
        let store = bundled();
        let query = ProjectQuery::new("", ["hackathon", "music"]);
        let found = filter_projects(store.projects(), &query);
        assert_eq!(slugs(&found), vec!["road-entertainment-system", "songchat"]);
    }

    #[test]
    fn test_text_and_tags_combine_with_and() {
        let store = bundled();
        let found = filter_projects(store.projects(), &ProjectQuery::new("react", ["ai"]));
        assert_eq!(slugs(&found), vec!["transcripto-app"]);
    }

    #[test]
    fn test_params_parse_comma_separated_tags() {
        let query = ProjectQuery::from(ProjectQueryParams {
            q: Some("rust".to_string()),
            tags: Some("web, ai,,web".to_string()),
        });
        assert_eq!(query.text, "rust");
        assert_eq!(query.tags.iter().cloned().collect::<Vec<_>>(), vec!["ai", "web"]);
    }

    #[test]
    fn test_missing_params_give_inactive_query() {
        let query = ProjectQuery::from(ProjectQueryParams::default());
        assert!(!query.is_active());
    }

    #[test]
    fn test_outcome_counts_and_summary() {
        let store = bundled();
        let outcome = run_filter(store.projects(), &ProjectQuery::new("react", ["web", "ai"]));
        assert_eq!(outcome.shown, outcome.projects.len());
        assert_eq!(outcome.total, store.projects().len());
        assert!(outcome.has_active_filters);
        assert_eq!(
            outcome.summary.as_deref(),
            Some("Search: \"react\" • 2 tags selected")
        );
    }

    #[test]
    fn test_outcome_without_filters_has_no_summary() {
        let store = bundled();
        let outcome = run_filter(store.projects(), &ProjectQuery::default());
        assert!(!outcome.has_active_filters);
        assert!(outcome.summary.is_none());
        assert_eq!(outcome.shown, outcome.total);
    }

    #[test]
    fn test_no_matches_reports_zero() {
        let store = bundled();
        let outcome = run_filter(store.projects(), &ProjectQuery::new("", ["nonexistent"]));
        assert_eq!(outcome.shown, 0);
        assert_eq!(outcome.summary.as_deref(), Some("1 tag selected"));
    }
}
