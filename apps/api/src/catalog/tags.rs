use std::collections::BTreeSet;

use crate::content::models::Project;

/// Union of every project's tags, deduplicated and sorted lexicographically.
pub fn tag_universe(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
