use std::collections::BTreeSet;

use serde::Serialize;

use crate::content::ContentStore;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub description: String,
}

fn stat(value: usize, label: &str, description: &str) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}

/// Distinct technologies named across skills and project stacks,
/// compared case-insensitively.
pub fn distinct_technologies(store: &ContentStore) -> usize {
    store
        .tech_stack()
        .into_iter()
        .chain(store.projects().iter().flat_map(|p| p.tech.iter().map(String::as_str)))
        .map(str::to_lowercase)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Headline numbers, derived from the content store rather than hard-coded.
pub fn quick_stats(store: &ContentStore) -> Vec<Stat> {
    let hackathon_wins = store
        .projects()
        .iter()
        .filter(|p| p.has_tag("hackathon"))
        .count();

    vec![
        stat(
            store.projects().len(),
            "Projects Built",
            "Full-stack applications and machine learning models",
        ),
        stat(
            distinct_technologies(store),
            "Technologies",
            "Languages, frameworks and platforms used across projects",
        ),
        stat(
            store.experience().len(),
            "Roles",
            "Professional and competition experience",
        ),
        stat(
            hackathon_wins,
            "Hackathon Wins",
            "Competition projects that took first place",
        ),
        stat(
            store.awards().len(),
            "Awards & Honors",
            "Scholarships, honor societies and recognitions",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_follow_content() {
        let store = ContentStore::bundled().unwrap();
        let stats = quick_stats(&store);
        let by_label = |label: &str| {
            stats
                .iter()
                .find(|s| s.label == label)
                .map(|s| s.value.clone())
                .unwrap()
        };
        assert_eq!(by_label("Projects Built"), "6");
        assert_eq!(by_label("Hackathon Wins"), "1");
        assert_eq!(by_label("Roles"), "2");
        assert_eq!(by_label("Awards & Honors"), "6");
    }

    #[test]
    fn test_technologies_deduplicate_case_insensitively() {
        let store = ContentStore::bundled().unwrap();
        let naive = store.tech_stack().len()
            + store.projects().iter().map(|p| p.tech.len()).sum::<usize>();
        // "React", "Python", "MongoDB" … appear in both skills and projects
        assert!(distinct_technologies(&store) < naive);
    }
}
