use serde::Serialize;

use crate::content::models::{Project, ProjectImage};

/// Tech badges shown on a projects-grid card before collapsing into "+N".
pub const GRID_TECH_LIMIT: usize = 4;

/// Featured cards on the landing page are narrower.
pub const FEATURED_TECH_LIMIT: usize = 3;

/// How an optional project link is presented.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LinkAffordance {
    Available { label: String, url: String },
    Disabled { label: String },
    Hidden,
}

/// Source links degrade to a disabled "Confidential" affordance.
pub fn repo_affordance(project: &Project, label: &str) -> LinkAffordance {
    match &project.repo_url {
        Some(url) => LinkAffordance::Available {
            label: label.to_string(),
            url: url.clone(),
        },
        None => LinkAffordance::Disabled {
            label: "Confidential".to_string(),
        },
    }
}

/// Live demo links are simply hidden when absent.
pub fn live_affordance(project: &Project, label: &str) -> LinkAffordance {
    match &project.live_url {
        Some(url) => LinkAffordance::Available {
            label: label.to_string(),
            url: url.clone(),
        },
        None => LinkAffordance::Hidden,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub slug: String,
    pub href: String,
    pub title: String,
    pub summary: String,
    pub cover: Option<ProjectImage>,
    /// First two words of the lead highlight, e.g. "89% recommendation".
    pub impact_badge: Option<String>,
    pub tech: Vec<String>,
    pub tech_overflow: usize,
    pub tags: Vec<String>,
    pub repo: LinkAffordance,
    pub live: LinkAffordance,
    /// Stagger delay for the card's entrance, in seconds.
    pub entrance_delay: f64,
}

impl ProjectCard {
    pub fn from_project(project: &Project, position: usize, tech_limit: usize) -> Self {
        let impact_badge = project.highlights.first().map(|h| {
            h.split_whitespace()
                .take(2)
                .collect::<Vec<_>>()
                .join(" ")
        });

        Self {
            slug: project.slug.clone(),
            href: format!("/projects/{}", project.slug),
            title: project.title.clone(),
            summary: project.summary.clone(),
            cover: project.cover().cloned(),
            impact_badge,
            tech: project.tech.iter().take(tech_limit).cloned().collect(),
            tech_overflow: project.tech.len().saturating_sub(tech_limit),
            tags: project.tags.clone(),
            repo: repo_affordance(project, "Code"),
            live: live_affordance(project, "Live"),
            entrance_delay: position as f64 * 0.1,
        }
    }
}

pub fn project_cards<'a>(
    projects: impl IntoIterator<Item = &'a Project>,
    tech_limit: usize,
) -> Vec<ProjectCard> {
    projects
        .into_iter()
        .enumerate()
        .map(|(i, p)| ProjectCard::from_project(p, i, tech_limit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_missing_repo_is_confidential() {
        let store = ContentStore::bundled().unwrap();
        let card = ProjectCard::from_project(store.project("songchat").unwrap(), 0, GRID_TECH_LIMIT);
        assert_eq!(
            card.repo,
            LinkAffordance::Disabled {
                label: "Confidential".to_string()
            }
        );
        assert!(matches!(card.live, LinkAffordance::Available { .. }));
    }

    #[test]
    fn test_missing_live_is_hidden() {
        let store = ContentStore::bundled().unwrap();
        let project = store.project("road-entertainment-system").unwrap();
        let card = ProjectCard::from_project(project, 0, GRID_TECH_LIMIT);
        assert_eq!(card.live, LinkAffordance::Hidden);
        assert_eq!(
            card.repo,
            LinkAffordance::Available {
                label: "Code".to_string(),
                url: "https://github.com/AnshLaw/RoadEntertainment".to_string()
            }
        );
    }

    #[test]
    fn test_tech_collapses_after_four() {
        let store = ContentStore::bundled().unwrap();
        let card = ProjectCard::from_project(store.project("songchat").unwrap(), 0, GRID_TECH_LIMIT);
        assert_eq!(card.tech, vec!["React", "Node.js", "Socket.io", "Spotify Web API"]);
        assert_eq!(card.tech_overflow, 3);
    }

    #[test]
    fn test_featured_cards_show_three_tech() {
        let store = ContentStore::bundled().unwrap();
        let cards = project_cards(store.project("songchat"), FEATURED_TECH_LIMIT);
        assert_eq!(cards[0].tech, vec!["React", "Node.js", "Socket.io"]);
        assert_eq!(cards[0].tech_overflow, 4);
    }

    #[test]
    fn test_impact_badge_and_delay() {
        let store = ContentStore::bundled().unwrap();
        let project = store.project("road-entertainment-system").unwrap();
        let card = ProjectCard::from_project(project, 3, GRID_TECH_LIMIT);
        assert_eq!(card.impact_badge.as_deref(), Some("89% recommendation"));
        assert!((card.entrance_delay - 0.3).abs() < 1e-9);
        assert_eq!(card.href, "/projects/road-entertainment-system");
    }

    #[test]
    fn test_affordance_serializes_with_state_tag() {
        let json = serde_json::to_value(LinkAffordance::Hidden).unwrap();
        assert_eq!(json["state"], "hidden");
    }
}
