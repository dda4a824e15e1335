use serde::Serialize;

use crate::catalog::{run_filter, ProjectQuery};
use crate::content::models::{Project, ProjectImage};
use crate::content::ContentStore;
use crate::motion::presets;
use crate::motion::Particle;
use crate::pages::cards::{
    live_affordance, project_cards, repo_affordance, LinkAffordance, ProjectCard,
    GRID_TECH_LIMIT,
};
use crate::pages::chrome::PageMeta;

// ────────────────────────────────────────────────────────────────────────────
// Listing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ProjectListing {
    pub query: String,
    pub selected_tags: Vec<String>,
    pub available_tags: Vec<String>,
    pub shown: usize,
    pub total: usize,
    /// "Showing 2 of 6 projects"
    pub results_label: String,
    pub has_active_filters: bool,
    pub filter_summary: Option<String>,
    pub projects: Vec<ProjectCard>,
    pub particles: Vec<Particle>,
}

pub fn build_project_listing(store: &ContentStore, query: &ProjectQuery) -> ProjectListing {
    let outcome = run_filter(store.projects(), query);

    ProjectListing {
        query: query.text.clone(),
        selected_tags: query.tags.iter().cloned().collect(),
        available_tags: store.available_tags().to_vec(),
        shown: outcome.shown,
        total: outcome.total,
        results_label: format!("Showing {} of {} projects", outcome.shown, outcome.total),
        has_active_filters: outcome.has_active_filters,
        filter_summary: outcome.summary,
        projects: project_cards(outcome.projects, GRID_TECH_LIMIT),
        particles: presets::PROJECTS.particles(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Detail
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Gallery {
    pub images: Vec<ProjectImage>,
    /// Prev/next controls and thumbnails only make sense with several images.
    pub navigable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub problem: String,
    pub solution: String,
    pub impact: String,
    pub tech: Vec<String>,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub live: LinkAffordance,
    pub repo: LinkAffordance,
    pub gallery: Gallery,
    pub back_href: &'static str,
}

impl ProjectDetail {
    fn from_project(project: &Project) -> Self {
        Self {
            slug: project.slug.clone(),
            title: project.title.clone(),
            summary: project.summary.clone(),
            problem: project.problem.clone(),
            solution: project.solution.clone(),
            impact: project.impact.clone(),
            tech: project.tech.clone(),
            highlights: project.highlights.clone(),
            tags: project.tags.clone(),
            live: live_affordance(project, "View Live Demo"),
            repo: repo_affordance(project, "View Source Code"),
            gallery: Gallery {
                images: project.images.clone(),
                navigable: project.images.len() > 1,
            },
            back_href: "/projects",
        }
    }
}

/// Detail view plus its metadata, or `None` when no project has this slug.
pub fn build_project_detail(store: &ContentStore, slug: &str) -> Option<(PageMeta, ProjectDetail)> {
    let project = store.project(slug)?;
    let meta = PageMeta {
        title: project.title.clone(),
        description: project.summary.clone(),
    };
    Some((meta, ProjectDetail::from_project(project)))
}
