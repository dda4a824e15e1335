use serde::Serialize;

use crate::content::models::Activity;
use crate::content::ContentStore;
use crate::motion::presets::{DEFAULT_VIEWPORT, HERO_PARTICLES};
use crate::motion::{drift_field, DriftParticle};
use crate::pages::cards::{project_cards, ProjectCard, FEATURED_TECH_LIMIT};
use crate::pages::stats::{quick_stats, Stat};

/// Projects promoted on the landing page.
const FEATURED_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub name: String,
    pub headline: String,
    pub avatar_url: String,
    pub resume_url: String,
    pub work_anchor: &'static str,
    pub particles: Vec<DriftParticle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub hero: Hero,
    pub featured_projects: Vec<ProjectCard>,
    pub stats: Vec<Stat>,
    pub latest_activity: Vec<Activity>,
    pub tech_marquee: Vec<String>,
}

pub fn build_home(store: &ContentStore) -> HomePage {
    let profile = store.profile();

    HomePage {
        hero: Hero {
            name: profile.name.clone(),
            headline: profile.about_short.clone(),
            avatar_url: profile.avatar_url.clone(),
            resume_url: profile.resume_url.clone(),
            work_anchor: "#projects",
            particles: drift_field(HERO_PARTICLES, DEFAULT_VIEWPORT),
        },
        featured_projects: project_cards(
            store.featured_projects(FEATURED_COUNT),
            FEATURED_TECH_LIMIT,
        ),
        stats: quick_stats(store),
        latest_activity: store.activities().to_vec(),
        tech_marquee: store.tech_stack().into_iter().map(str::to_string).collect(),
    }
}
