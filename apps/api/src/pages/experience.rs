use serde::Serialize;

use crate::content::models::ExperienceEntry;
use crate::content::ContentStore;
use crate::motion::presets;
use crate::motion::Particle;
use crate::pages::stats::{quick_stats, Stat};

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub entry: ExperienceEntry,
    /// "Oct 2022 - Jun 2025", collapsed to one date when start equals end.
    pub period: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperiencePage {
    pub timeline: Vec<TimelineEntry>,
    pub stats: Vec<Stat>,
    pub particles: Vec<Particle>,
}

pub fn period(start: &str, end: &str) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start} - {end}")
    }
}

pub fn build_experience(store: &ContentStore) -> ExperiencePage {
    let timeline = store
        .experience()
        .iter()
        .map(|e| TimelineEntry {
            period: period(&e.start, &e.end),
            entry: e.clone(),
        })
        .collect();

    ExperiencePage {
        timeline,
        stats: quick_stats(store),
        particles: presets::EXPERIENCE.particles(),
    }
}
