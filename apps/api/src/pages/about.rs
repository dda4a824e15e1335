use serde::Serialize;

use crate::content::models::{Award, Education, Profile, SkillCategory};
use crate::content::ContentStore;
use crate::motion::presets;
use crate::motion::Particle;

const FEATURED_SKILL_CATEGORIES: usize = 3;
const FEATURED_SKILLS_PER_CATEGORY: usize = 4;

const DEFAULT_COURSEWORK: &[&str] = &[
    "AI",
    "Machine Learning",
    "Operating Systems",
    "Cloud Computing",
    "Data Structures & Algorithms",
];

const DEFAULT_ACTIVITIES: &[&str] = &[
    "Facility Manager at Rec Center",
    "Volleyball Club",
    "VP at International Club",
];

/// Labelled lists pulled out of an education `details` string.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct EducationHighlights {
    pub coursework: Vec<String>,
    pub activities: Vec<String>,
    pub honors: Vec<String>,
}

/// Splits on commas, except thousands separators such as `$10,000`.
fn split_items(list: &str) -> Vec<String> {
    let chars: Vec<char> = list.chars().collect();
    let mut items = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let digit_before = i > 0 && chars[i - 1].is_ascii_digit();
        let digit_after = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if c == ',' && !(digit_before && digit_after) {
            items.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    items.push(current);

    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Returns the items of the `"<label>: a, b, c"` segment.
///
/// Segments are separated by `•`. Items are trimmed; empty items dropped.
pub fn labelled_items(details: &str, label: &str) -> Option<Vec<String>> {
    let prefix = format!("{label}:");
    details
        .split('•')
        .map(str::trim)
        .find_map(|segment| segment.strip_prefix(prefix.as_str()))
        .map(split_items)
}

fn or_defaults(found: Option<Vec<String>>, defaults: &[&str]) -> Vec<String> {
    found.unwrap_or_else(|| defaults.iter().map(|s| s.to_string()).collect())
}

/// Missing labels fall back to defaults; honors fall back to award titles.
pub fn education_highlights(
    education: Option<&Education>,
    awards: &[Award],
) -> EducationHighlights {
    let details = education.map(|e| e.details.as_str()).unwrap_or("");

    EducationHighlights {
        coursework: or_defaults(labelled_items(details, "Relevant Coursework"), DEFAULT_COURSEWORK),
        activities: or_defaults(labelled_items(details, "Activities"), DEFAULT_ACTIVITIES),
        honors: labelled_items(details, "Honors")
            .unwrap_or_else(|| awards.iter().map(|a| a.title.clone()).collect()),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub profile: Profile,
    pub featured_skills: Vec<String>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Education>,
    pub highlights: EducationHighlights,
    pub awards: Vec<Award>,
    pub particles: Vec<Particle>,
}

pub fn build_about(store: &ContentStore) -> AboutPage {
    let featured_skills = store
        .skills()
        .iter()
        .take(FEATURED_SKILL_CATEGORIES)
        .flat_map(|c| c.items.iter().take(FEATURED_SKILLS_PER_CATEGORY).cloned())
        .collect();

    AboutPage {
        profile: store.profile().clone(),
        featured_skills,
        skills: store.skills().to_vec(),
        education: store.education().to_vec(),
        highlights: education_highlights(store.education().first(), store.awards()),
        awards: store.awards().to_vec(),
        particles: presets::ABOUT.particles(),
    }
}
