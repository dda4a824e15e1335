use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub url: String,
    pub og_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub graduation_date: String,
    pub about_short: String,
    pub about_long: String,
    pub email: String,
    pub resume_url: String,
    pub avatar_url: String,
}

impl Profile {
    /// First character of every word in the name, e.g. "ARS".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Social {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl Social {
    pub fn is_email(&self) -> bool {
        self.url.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub problem: String,
    pub solution: String,
    pub impact: String,
    pub tech: Vec<String>,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    pub images: Vec<ProjectImage>,
    pub tags: Vec<String>,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Cover image. Load-time validation guarantees at least one image.
    pub fn cover(&self) -> Option<&ProjectImage> {
        self.images.first()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub start: String,
    pub end: String,
    pub location: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
    pub details: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Achievement,
    Contribution,
    Writing,
    Experience,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub description: String,
    pub date: String,
    pub kind: ActivityKind,
}

/// Raw deserialized content document, prior to validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub site: SiteConfig,
    pub profile: Profile,
    #[serde(default)]
    pub socials: Vec<Social>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}
