use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::catalog::tag_universe;
use crate::content::models::{
    Activity, Award, Education, ExperienceEntry, PortfolioContent, Profile, Project,
    SiteConfig, SkillCategory, Social,
};
use crate::content::validation::validate_content;
use crate::errors::ContentError;

/// Content document compiled into the binary.
const BUNDLED_CONTENT: &str = include_str!("../../content/portfolio.json");

/// Immutable, validated content backing every page.
/// Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ContentStore {
    content: PortfolioContent,
    slug_index: HashMap<String, usize>,
    tags: Vec<String>,
}

impl ContentStore {
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: PortfolioContent = serde_json::from_str(raw)?;
        Self::from_content(content)
    }

    /// Validates invariants and precomputes the slug index and tag universe.
    pub fn from_content(content: PortfolioContent) -> Result<Self, ContentError> {
        validate_content(&content)?;

        let slug_index = content
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug.clone(), i))
            .collect();
        let tags = tag_universe(&content.projects);

        info!(
            "Content store ready: {} projects, {} tags, {} experience entries",
            content.projects.len(),
            tags.len(),
            content.experience.len()
        );

        Ok(Self {
            content,
            slug_index,
            tags,
        })
    }

    pub fn site(&self) -> &SiteConfig {
        &self.content.site
    }

    pub fn profile(&self) -> &Profile {
        &self.content.profile
    }

    pub fn socials(&self) -> &[Social] {
        &self.content.socials
    }

    pub fn skills(&self) -> &[SkillCategory] {
        &self.content.skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.content.projects
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.content.experience
    }

    pub fn awards(&self) -> &[Award] {
        &self.content.awards
    }

    pub fn education(&self) -> &[Education] {
        &self.content.education
    }

    pub fn activities(&self) -> &[Activity] {
        &self.content.activities
    }

    /// Sorted, deduplicated union of all project tags.
    pub fn available_tags(&self) -> &[String] {
        &self.tags
    }

    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.slug_index
            .get(slug)
            .map(|&i| &self.content.projects[i])
    }

    pub fn slugs(&self) -> Vec<&str> {
        self.content.projects.iter().map(|p| p.slug.as_str()).collect()
    }

    /// The first `n` projects in source order.
    pub fn featured_projects(&self, n: usize) -> &[Project] {
        let end = n.min(self.content.projects.len());
        &self.content.projects[..end]
    }

    /// Every skill item across all categories, in category order.
    pub fn tech_stack(&self) -> Vec<&str> {
        self.content
            .skills
            .iter()
            .flat_map(|c| c.items.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::content::test_support::{make_content, make_project};

    #[test]
    fn test_bundled_content_loads() {
        let store = ContentStore::bundled().unwrap();
        assert_eq!(store.projects().len(), 6);
        assert_eq!(store.profile().name, "Ansh Raj Suryavanshi");
        assert!(!store.available_tags().is_empty());
    }

    #[test]
    fn test_lookup_by_slug() {
        let store = ContentStore::bundled().unwrap();
        let project = store.project("rec-it-app").expect("rec-it-app exists");
        assert_eq!(project.title, "REC-IT Recreation Center App");
        assert!(store.project("does-not-exist").is_none());
    }

    #[test]
    fn test_optional_links_deserialize_from_null() {
        let store = ContentStore::bundled().unwrap();
        let thesis = store.project("llm-reasoning-system").unwrap();
        assert!(thesis.repo_url.is_none());
        assert!(thesis.live_url.is_none());
    }

    #[test]
    fn test_available_tags_match_universe() {
        let store = ContentStore::bundled().unwrap();
        assert_eq!(store.available_tags(), tag_universe(store.projects()).as_slice());
        let mut sorted = store.available_tags().to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, store.available_tags());
    }

    #[test]
    fn test_featured_projects_clamped_to_len() {
        let store =
            ContentStore::from_content(make_content(vec![make_project("only", &[])])).unwrap();
        assert_eq!(store.featured_projects(3).len(), 1);
    }

    #[test]
    fn test_tech_stack_flattens_skill_categories() {
        let store = ContentStore::bundled().unwrap();
        let total: usize = store.skills().iter().map(|c| c.items.len()).sum();
        let stack = store.tech_stack();
        assert_eq!(stack.len(), total);
        assert_eq!(stack.first(), Some(&"C"));
    }

    #[test]
    fn test_duplicate_slug_fails_load() {
        let result = ContentStore::from_content(make_content(vec![
            make_project("same", &[]),
            make_project("same", &[]),
        ]));
        assert!(matches!(result, Err(ContentError::DuplicateSlug(_))));
    }

    #[test]
    fn test_malformed_json_fails_load() {
        assert!(matches!(
            ContentStore::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_path() {
        let content = make_content(vec![make_project("from-disk", &["robotics"])]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&content).unwrap().as_bytes())
            .unwrap();

        let store = ContentStore::from_path(file.path()).unwrap();
        assert_eq!(store.slugs(), vec!["from-disk"]);
        assert_eq!(store.available_tags(), ["robotics".to_string()]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ContentStore::from_path(Path::new("/nonexistent/portfolio.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/portfolio.json"));
    }
}
