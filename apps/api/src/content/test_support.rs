//! Fixture builders shared by unit tests across modules.

use crate::content::models::{PortfolioContent, Profile, Project, ProjectImage, SiteConfig};

pub fn make_project(slug: &str, tags: &[&str]) -> Project {
    Project {
        slug: slug.to_string(),
        title: format!("Project {slug}"),
        summary: String::new(),
        problem: String::new(),
        solution: String::new(),
        impact: String::new(),
        tech: vec![],
        highlights: vec![],
        repo_url: None,
        live_url: None,
        images: vec![ProjectImage {
            src: format!("/{slug}.jpg"),
            alt: slug.to_string(),
        }],
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn make_content(projects: Vec<Project>) -> PortfolioContent {
    PortfolioContent {
        site: SiteConfig {
            name: "Test Person".to_string(),
            description: "Test site".to_string(),
            url: "https://example.test".to_string(),
            og_image: "https://example.test/og.jpg".to_string(),
        },
        profile: Profile {
            name: "Test Person".to_string(),
            title: "Engineer".to_string(),
            location: "Nowhere".to_string(),
            graduation_date: "2030".to_string(),
            about_short: "Short".to_string(),
            about_long: "Long".to_string(),
            email: "test@example.test".to_string(),
            resume_url: "/resume.pdf".to_string(),
            avatar_url: "/avatar.jpg".to_string(),
        },
        socials: vec![],
        skills: vec![],
        projects,
        experience: vec![],
        awards: vec![],
        education: vec![],
        activities: vec![],
    }
}
