use std::collections::HashSet;

use crate::content::models::PortfolioContent;
use crate::errors::ContentError;

/// Checks the load-time invariants of the content document:
/// every project has a non-empty, unique slug and at least one image.
///
/// Returns the first violation found, in source order.
pub fn validate_content(content: &PortfolioContent) -> Result<(), ContentError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(content.projects.len());

    for (index, project) in content.projects.iter().enumerate() {
        if project.slug.trim().is_empty() {
            return Err(ContentError::EmptySlug(index));
        }
        if !seen.insert(project.slug.as_str()) {
            return Err(ContentError::DuplicateSlug(project.slug.clone()));
        }
        if project.images.is_empty() {
            return Err(ContentError::MissingImages(project.slug.clone()));
        }
    }

    Ok(())
}
