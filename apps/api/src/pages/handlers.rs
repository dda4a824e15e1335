//! Axum route handlers for the page API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{ProjectQuery, ProjectQueryParams};
use crate::errors::AppError;
use crate::motion::presets::{DEFAULT_VIEWPORT, HERO_PARTICLES};
use crate::motion::{drift_field, Bounds, DriftParticle};
use crate::pages::about::{build_about, AboutPage};
use crate::pages::chrome::{build_chrome, PageMeta, PageResponse};
use crate::pages::contact::{build_contact, ContactPage};
use crate::pages::experience::{build_experience, ExperiencePage};
use crate::pages::home::{build_home, HomePage};
use crate::pages::projects::{
    build_project_detail, build_project_listing, ProjectDetail, ProjectListing,
};
use crate::state::AppState;

const PROJECTS_DESCRIPTION: &str = "A collection of my work showcasing technical skills, \
    problem-solving abilities, and passion for building impactful solutions";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ViewportParams {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct HeroParticlesResponse {
    pub bounds: Bounds,
    pub particles: Vec<DriftParticle>,
}

#[derive(Debug, Serialize)]
pub struct SlugListResponse {
    pub slugs: Vec<String>,
}

fn page<T: Serialize>(
    state: &AppState,
    path: &str,
    meta: PageMeta,
    content: T,
) -> Json<PageResponse<T>> {
    Json(PageResponse {
        meta,
        chrome: build_chrome(&state.store, path, Utc::now().year()),
        content,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/pages/home
pub async fn handle_home(State(state): State<AppState>) -> Json<PageResponse<HomePage>> {
    let meta = PageMeta::for_page(&state.store, None, None);
    page(&state, "/", meta, build_home(&state.store))
}

/// GET /api/v1/pages/projects?q=&tags=
pub async fn handle_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectQueryParams>,
) -> Json<PageResponse<ProjectListing>> {
    let query = ProjectQuery::from(params);
    let listing = build_project_listing(&state.store, &query);
    let meta = PageMeta::for_page(
        &state.store,
        Some("Projects"),
        Some(PROJECTS_DESCRIPTION),
    );
    page(&state, "/projects", meta, listing)
}

/// GET /api/v1/pages/projects/:slug
pub async fn handle_project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageResponse<ProjectDetail>>, AppError> {
    let (meta, detail) = build_project_detail(&state.store, &slug).ok_or_else(|| {
        warn!("Project lookup miss for slug '{slug}'");
        AppError::NotFound(format!("Project '{slug}' not found"))
    })?;
    Ok(page(&state, &format!("/projects/{slug}"), meta, detail))
}

/// GET /api/v1/pages/about
pub async fn handle_about(State(state): State<AppState>) -> Json<PageResponse<AboutPage>> {
    let meta = PageMeta::for_page(&state.store, Some("About"), None);
    page(&state, "/about", meta, build_about(&state.store))
}

/// GET /api/v1/pages/experience
pub async fn handle_experience(
    State(state): State<AppState>,
) -> Json<PageResponse<ExperiencePage>> {
    let meta = PageMeta::for_page(&state.store, Some("Experience"), None);
    page(&state, "/experience", meta, build_experience(&state.store))
}

/// GET /api/v1/pages/contact
pub async fn handle_contact(State(state): State<AppState>) -> Json<PageResponse<ContactPage>> {
    let meta = PageMeta::for_page(&state.store, Some("Contact"), None);
    page(&state, "/contact", meta, build_contact(&state.store))
}

/// GET /api/v1/projects/slugs
///
/// Every project slug, for pre-rendering detail pages.
pub async fn handle_project_slugs(State(state): State<AppState>) -> Json<SlugListResponse> {
    Json(SlugListResponse {
        slugs: state.store.slugs().into_iter().map(str::to_string).collect(),
    })
}

/// GET /api/v1/particles/hero?width=&height=
///
/// Hero drift field scaled to the caller's viewport.
pub async fn handle_hero_particles(
    Query(params): Query<ViewportParams>,
) -> Result<Json<HeroParticlesResponse>, AppError> {
    let bounds = Bounds::new(
        params.width.unwrap_or(DEFAULT_VIEWPORT.width),
        params.height.unwrap_or(DEFAULT_VIEWPORT.height),
    );
    if !bounds.is_valid() {
        return Err(AppError::Validation(
            "width and height must be positive, finite numbers".to_string(),
        ));
    }

    Ok(Json(HeroParticlesResponse {
        bounds,
        particles: drift_field(HERO_PARTICLES, bounds),
    }))
}
