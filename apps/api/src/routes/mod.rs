pub mod health;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::pages::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Anything that is not an API route is looked up as a static asset.
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Page API
        .route("/api/v1/pages/home", get(handlers::handle_home))
        .route("/api/v1/pages/projects", get(handlers::handle_projects))
        .route(
            "/api/v1/pages/projects/:slug",
            get(handlers::handle_project_detail),
        )
        .route("/api/v1/pages/about", get(handlers::handle_about))
        .route("/api/v1/pages/experience", get(handlers::handle_experience))
        .route("/api/v1/pages/contact", get(handlers::handle_contact))
        // Supporting data
        .route(
            "/api/v1/projects/slugs",
            get(handlers::handle_project_slugs),
        )
        .route(
            "/api/v1/particles/hero",
            get(handlers::handle_hero_particles),
        )
        .fallback_service(assets)
        .with_state(state)
}
