use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable content; cloned handles share one allocation.
    pub store: Arc<ContentStore>,
    pub config: Config,
}
