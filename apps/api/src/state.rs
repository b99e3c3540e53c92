use std::sync::Arc;

use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document store holding submitted resumes. Postgres when `DATABASE_URL`
    /// is set, otherwise an in-process map.
    pub store: Arc<dyn ResumeStore>,
}
