use std::sync::Arc;

use sqlx::PgPool;

use crate::generation::generator::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable content generation backend. Default: `LlmContentGenerator`.
    pub generator: Arc<dyn ContentGenerator>,
}
