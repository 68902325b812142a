use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::middleware::rate_limit::RateLimiter;
use crate::suggest::SuggestionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Kept on state so handlers can read tuning values without re-parsing
    /// the environment.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable suggestion backend. Default: GeminiProvider.
    pub suggester: Arc<dyn SuggestionProvider>,
    /// Per-IP limiter guarding the suggestion routes.
    pub rate_limiter: Arc<RateLimiter>,
}
