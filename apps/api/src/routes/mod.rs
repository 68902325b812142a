pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::ats;
use crate::middleware::rate_limit;
use crate::resumes;
use crate::state::AppState;
use crate::suggest;

pub fn build_router(state: AppState) -> Router {
    // Suggestion routes sit behind the per-IP limiter; scoring and CRUD do
    // not, since they never call the paid provider.
    let suggest_routes = Router::new()
        .route("/api/v1/suggest", post(suggest::handlers::handle_suggest))
        .route_layer(from_fn_with_state(state.clone(), rate_limit::limit_by_ip));

    Router::new()
        .route("/health", get(health::health_handler))
        // ATS scoring API
        .route("/api/v1/ats/score", post(ats::handlers::handle_score))
        .route("/api/v1/ats/analyze", post(ats::handlers::handle_analyze))
        .route(
            "/api/v1/ats/score-file",
            post(ats::handlers::handle_score_file)
                .layer(DefaultBodyLimit::max(ats::handlers::MAX_UPLOAD_BYTES + 64 * 1024)),
        )
        // Resume store
        .route(
            "/api/v1/resumes",
            post(resumes::handlers::handle_create).get(resumes::handlers::handle_list),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handlers::handle_get)
                .put(resumes::handlers::handle_update)
                .delete(resumes::handlers::handle_delete),
        )
        .merge(suggest_routes)
        .with_state(state)
}
