mod ats;
mod config;
mod db;
mod errors;
mod middleware;
mod models;
mod resumes;
mod routes;
mod sanitize;
mod scoring;
mod state;
mod suggest;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::middleware::rate_limit::RateLimiter;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggest::GeminiProvider;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize suggestion provider
    let suggester = Arc::new(GeminiProvider::new(config.gemini_api_key.clone()));
    info!("Suggestion provider initialized (model: {})", suggest::MODEL);

    // Per-IP limiter for the suggestion routes
    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limit_max_requests,
        config.rate_limit_window_secs,
    ));
    info!(
        "Rate limiter: {} requests / {}s per IP",
        config.rate_limit_max_requests, config.rate_limit_window_secs
    );

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        suggester,
        rate_limiter,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        // ConnectInfo feeds the rate limiter its client addresses.
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
