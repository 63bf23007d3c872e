//! Route configuration and setup

mod health;

use crate::constants::API_BASE;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use threadfile_core::constants::MAX_REQUEST_BODY_BYTES;
use threadfile_core::Config;
use threadfile_infra::request_id_middleware;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Largest request body accepted on the upload route. Oversized files below
/// this ceiling are counted and rejected by the validator with their size.
pub const UPLOAD_BODY_LIMIT: usize = MAX_REQUEST_BODY_BYTES;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    // Server-level concurrency limit to protect against resource exhaustion under extreme load
    let http_concurrency_limit = config.http_concurrency_limit().max(1);
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        upload_body_limit = UPLOAD_BODY_LIMIT,
        "HTTP limits configured"
    );

    let app = Router::new()
        .nest(API_BASE, api_routes())
        .merge(health_routes())
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state);

    Ok(app)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/upload",
            post(handlers::file_upload::upload_file)
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/file/{thread_id}",
            get(handlers::file_get::get_file).delete(handlers::file_delete::delete_file),
        )
        .route(
            "/file/{thread_id}/content",
            get(handlers::file_get::get_file_content),
        )
}

fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
