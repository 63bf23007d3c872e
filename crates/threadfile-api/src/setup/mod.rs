//! Application setup and initialization

pub mod routes;
pub mod server;
pub mod services;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use threadfile_core::Config;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    threadfile_infra::init_telemetry("threadfile-api", config.environment(), config.log_format())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    crate::error::configure_error_details(&config);

    build_app(config)
}

/// Build services and routes without touching global state (telemetry,
/// error rendering).
pub fn build_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let state = services::initialize_services(&config)?;
    let router = routes::setup_routes(&config, state.clone())?;
    Ok((state, router))
}
