//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Run an async check with timeout; returns "healthy", "timeout", or "{prefix}: {error}".
async fn run_check<F, E>(timeout: Duration, f: F, error_prefix: &str) -> String
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match tokio::time::timeout(timeout, f).await {
        Ok(Ok(())) => "healthy".to_string(),
        Ok(Err(e)) => format!("{}: {}", error_prefix, e),
        Err(_) => "timeout".to_string(),
    }
}

#[derive(serde::Serialize)]
pub(super) struct ReadinessResponse {
    pub status: &'static str,
    pub store: String,
}

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - the file store can serve requests.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.ingestion.store().clone();
    let store_status = run_check(
        CHECK_TIMEOUT,
        async move { store.health_check().await },
        "unhealthy",
    )
    .await;

    if store_status == "healthy" {
        (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready",
                store: store_status,
            }),
        )
    } else {
        tracing::error!(store = %store_status, "File store readiness check failed");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: "not_ready",
                store: store_status,
            }),
        )
    }
}
