use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use threadfile_core::AppError;

use crate::constants::{FILE_NOT_FOUND, FILE_REMOVED};
use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

#[tracing::instrument(skip(state), fields(operation = "delete_file"))]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> Result<Json<DeleteResponse>, HttpAppError> {
    if !state.ingestion.remove(&thread_id).await? {
        return Err(AppError::NotFound(FILE_NOT_FOUND.to_string()).into());
    }

    tracing::info!(thread_id = %thread_id, "File removed");

    Ok(Json(DeleteResponse {
        success: true,
        message: FILE_REMOVED,
    }))
}
