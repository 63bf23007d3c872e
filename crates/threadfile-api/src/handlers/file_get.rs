use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use threadfile_core::{AppError, FileContent, StoredFileMetadata};

use crate::constants::FILE_NOT_FOUND;
use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FileMetadataResponse {
    pub success: bool,
    pub file: StoredFileMetadata,
}

#[derive(Debug, Serialize)]
pub struct FileContentResponse {
    pub success: bool,
    #[serde(flatten)]
    pub content: FileContent,
}

#[tracing::instrument(skip(state), fields(operation = "get_file"))]
pub async fn get_file(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> Result<Json<FileMetadataResponse>, HttpAppError> {
    let file = state
        .ingestion
        .summary(&thread_id)
        .await?
        .ok_or_else(|| AppError::NotFound(FILE_NOT_FOUND.to_string()))?;

    Ok(Json(FileMetadataResponse {
        success: true,
        file,
    }))
}

/// Full extracted text, for downstream consumers of the conversation.
#[tracing::instrument(skip(state), fields(operation = "get_file_content"))]
pub async fn get_file_content(
    State(state): State<Arc<AppState>>,
    Path(thread_id): Path<String>,
) -> Result<Json<FileContentResponse>, HttpAppError> {
    let content = state
        .ingestion
        .content(&thread_id)
        .await?
        .ok_or_else(|| AppError::NotFound(FILE_NOT_FOUND.to_string()))?;

    tracing::debug!(text_length = content.content.chars().count(), "Serving file content");

    Ok(Json(FileContentResponse {
        success: true,
        content,
    }))
}
