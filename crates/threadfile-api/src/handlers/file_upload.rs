use std::sync::Arc;

use axum::extract::{multipart::MultipartRejection, Multipart, State};
use axum::http::{header::CONTENT_LENGTH, HeaderMap};
use axum::Json;
use serde::Serialize;
use threadfile_core::{AppError, FileSummary};

use crate::constants::{NO_FILE_UPLOADED, THREAD_ID_REQUIRED};
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub file: FileSummary,
}

/// Accept a document for a conversation and return a preview of its text.
#[tracing::instrument(skip_all, fields(operation = "upload_file"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    // A request that is not multipart carries no file.
    let multipart =
        multipart.map_err(|_| AppError::InvalidInput(NO_FILE_UPLOADED.to_string()))?;

    let content_length = headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());

    let form = extract_upload_form(multipart, content_length).await?;

    let file = form
        .file
        .ok_or_else(|| AppError::InvalidInput(NO_FILE_UPLOADED.to_string()))?;

    let thread_id = form
        .thread_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::InvalidInput(THREAD_ID_REQUIRED.to_string()))?;

    let summary = state
        .ingestion
        .ingest(&thread_id, file.data, &file.file_name, file.size)
        .await?;

    Ok(Json(UploadResponse {
        success: true,
        file: summary,
    }))
}
