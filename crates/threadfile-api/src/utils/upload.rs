//! Multipart parsing for the upload endpoint

use axum::extract::multipart::{Field, Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::{Bytes, BytesMut};
use threadfile_core::constants::{MAX_UPLOAD_SIZE_BYTES, MAX_UPLOAD_SIZE_MB};
use threadfile_core::AppError;
use threadfile_processing::ValidationError;

use crate::constants::{FILE_FIELD, THREAD_ID_FIELD};

/// The file part of an upload form.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    /// At most `MAX_UPLOAD_SIZE_BYTES` of the file.
    pub data: Bytes,
    /// Full size of the file part as received.
    pub size: usize,
}

/// Fields of an upload form, in whatever order they arrived.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub thread_id: Option<String>,
}

/// Rejection for a body cut off by the transport limit. The request's
/// `Content-Length` stands in for the file size when present.
pub fn body_too_large(content_length: Option<usize>) -> AppError {
    let message = match content_length {
        Some(size) => ValidationError::FileTooLarge {
            size,
            max: MAX_UPLOAD_SIZE_BYTES,
        }
        .to_string(),
        None => format!("File size exceeds {}MB limit", MAX_UPLOAD_SIZE_MB),
    };
    AppError::PayloadTooLarge(message)
}

fn multipart_error(err: MultipartError, content_length: Option<usize>) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        body_too_large(content_length)
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

/// Read a file part chunk by chunk. Every byte is counted; only the first
/// `MAX_UPLOAD_SIZE_BYTES` are kept.
async fn read_file_part(
    mut field: Field<'_>,
    content_length: Option<usize>,
) -> Result<(Bytes, usize), AppError> {
    let mut buffer = BytesMut::new();
    let mut size = 0usize;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| multipart_error(e, content_length))?
    {
        size += chunk.len();
        let room = MAX_UPLOAD_SIZE_BYTES.saturating_sub(buffer.len());
        buffer.extend_from_slice(&chunk[..chunk.len().min(room)]);
    }

    Ok((buffer.freeze(), size))
}

/// Read the `file` and `threadId` fields from a multipart body.
///
/// A `file` part without a file name is treated as absent. A second file
/// part is rejected and unknown fields are skipped.
pub async fn extract_upload_form(
    mut multipart: Multipart,
    content_length: Option<usize>,
) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, content_length))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == FILE_FIELD {
            let Some(file_name) = field.file_name().map(|s| s.to_string()) else {
                continue;
            };
            if form.file.is_some() {
                return Err(AppError::InvalidInput(
                    "Multiple file fields are not allowed; send exactly one field named 'file'"
                        .to_string(),
                ));
            }

            let (data, size) = read_file_part(field, content_length).await?;
            form.file = Some(UploadedFile {
                file_name,
                data,
                size,
            });
        } else if field_name == THREAD_ID_FIELD {
            form.thread_id = Some(
                field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, content_length))?,
            );
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_too_large_reports_content_length() {
        let err = body_too_large(Some(70 * 1024 * 1024));
        assert_eq!(
            err.to_string(),
            "File too large: File size exceeds 25MB limit. Current size: 70.00MB"
        );

        let err = body_too_large(None);
        assert!(matches!(err, AppError::PayloadTooLarge(ref msg) if msg == "File size exceeds 25MB limit"));
    }
}
