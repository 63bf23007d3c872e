use std::sync::Arc;

use bytes::Bytes;
use threadfile_core::{file_extension, DecodedDocument, FileType};
use tokio::sync::Semaphore;

use super::format::content_matches;
use super::{DocxExtractor, ExtractError, PdfExtractor, TextExtractor};

/// Decode failures. `Display` renders the client-facing message; the
/// extractor error stays in the source chain for logging.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Unsupported file type: {0}. Only PDF and DOCX are supported.")]
    UnsupportedFormat(String),

    #[error("Failed to parse PDF file")]
    Pdf(#[source] ExtractError),

    #[error("Failed to parse DOCX file")]
    Docx(#[source] ExtractError),

    #[error("File content does not match its .{extension} extension")]
    FormatMismatch { extension: String },
}

impl DecodeError {
    fn extraction(file_type: FileType, source: ExtractError) -> Self {
        match file_type {
            FileType::Pdf => DecodeError::Pdf(source),
            FileType::Docx => DecodeError::Docx(source),
        }
    }
}

/// Extension-dispatched document decoder.
///
/// Extraction runs on the blocking pool. When built with a decode limit,
/// a semaphore permit is held for the whole extraction.
#[derive(Clone)]
pub struct FormatDecoder {
    pdf: Arc<dyn TextExtractor>,
    docx: Arc<dyn TextExtractor>,
    verify_magic_bytes: bool,
    permits: Option<Arc<Semaphore>>,
}

impl Default for FormatDecoder {
    fn default() -> Self {
        Self::new(Arc::new(PdfExtractor), Arc::new(DocxExtractor))
    }
}

impl FormatDecoder {
    pub fn new(pdf: Arc<dyn TextExtractor>, docx: Arc<dyn TextExtractor>) -> Self {
        Self {
            pdf,
            docx,
            verify_magic_bytes: false,
            permits: None,
        }
    }

    /// Reject content whose leading bytes do not match the extension.
    pub fn with_magic_byte_check(mut self, enabled: bool) -> Self {
        self.verify_magic_bytes = enabled;
        self
    }

    /// Bound the number of extractions running at once.
    pub fn with_max_concurrent(mut self, limit: Option<usize>) -> Self {
        self.permits = limit.filter(|&n| n > 0).map(|n| Arc::new(Semaphore::new(n)));
        self
    }

    fn extractor_for(&self, file_type: FileType) -> Arc<dyn TextExtractor> {
        match file_type {
            FileType::Pdf => Arc::clone(&self.pdf),
            FileType::Docx => Arc::clone(&self.docx),
        }
    }

    /// Extract the text of `data`, dispatching on the extension of `file_name`.
    pub async fn decode(&self, data: Bytes, file_name: &str) -> Result<DecodedDocument, DecodeError> {
        let extension = file_extension(file_name);
        let file_type = FileType::from_extension(&extension)
            .ok_or_else(|| DecodeError::UnsupportedFormat(extension.clone()))?;

        if self.verify_magic_bytes && !content_matches(file_type, &data) {
            tracing::warn!(
                file_name = %file_name,
                file_type = %file_type,
                "Upload content does not match its extension"
            );
            return Err(DecodeError::FormatMismatch {
                extension: extension.trim_start_matches('.').to_string(),
            });
        }

        let permit = match &self.permits {
            Some(semaphore) => Some(Arc::clone(semaphore).acquire_owned().await.map_err(|e| {
                DecodeError::extraction(file_type, ExtractError::Interrupted(e.to_string()))
            })?),
            None => None,
        };

        let extractor = self.extractor_for(file_type);
        let extractor_name = extractor.name();
        let started = std::time::Instant::now();

        let joined = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            extractor.extract(&data)
        })
        .await;

        let text = match joined {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                tracing::warn!(
                    file_name = %file_name,
                    extractor = extractor_name,
                    error = %e,
                    "Text extraction failed"
                );
                return Err(DecodeError::extraction(file_type, e));
            }
            Err(join_error) => {
                tracing::error!(
                    file_name = %file_name,
                    extractor = extractor_name,
                    error = %join_error,
                    "Text extraction task did not complete"
                );
                return Err(DecodeError::extraction(
                    file_type,
                    ExtractError::Interrupted(join_error.to_string()),
                ));
            }
        };

        tracing::debug!(
            file_name = %file_name,
            extractor = extractor_name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Text extracted"
        );

        Ok(DecodedDocument::new(file_name, file_type, &text))
    }
}
