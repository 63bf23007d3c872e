//! Document ingestion service
//!
//! Runs one upload through validation, text extraction and storage, and
//! exposes the per-conversation reads the handlers need.

use std::sync::Arc;

use bytes::Bytes;
use threadfile_core::{FileContent, FileSummary, StoredFileMetadata};
use threadfile_processing::{
    DecodeError, FormatDecoder, UploadPayload, UploadValidator, ValidationError, ValidationResult,
};
use threadfile_storage::{ConversationFileStore, StoreError};

/// Why an upload was not ingested. `Display` is the client-facing message.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Thread ID is required")]
    MissingConversationId,

    #[error("{reason}")]
    ValidationFailed { reason: ValidationError },

    #[error("{reason}")]
    DecodeFailed { reason: DecodeError },

    #[error("File store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct IngestionService {
    validator: UploadValidator,
    decoder: FormatDecoder,
    store: Arc<dyn ConversationFileStore>,
}

impl IngestionService {
    pub fn new(
        validator: UploadValidator,
        decoder: FormatDecoder,
        store: Arc<dyn ConversationFileStore>,
    ) -> Self {
        Self {
            validator,
            decoder,
            store,
        }
    }

    pub fn store(&self) -> &Arc<dyn ConversationFileStore> {
        &self.store
    }

    /// Validate, decode and store one upload for `conversation_id`.
    ///
    /// Steps short-circuit in order; nothing is stored unless decoding
    /// succeeded. The returned summary carries a preview, never the full text.
    #[tracing::instrument(
        skip_all,
        fields(
            thread_id = %conversation_id,
            file_name = %file_name,
            size = declared_size
        )
    )]
    pub async fn ingest(
        &self,
        conversation_id: &str,
        data: Bytes,
        file_name: &str,
        declared_size: usize,
    ) -> Result<FileSummary, IngestError> {
        // Step 1: Conversation id
        if conversation_id.is_empty() {
            return Err(IngestError::MissingConversationId);
        }

        // Step 2: Upload policy
        let payload = UploadPayload {
            file_name,
            data: &data,
            declared_size,
        };
        if let ValidationResult::Invalid { reason } = self.validator.validate(Some(&payload)) {
            tracing::debug!(reason = %reason, "Upload rejected by validator");
            return Err(IngestError::ValidationFailed { reason });
        }

        // Step 3: Text extraction
        let document = self
            .decoder
            .decode(data, file_name)
            .await
            .map_err(|reason| IngestError::DecodeFailed { reason })?;

        // Step 4: Store, replacing any previous upload
        let stored = self.store.put(conversation_id, document).await?;

        tracing::info!(
            file_type = %stored.file_type,
            text_length = stored.text_length,
            "Document ingested"
        );

        // Step 5: Redacted summary
        Ok(stored.summary())
    }

    pub async fn summary(
        &self,
        conversation_id: &str,
    ) -> Result<Option<StoredFileMetadata>, IngestError> {
        Ok(self.store.get_summary(conversation_id).await?)
    }

    pub async fn content(&self, conversation_id: &str) -> Result<Option<FileContent>, IngestError> {
        Ok(self.store.get_content(conversation_id).await?)
    }

    pub async fn remove(&self, conversation_id: &str) -> Result<bool, IngestError> {
        Ok(self.store.remove(conversation_id).await?)
    }
}
