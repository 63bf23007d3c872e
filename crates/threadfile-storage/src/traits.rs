//! File store abstraction trait

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use threadfile_core::{DecodedDocument, FileContent, StoredFile, StoredFileMetadata};

use crate::FileStoreBackend;

/// File store operation errors
///
/// A missing conversation is not an error; reads return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    BackendError(String),
}

/// Result type for file store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Per-conversation document store
///
/// Keyed strictly by conversation id. Writes to one id are linearizable with
/// reads of the same id; different ids do not contend.
#[async_trait]
pub trait ConversationFileStore: Send + Sync {
    /// Store `document` for `conversation_id`, replacing any previous entry.
    async fn put(
        &self,
        conversation_id: &str,
        document: DecodedDocument,
    ) -> StoreResult<Arc<StoredFile>>;

    /// Metadata of the stored file, without its text.
    async fn get_summary(&self, conversation_id: &str) -> StoreResult<Option<StoredFileMetadata>>;

    /// Full extracted text of the stored file.
    async fn get_content(&self, conversation_id: &str) -> StoreResult<Option<FileContent>>;

    /// Remove the stored file. Returns `false` when there was none.
    async fn remove(&self, conversation_id: &str) -> StoreResult<bool>;

    /// Check the backend can serve requests.
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Get the backend type
    fn backend_type(&self) -> FileStoreBackend;
}
