use std::sync::Arc;

use threadfile_core::Config;

use crate::{ConversationFileStore, FileStoreBackend, MemoryFileStore, StoreResult};

/// Create a file store backend based on configuration
pub fn create_store(config: &Config) -> StoreResult<Arc<dyn ConversationFileStore>> {
    match config.file_store_backend() {
        FileStoreBackend::Memory => {
            tracing::info!("Using in-memory file store");
            Ok(Arc::new(MemoryFileStore::new()))
        }
    }
}
