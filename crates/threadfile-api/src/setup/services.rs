//! Service wiring

use std::sync::Arc;

use anyhow::{Context, Result};
use threadfile_core::Config;
use threadfile_processing::{FormatDecoder, UploadValidator};
use threadfile_storage::create_store;

use crate::services::IngestionService;
use crate::state::AppState;

/// Create the file store, decoder and ingestion service from configuration.
pub fn initialize_services(config: &Config) -> Result<Arc<AppState>> {
    let store = create_store(config).context("Failed to create file store")?;

    let decoder = FormatDecoder::default()
        .with_magic_byte_check(config.verify_magic_bytes())
        .with_max_concurrent(config.max_concurrent_decodes());

    tracing::info!(
        store_backend = %store.backend_type(),
        verify_magic_bytes = config.verify_magic_bytes(),
        max_concurrent_decodes = ?config.max_concurrent_decodes(),
        "Ingestion service initialized"
    );

    let ingestion = IngestionService::new(UploadValidator::default(), decoder, store);

    Ok(Arc::new(AppState { ingestion }))
}
