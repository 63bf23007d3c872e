//! Threadfile Core Library
//!
//! This crate provides the domain models, error types and configuration shared
//! by every threadfile component.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod store_types;
pub mod telemetry_types;

// Re-export commonly used types
pub use config::{BaseConfig, Config, IngestionConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    file_extension, DecodedDocument, FileContent, FileSummary, FileType, StoredFile,
    StoredFileMetadata,
};
pub use store_types::FileStoreBackend;
pub use telemetry_types::LogFormat;
