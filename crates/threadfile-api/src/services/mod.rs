//! Business logic services

pub mod ingestion;

pub use ingestion::{IngestError, IngestionService};
