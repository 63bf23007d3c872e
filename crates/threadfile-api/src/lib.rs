//! Threadfile API Library
//!
//! This crate provides the ingestion service, the HTTP handlers and the
//! application setup.

pub mod constants;
pub mod error;
mod handlers;
pub mod services;
pub mod setup;
pub mod state;
mod utils;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::{IngestError, IngestionService};
pub use state::AppState;
