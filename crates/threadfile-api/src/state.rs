//! Application state shared by all handlers.

use crate::services::IngestionService;

#[derive(Clone)]
pub struct AppState {
    pub ingestion: IngestionService,
}
