//! Threadfile Infrastructure Library
//!
//! Shared plumbing for the HTTP service: tracing initialisation and the
//! request-id middleware.

pub mod middleware;
pub mod telemetry;

// Re-export commonly used types
pub use middleware::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use telemetry::{init_telemetry, LogFormat};
