//! API constants

/// API base path prefix
pub const API_BASE: &str = "/api";

/// Multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

/// Multipart field carrying the conversation id.
pub const THREAD_ID_FIELD: &str = "threadId";

pub const NO_FILE_UPLOADED: &str = "No file uploaded";
pub const THREAD_ID_REQUIRED: &str = "Thread ID is required";
pub const FILE_NOT_FOUND: &str = "No file found for this conversation";
pub const FILE_REMOVED: &str = "File removed successfully";
