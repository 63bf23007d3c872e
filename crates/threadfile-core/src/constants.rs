//! Upload policy constants.
//!
//! The size limit is enforced by the validator. The HTTP body ceiling sits
//! well above it so an oversized file is still counted and reported with its
//! real size.

/// Maximum accepted upload, in MiB.
pub const MAX_UPLOAD_SIZE_MB: usize = 25;

/// Maximum accepted upload, in bytes (25 MiB).
pub const MAX_UPLOAD_SIZE_BYTES: usize = MAX_UPLOAD_SIZE_MB * 1024 * 1024;

/// Hard ceiling on an upload request body. File bytes past
/// `MAX_UPLOAD_SIZE_BYTES` are counted but not buffered.
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Largest inflated `word/document.xml` a DOCX may carry.
pub const MAX_DOCX_XML_BYTES: usize = 256 * 1024 * 1024;

/// Extensions (lowercase, dot included) accepted for upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".doc"];

/// Number of characters kept in an upload preview.
pub const PREVIEW_CHAR_LIMIT: usize = 500;

/// Appended to a preview when the text was truncated.
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 4000;

/// Default server-level concurrency limit.
pub const DEFAULT_HTTP_CONCURRENCY_LIMIT: usize = 10_000;
