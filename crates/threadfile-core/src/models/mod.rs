//! Data models for the application
//!
//! Documents move through three shapes: `DecodedDocument` (decoder output),
//! `StoredFile` (held by the file store) and the read projections returned to
//! clients (`FileSummary`, `StoredFileMetadata`, `FileContent`).

mod document;
mod file_name;

pub use document::*;
pub use file_name::file_extension;
