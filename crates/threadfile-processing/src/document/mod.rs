//! Document text extraction
//!
//! Extractors are synchronous and CPU-bound. [`FormatDecoder`] owns the
//! dispatch and runs them on the blocking thread pool.

pub mod decoder;
pub mod docx;
pub mod format;
pub mod pdf;

pub use decoder::{DecodeError, FormatDecoder};
pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

/// Failure inside a single extractor. Never shown to clients.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Missing document part: {0}")]
    MissingPart(&'static str),

    #[error("Document part {part} inflates beyond {limit} bytes")]
    PartTooLarge { part: &'static str, limit: usize },

    #[error("Document part {0} is not valid UTF-8")]
    InvalidEncoding(&'static str),

    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction interrupted: {0}")]
    Interrupted(String),
}

/// Turns the raw bytes of one document format into plain text.
pub trait TextExtractor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn extract(&self, data: &[u8]) -> Result<String, ExtractError>;
}
