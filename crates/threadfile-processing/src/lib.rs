//! Upload validation and document text extraction.
//!
//! [`UploadValidator`] applies the size and extension policy before any bytes
//! are decoded. [`FormatDecoder`] turns an accepted upload into a
//! [`DecodedDocument`](threadfile_core::DecodedDocument) by dispatching on the
//! file extension to a PDF or DOCX [`TextExtractor`].

pub mod document;
pub mod validator;

pub use document::{
    DecodeError, DocxExtractor, ExtractError, FormatDecoder, PdfExtractor, TextExtractor,
};
pub use validator::{UploadPayload, UploadValidator, ValidationError, ValidationResult};
