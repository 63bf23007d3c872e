use super::{ExtractError, TextExtractor};

/// PDF text extraction backed by `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract(&self, data: &[u8]) -> Result<String, ExtractError> {
        pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))
    }
}
