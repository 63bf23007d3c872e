//! Magic-byte sniffing for uploaded documents.

use threadfile_core::FileType;

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

/// Container format recognised from leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Pdf,
    /// ZIP container (Office Open XML).
    Zip,
    /// OLE compound file (legacy Office).
    Ole,
}

pub fn sniff(data: &[u8]) -> Option<Signature> {
    if data.starts_with(PDF_MAGIC) {
        Some(Signature::Pdf)
    } else if data.starts_with(ZIP_MAGIC) {
        Some(Signature::Zip)
    } else if data.starts_with(OLE_MAGIC) {
        Some(Signature::Ole)
    } else {
        None
    }
}

/// Whether `data` carries a signature acceptable for `file_type`.
pub fn content_matches(file_type: FileType, data: &[u8]) -> bool {
    match (file_type, sniff(data)) {
        (FileType::Pdf, Some(Signature::Pdf)) => true,
        (FileType::Docx, Some(Signature::Zip | Signature::Ole)) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff() {
        assert_eq!(sniff(b"%PDF-1.4\n"), Some(Signature::Pdf));
        assert_eq!(sniff(b"PK\x03\x04rest"), Some(Signature::Zip));
        assert_eq!(sniff(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1]), Some(Signature::Ole));
        assert_eq!(sniff(b"PK"), None);
        assert_eq!(sniff(b""), None);
        assert_eq!(sniff(b"hello"), None);
    }

    #[test]
    fn test_content_matches() {
        assert!(content_matches(FileType::Pdf, b"%PDF-1.7"));
        assert!(!content_matches(FileType::Pdf, b"PK\x03\x04"));
        assert!(content_matches(FileType::Docx, b"PK\x03\x04"));
        assert!(content_matches(FileType::Docx, &[0xD0, 0xCF, 0x11, 0xE0]));
        assert!(!content_matches(FileType::Docx, b"%PDF"));
    }
}
