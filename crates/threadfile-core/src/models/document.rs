use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{PREVIEW_CHAR_LIMIT, PREVIEW_ELLIPSIS};

/// Decodable document format. `.doc` uploads are treated as DOCX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
}

impl FileType {
    /// Map a lowercased extension (with its dot) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".pdf" => Some(FileType::Pdf),
            ".docx" | ".doc" => Some(FileType::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
        }
    }
}

impl Display for FileType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Text extracted from one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    pub file_name: String,
    pub file_type: FileType,
    pub extracted_text: String,
}

impl DecodedDocument {
    /// Wraps extracted text, trimming surrounding whitespace.
    pub fn new(file_name: impl Into<String>, file_type: FileType, text: &str) -> Self {
        Self {
            file_name: file_name.into(),
            file_type,
            extracted_text: text.trim().to_string(),
        }
    }
}

/// The document held for a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub file_name: String,
    pub file_type: FileType,
    pub extracted_text: String,
    /// Character count of `extracted_text`, cached at write time.
    pub text_length: usize,
    pub uploaded_at: DateTime<Utc>,
}

impl StoredFile {
    pub fn new(document: DecodedDocument, uploaded_at: DateTime<Utc>) -> Self {
        let text_length = document.extracted_text.chars().count();
        Self {
            file_name: document.file_name,
            file_type: document.file_type,
            extracted_text: document.extracted_text,
            text_length,
            uploaded_at,
        }
    }

    pub fn metadata(&self) -> StoredFileMetadata {
        StoredFileMetadata {
            file_name: self.file_name.clone(),
            file_type: self.file_type,
            text_length: self.text_length,
            uploaded_at: self.uploaded_at,
        }
    }

    pub fn content(&self) -> FileContent {
        FileContent {
            file_name: self.file_name.clone(),
            file_type: self.file_type,
            content: self.extracted_text.clone(),
        }
    }

    pub fn summary(&self) -> FileSummary {
        FileSummary {
            file_name: self.file_name.clone(),
            file_type: self.file_type,
            text_length: self.text_length,
            preview: preview_of(&self.extracted_text),
        }
    }
}

/// Returned by a successful upload. Never carries the full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub file_name: String,
    pub file_type: FileType,
    pub text_length: usize,
    pub preview: String,
}

/// Returned by the metadata read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFileMetadata {
    pub file_name: String,
    pub file_type: FileType,
    pub text_length: usize,
    pub uploaded_at: DateTime<Utc>,
}

/// Returned by the full-content read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    pub file_name: String,
    pub file_type: FileType,
    pub content: String,
}

/// First `PREVIEW_CHAR_LIMIT` characters, with an ellipsis iff truncated.
pub fn preview_of(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHAR_LIMIT) {
        Some((cut, _)) => format!("{}{}", &text[..cut], PREVIEW_ELLIPSIS),
        None => text.to_string(),
    }
}
