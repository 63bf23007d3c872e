use threadfile_core::constants::{ALLOWED_EXTENSIONS, MAX_UPLOAD_SIZE_BYTES};
use threadfile_core::file_extension;

const BYTES_PER_MB: usize = 1024 * 1024;

fn whole_mb(bytes: &usize) -> usize {
    bytes / BYTES_PER_MB
}

fn fractional_mb(bytes: &usize) -> f64 {
    *bytes as f64 / BYTES_PER_MB as f64
}

/// Upload policy violations. `Display` renders the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No file provided")]
    NoFile,

    #[error(
        "File size exceeds {}MB limit. Current size: {:.2}MB",
        whole_mb(.max),
        fractional_mb(.size)
    )]
    FileTooLarge { size: usize, max: usize },

    #[error("Unsupported file type: {extension}. Only PDF and DOCX are supported.")]
    UnsupportedType { extension: String },
}

/// Outcome of validating one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { reason: ValidationError },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid { reason } => Err(reason),
        }
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(reason: ValidationError) -> Self {
        ValidationResult::Invalid { reason }
    }
}

/// The parts of an upload the validator looks at.
#[derive(Debug, Clone, Copy)]
pub struct UploadPayload<'a> {
    pub file_name: &'a str,
    pub data: &'a [u8],
    /// Size reported for the upload, in bytes.
    pub declared_size: usize,
}

/// Upload validator
///
/// Checks presence, then size, then extension. Pure: it never looks inside
/// the bytes.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    max_file_size: usize,
    allowed_extensions: Vec<String>,
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::new(
            MAX_UPLOAD_SIZE_BYTES,
            ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        )
    }
}

impl UploadValidator {
    pub fn new(max_file_size: usize, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_extensions,
        }
    }

    pub fn validate(&self, payload: Option<&UploadPayload<'_>>) -> ValidationResult {
        let payload = match payload {
            Some(p) if !p.data.is_empty() => p,
            _ => return ValidationError::NoFile.into(),
        };

        if let Err(reason) = self.validate_file_size(payload.declared_size) {
            return reason.into();
        }

        if let Err(reason) = self.validate_extension(payload.file_name) {
            return reason.into();
        }

        ValidationResult::Valid
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate file extension (case-insensitive)
    pub fn validate_extension(&self, file_name: &str) -> Result<(), ValidationError> {
        let extension = file_extension(file_name);

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::UnsupportedType { extension });
        }

        Ok(())
    }
}
