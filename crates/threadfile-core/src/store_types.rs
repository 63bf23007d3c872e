use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// File store backend types
///
/// Defined in core because configuration selects it and the storage crate
/// builds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStoreBackend {
    #[default]
    Memory,
}

impl FromStr for FileStoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(FileStoreBackend::Memory),
            _ => Err(anyhow::anyhow!("Invalid file store backend: {}", s)),
        }
    }
}

impl Display for FileStoreBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FileStoreBackend::Memory => write!(f, "memory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend() {
        assert_eq!(
            "MEMORY".parse::<FileStoreBackend>().unwrap(),
            FileStoreBackend::Memory
        );
        assert!("redis".parse::<FileStoreBackend>().is_err());
    }
}
