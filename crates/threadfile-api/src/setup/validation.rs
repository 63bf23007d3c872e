//! Configuration validation
//!
//! Validates configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use threadfile_core::Config;

/// Validate critical configuration values
pub fn validate_config(config: &Config) -> Result<()> {
    // Wildcard CORS in production and empty origin lists
    config.validate()?;

    if config.http_concurrency_limit() == 0 {
        return Err(anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT cannot be 0"));
    }

    if let Some(limit) = config.max_concurrent_decodes() {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        if limit > cpus * 4 {
            tracing::warn!(
                max_concurrent_decodes = limit,
                available_cpus = cpus,
                "MAX_CONCURRENT_DECODES is well above the CPU count; decodes are CPU-bound"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert!(validate_config(&config).is_ok());
    }
}
