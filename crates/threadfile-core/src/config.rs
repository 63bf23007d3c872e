//! Configuration module
//!
//! Settings are read from the environment (after loading an optional `.env`
//! file). Upload policy limits are constants in [`crate::constants`], not
//! configuration.

use std::env;

use crate::constants::{DEFAULT_HTTP_CONCURRENCY_LIMIT, DEFAULT_PORT};
use crate::store_types::FileStoreBackend;
use crate::telemetry_types::LogFormat;

/// Base configuration for the HTTP server
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub http_concurrency_limit: usize,
    pub log_format: LogFormat,
}

/// Ingestion service configuration
#[derive(Clone, Debug)]
pub struct IngestionConfig {
    pub base: BaseConfig,
    pub file_store_backend: FileStoreBackend,
    /// Upper bound on simultaneous decodes. `None` means unbounded.
    pub max_concurrent_decodes: Option<usize>,
    /// Require file content to match the declared extension's signature.
    pub verify_magic_bytes: bool,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<IngestionConfig>);

impl Config {
    fn as_ingestion(&self) -> &IngestionConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_name(&self.as_ingestion().base.environment)
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = IngestionConfig::from_lookup(lookup)?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_ingestion().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_ingestion().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_ingestion().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_ingestion().base.environment
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.as_ingestion().base.http_concurrency_limit
    }

    pub fn log_format(&self) -> LogFormat {
        self.as_ingestion().base.log_format
    }

    pub fn file_store_backend(&self) -> FileStoreBackend {
        self.as_ingestion().file_store_backend
    }

    pub fn max_concurrent_decodes(&self) -> Option<usize> {
        self.as_ingestion().max_concurrent_decodes
    }

    pub fn verify_magic_bytes(&self) -> bool {
        self.as_ingestion().verify_magic_bytes
    }
}

fn is_production_name(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

impl IngestionConfig {
    /// Build the configuration from a key lookup. `from_env` passes
    /// `std::env::var`; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_PORT,
        };

        let http_concurrency_limit = lookup("HTTP_CONCURRENCY_LIMIT")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(DEFAULT_HTTP_CONCURRENCY_LIMIT);

        let file_store_backend = match lookup("FILE_STORE_BACKEND") {
            Some(name) if !name.trim().is_empty() => name.trim().parse()?,
            _ => FileStoreBackend::default(),
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(name) if !name.trim().is_empty() => name.trim().parse()?,
            _ => LogFormat::default(),
        };

        let max_concurrent_decodes = lookup("MAX_CONCURRENT_DECODES")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &usize| n > 0);

        let verify_magic_bytes = lookup("VERIFY_MAGIC_BYTES")
            .unwrap_or_else(|| "false".to_string())
            .trim()
            .to_lowercase()
            .parse()
            .unwrap_or(false);

        let config = IngestionConfig {
            base: BaseConfig {
                server_port,
                cors_origins,
                environment,
                http_concurrency_limit,
                log_format,
            },
            file_store_backend,
            max_concurrent_decodes,
            verify_magic_bytes,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if is_production_name(&self.base.environment)
            && self.base.cors_origins.iter().any(|o| o == "*")
        {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.base.cors_origins.is_empty() {
            return Err(anyhow::anyhow!("CORS_ORIGINS must not be empty"));
        }

        Ok(())
    }
}
