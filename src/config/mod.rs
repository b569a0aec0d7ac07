pub mod local;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_catalog_endpoint, validate_distinct_paths, validate_relative_path, validate_timeout,
    Validate,
};
use std::time::Duration;

pub const INPUT_PATH: &str = "imports/goodreads-export.csv";
pub const OUTPUT_PATH: &str = "goodreads.json";
pub const LOG_PATH: &str = "app.log";
pub const GOOGLE_BOOKS_ENDPOINT: &str = "https://www.googleapis.com/books/v1";
pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Run settings. The binary only ever uses [`ImportConfig::default`]; the
/// fields are public so tests can point the pipeline elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    pub input_path: String,
    pub output_path: String,
    pub log_path: String,
    pub catalog_endpoint: String,
    pub request_timeout_seconds: u64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input_path: INPUT_PATH.to_string(),
            output_path: OUTPUT_PATH.to_string(),
            log_path: LOG_PATH.to_string(),
            catalog_endpoint: GOOGLE_BOOKS_ENDPOINT.to_string(),
            request_timeout_seconds: REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl ImportConfig {
    pub fn with_catalog_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.catalog_endpoint = endpoint.into();
        self
    }
}

impl ConfigProvider for ImportConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn catalog_endpoint(&self) -> &str {
        &self.catalog_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Validate for ImportConfig {
    fn validate(&self) -> Result<()> {
        validate_relative_path("input_path", &self.input_path)?;
        validate_relative_path("output_path", &self.output_path)?;
        validate_relative_path("log_path", &self.log_path)?;
        validate_distinct_paths(&[
            ("input_path", self.input_path.as_str()),
            ("output_path", self.output_path.as_str()),
            ("log_path", self.log_path.as_str()),
        ])?;
        validate_catalog_endpoint("catalog_endpoint", &self.catalog_endpoint)?;
        validate_timeout("request_timeout_seconds", self.request_timeout_seconds)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_paths() {
        let config = ImportConfig::default();
        assert_eq!(config.input_path(), "imports/goodreads-export.csv");
        assert_eq!(config.output_path(), "goodreads.json");
        assert_eq!(config.log_path, "app.log");
        assert_eq!(config.catalog_endpoint(), "https://www.googleapis.com/books/v1");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ImportConfig::default().with_catalog_endpoint("ftp://example.com");
        assert!(config.validate().is_err());

        let config = ImportConfig {
            output_path: String::new(),
            ..ImportConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ImportConfig {
            request_timeout_seconds: 0,
            ..ImportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_output_over_input() {
        let config = ImportConfig {
            output_path: "imports/goodreads-export.csv".to_string(),
            ..ImportConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(crate::utils::error::ImportError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_paths_outside_working_dir() {
        let config = ImportConfig {
            input_path: "../goodreads-export.csv".to_string(),
            ..ImportConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ImportConfig::default().with_catalog_endpoint("https://example.com/v1?key=x");
        assert!(config.validate().is_err());
    }
}
