//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// First error as a [`ConfigError`], if any.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();
        Self::validate_generator(config, &mut result);
        Self::validate_credentials(config, &mut result);
        Self::validate_logging(config, &mut result);
        result
    }

    fn validate_generator(config: &Config, result: &mut ValidationResult) {
        let generator = &config.generator;

        if generator.model.trim().is_empty() {
            result.add_error(ValidationError::new(
                "generator.model",
                "Model cannot be empty",
            ));
        }

        let url = generator.base_url.as_str();
        if url.starts_with("http://") {
            result.add_warning(ValidationWarning::new(
                "generator.base_url",
                "base_url is not using https, the API key is sent in the query string",
            ));
        } else if !url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "generator.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if generator.connect_timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "generator.connect_timeout_seconds",
                "connect_timeout_seconds must be greater than 0",
            ));
        }

        if generator.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "generator.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }

        if generator.connect_timeout_seconds > generator.timeout_seconds {
            result.add_warning(ValidationWarning::new(
                "generator.connect_timeout_seconds",
                "connect timeout exceeds the request timeout and will never apply",
            ));
        }
    }

    fn validate_credentials(config: &Config, result: &mut ValidationResult) {
        if config.credentials.path.trim().is_empty() {
            result.add_error(ValidationError::new(
                "credentials.path",
                "Credential path cannot be empty",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }

        if config.logging.file && config.logging.dir.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.dir",
                "Log directory cannot be empty when file logging is enabled",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
