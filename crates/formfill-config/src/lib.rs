//! # formfill Config
//!
//! TOML configuration for the generator endpoint, the credential file and
//! logging. Every section is optional; missing values take their defaults.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
