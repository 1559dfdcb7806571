//! Full configuration validation.
//!
//! Each section has its own check; errors are collected into a single
//! `ConfigError` so users see every problem at once.

mod helpers;
mod sections;


use crate::schema::ZoweConfig;
use zowe_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ZoweConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_zosmf(&mut errors, config);
    sections::validate_search(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
