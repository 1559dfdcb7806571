//! Zowe CLI configuration.
//!
//! TOML-based configuration for the z/OSMF connection, search defaults
//! and logging. Every section uses serde defaults so partial files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zowe_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}:{}", config.zosmf.host, config.zosmf.port);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LogLevel, LoggingConfig, SearchDefaults, ZosmfProfile, ZoweConfig};

use std::path::Path;

use zowe_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file when none exists.
pub fn load_config() -> Result<ZoweConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<ZoweConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
