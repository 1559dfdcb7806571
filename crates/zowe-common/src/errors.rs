use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing connection setting: {0}")]
    MissingSetting(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ZoweError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("z/OSMF error: {0}")]
    Zosmf(String),

    #[error("search error: {0}")]
    Search(String),
}
