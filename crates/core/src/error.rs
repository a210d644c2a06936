use std::io;

/// Errors that can occur during compatibility scanning
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid version: {0}")]
    VersionError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for scanner operations
pub type Result<T> = std::result::Result<T, Error>;
