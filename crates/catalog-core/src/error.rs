//! Catalog error types.

use thiserror::Error;

/// Errors raised while setting up the catalog client.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration value out of range or inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Route pattern could not be parsed.
    #[error("Invalid route pattern: {0}")]
    InvalidRoute(String),

    /// Configuration document was not valid JSON.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::ConfigParse(e.to_string())
    }
}
