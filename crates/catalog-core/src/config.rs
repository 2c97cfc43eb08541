//! Page-level catalog configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::route::RoutePattern;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log collection).
    Json,
    /// Human-readable format (for the browser console).
    #[default]
    Human,
}

/// Configuration for both catalog flows.
///
/// Every field has a default, so an empty JSON object is a valid document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Prefix for API URLs (empty means same origin).
    pub api_base: String,
    /// Products requested per list page.
    pub page_size: u32,
    /// Element id of the product list container.
    pub list_container: String,
    /// Element id of the pagination container.
    pub pagination_container: String,
    /// Element id of the product detail container.
    pub detail_container: String,
    /// Route pattern of the detail page; must declare `:id`.
    pub detail_route: String,
    /// Message shown when the list cannot be loaded.
    pub list_error_message: String,
    /// Message shown when the detail cannot be loaded.
    pub detail_not_found_message: String,
    /// Minimum level written to the diagnostic channel.
    pub log_level: LogLevel,
    /// Diagnostic output format.
    pub log_format: LogFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page_size: 8,
            list_container: "product-list".to_string(),
            pagination_container: "pagination".to_string(),
            detail_container: "product-detail".to_string(),
            detail_route: "/product/:id".to_string(),
            list_error_message: "Error loading products.".to_string(),
            detail_not_found_message: "Product not found.".to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Human,
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the API base URL.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Check value ranges and the detail route.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        for (name, id) in [
            ("list_container", &self.list_container),
            ("pagination_container", &self.pagination_container),
            ("detail_container", &self.detail_container),
        ] {
            if id.trim().is_empty() {
                return Err(CatalogError::InvalidConfig(format!("{name} is empty")));
            }
        }
        self.detail_route().map(|_| ())
    }

    /// Parse the detail route pattern.
    pub fn detail_route(&self) -> Result<RoutePattern, CatalogError> {
        let route = RoutePattern::parse(&self.detail_route)?;
        if !route.has_param("id") {
            return Err(CatalogError::InvalidRoute(format!(
                "{:?} has no :id parameter",
                self.detail_route
            )));
        }
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.list_container, "product-list");
        assert_eq!(config.pagination_container, "pagination");
        assert_eq!(config.detail_container, "product-detail");
        assert_eq!(config.list_error_message, "Error loading products.");
        assert_eq!(config.detail_not_found_message, "Product not found.");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_empty_json() {
        let config = CatalogConfig::from_json("{}").unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_from_partial_json() {
        let config = CatalogConfig::from_json(
            r#"{"api_base": "https://shop.example", "page_size": 12, "log_level": "debug", "log_format": "json"}"#,
        )
        .unwrap();
        assert_eq!(config.api_base, "https://shop.example");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.detail_container, "product-detail");
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = CatalogConfig::from_json(r#"{"page_size": 0}"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_route_without_id() {
        let err = CatalogConfig::from_json(r#"{"detail_route": "/product/:sku"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRoute(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = CatalogConfig::from_json("{page_size").unwrap_err();
        assert!(matches!(err, CatalogError::ConfigParse(_)));
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
