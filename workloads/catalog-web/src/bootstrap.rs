//! Platform-independent bootstrap helpers.

use catalog_core::{CatalogConfig, CatalogError};

/// Element id of the optional JSON configuration script.
pub const CONFIG_SCRIPT_ID: &str = "catalog-config";

/// Resolve configuration from the config script's text, if any.
///
/// A missing or blank script yields the defaults. An invalid one also
/// yields the defaults, together with the error so it can be logged.
pub fn resolve_config(script: Option<&str>) -> (CatalogConfig, Option<CatalogError>) {
    match script.map(str::trim).filter(|s| !s.is_empty()) {
        None => (CatalogConfig::default(), None),
        Some(json) => match CatalogConfig::from_json(json) {
            Ok(config) => (config, None),
            Err(e) => (CatalogConfig::default(), Some(e)),
        },
    }
}

/// Parse a pagination button's target page attribute.
pub fn parse_page_attr(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|&p| p >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_config_defaults() {
        let (config, err) = resolve_config(None);
        assert_eq!(config, CatalogConfig::default());
        assert!(err.is_none());

        let (config, err) = resolve_config(Some("  \n "));
        assert_eq!(config, CatalogConfig::default());
        assert!(err.is_none());
    }

    #[test]
    fn test_resolve_config_from_script() {
        let (config, err) = resolve_config(Some(r#"{"page_size": 16}"#));
        assert_eq!(config.page_size, 16);
        assert!(err.is_none());
    }

    #[test]
    fn test_resolve_config_invalid_falls_back() {
        let (config, err) = resolve_config(Some(r#"{"page_size": 0}"#));
        assert_eq!(config, CatalogConfig::default());
        assert!(matches!(err, Some(CatalogError::InvalidConfig(_))));
    }

    #[test]
    fn test_parse_page_attr() {
        assert_eq!(parse_page_attr("3"), Some(3));
        assert_eq!(parse_page_attr(" 1 "), Some(1));
        assert_eq!(parse_page_attr("0"), None);
        assert_eq!(parse_page_attr("-1"), None);
        assert_eq!(parse_page_attr("next"), None);
    }
}
