//! Route patterns with named parameters (e.g., `/product/:id`).

use std::collections::HashMap;
use std::fmt;

use crate::error::CatalogError;
use crate::ids::ProductId;

/// Extracted route parameters.
pub type RouteParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern such as `/product/:id`.
    pub fn parse(pattern: &str) -> Result<Self, CatalogError> {
        if !pattern.starts_with('/') {
            return Err(CatalogError::InvalidRoute(format!(
                "{pattern:?} must start with '/'"
            )));
        }

        let mut segments = Vec::new();
        for part in split_segments(pattern) {
            match part.strip_prefix(':') {
                Some("") => {
                    return Err(CatalogError::InvalidRoute(format!(
                        "{pattern:?} has an unnamed parameter"
                    )))
                }
                Some(name) => {
                    if segments.contains(&Segment::Param(name.to_string())) {
                        return Err(CatalogError::InvalidRoute(format!(
                            "{pattern:?} repeats parameter {name:?}"
                        )));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(part.to_string())),
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Check whether the pattern declares a parameter.
    pub fn has_param(&self, name: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Param(p) if p == name))
    }

    /// Match a request path, ignoring any query string, fragment, or
    /// trailing slash. Parameter values are percent-decoded.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let parts: Vec<&str> = split_segments(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), percent_decode(part));
                }
            }
        }
        Some(params)
    }

    /// Extract the `id` parameter as a product identifier.
    pub fn product_id(&self, path: &str) -> Option<ProductId> {
        self.match_path(path)
            .and_then(|mut params| params.remove("id"))
            .map(ProductId::from)
    }

    /// Build a path by filling the `id` parameter.
    pub fn path_for(&self, id: &ProductId) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(lit) => path.push_str(lit),
                Segment::Param(name) if name == "id" => path.push_str(&id.path_segment()),
                Segment::Param(name) => {
                    path.push(':');
                    path.push_str(name);
                }
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_route() -> RoutePattern {
        RoutePattern::parse("/product/:id").unwrap()
    }

    #[test]
    fn test_match_plain_path() {
        let id = detail_route().product_id("/product/42");
        assert_eq!(id, Some(ProductId::new("42")));
    }

    #[test]
    fn test_match_ignores_trailing_slash_and_query() {
        let route = detail_route();
        assert_eq!(route.product_id("/product/42/"), Some(ProductId::new("42")));
        assert_eq!(route.product_id("/product/42?ref=home"), Some(ProductId::new("42")));
        assert_eq!(route.product_id("/product/42/?ref=home#specs"), Some(ProductId::new("42")));
    }

    #[test]
    fn test_match_rejects_other_paths() {
        let route = detail_route();
        assert_eq!(route.match_path("/other/42"), None);
        assert_eq!(route.match_path("/product"), None);
        assert_eq!(route.match_path("/product/"), None);
        assert_eq!(route.match_path("/product/42/extra"), None);
        assert_eq!(route.match_path("/"), None);
    }

    #[test]
    fn test_match_decodes_param() {
        let id = detail_route().product_id("/product/a%20b");
        assert_eq!(id, Some(ProductId::new("a b")));

        // Malformed escapes are kept verbatim.
        let id = detail_route().product_id("/product/100%");
        assert_eq!(id, Some(ProductId::new("100%")));
    }

    #[test]
    fn test_match_keeps_non_hex_escapes() {
        let route = detail_route();
        assert_eq!(route.product_id("/product/%+5"), Some(ProductId::new("%+5")));
        assert_eq!(route.product_id("/product/%-1x"), Some(ProductId::new("%-1x")));
        assert_eq!(route.product_id("/product/%zz1"), Some(ProductId::new("%zz1")));
        assert_eq!(route.product_id("/product/%2f%2F"), Some(ProductId::new("//")));
    }

    #[test]
    fn test_path_for_round_trips() {
        let route = detail_route();
        let id = ProductId::new("a b");
        let path = route.path_for(&id);
        assert_eq!(path, "/product/a%20b");
        assert_eq!(route.product_id(&path), Some(id));
    }

    #[test]
    fn test_parse_errors() {
        assert!(RoutePattern::parse("product/:id").is_err());
        assert!(RoutePattern::parse("/product/:").is_err());
        assert!(RoutePattern::parse("/p/:id/:id").is_err());
    }

    #[test]
    fn test_has_param() {
        assert!(detail_route().has_param("id"));
        assert!(!RoutePattern::parse("/products").unwrap().has_param("id"));
    }
}
