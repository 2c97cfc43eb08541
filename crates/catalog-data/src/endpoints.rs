//! Catalog API URLs.

use catalog_core::ProductId;

use crate::error::FetchError;

/// Builds catalog API URLs relative to an optional base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Create endpoints under `base`. An empty base yields
    /// origin-relative URLs (`/api/...`).
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// `GET /api/products?page={page}&limit={limit}`
    pub fn products_page(&self, page: u32, limit: u32) -> Result<String, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidUrl("page numbers start at 1".to_string()));
        }
        if limit == 0 {
            return Err(FetchError::InvalidUrl("limit must be at least 1".to_string()));
        }
        Ok(format!(
            "{}/api/products?page={}&limit={}",
            self.base, page, limit
        ))
    }

    /// `GET /api/products/{id}`
    pub fn product(&self, id: &ProductId) -> Result<String, FetchError> {
        if id.is_empty() {
            return Err(FetchError::InvalidUrl("empty product id".to_string()));
        }
        Ok(format!("{}/api/products/{}", self.base, id.path_segment()))
    }
}
