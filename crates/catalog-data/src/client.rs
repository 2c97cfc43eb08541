//! Typed catalog API client.

use async_trait::async_trait;
use catalog_core::{PageResult, ProductDetail, ProductId};
use serde::de::DeserializeOwned;

use crate::endpoints::Endpoints;
use crate::error::FetchError;
use crate::transport::HttpTransport;

/// Catalog operations the flows depend on.
#[async_trait(?Send)]
pub trait ProductApi {
    /// Fetch one page of the product listing.
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<PageResult, FetchError>;

    /// Fetch a single product. A non-2xx status is an error.
    async fn fetch_product(&self, id: &ProductId) -> Result<ProductDetail, FetchError>;
}

/// JSON API client over any `HttpTransport`.
pub struct ApiClient<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Create a client with origin-relative endpoints.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            endpoints: Endpoints::default(),
        }
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.endpoints = Endpoints::new(base_url);
        self
    }

    /// The endpoints this client calls.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, FetchError> {
        self.transport
            .get(url)
            .await?
            .error_for_status(url)?
            .json()
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> ProductApi for ApiClient<T> {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<PageResult, FetchError> {
        let url = self.endpoints.products_page(page, limit)?;
        self.get_json(&url).await
    }

    async fn fetch_product(&self, id: &ProductId) -> Result<ProductDetail, FetchError> {
        let url = self.endpoints.product(id)?;
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::transport::HttpResponse;

    #[derive(Default)]
    struct StubTransport {
        routes: HashMap<String, HttpResponse>,
        requested: RefCell<Vec<String>>,
    }

    impl StubTransport {
        fn with(mut self, url: &str, status: u16, body: &str) -> Self {
            self.routes
                .insert(url.to_string(), HttpResponse::new(status, body));
            self
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for StubTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
            self.requested.borrow_mut().push(url.to_string());
            self.routes
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Transport(format!("no route for {url}")))
        }
    }

    const PAGE_JSON: &str = r#"{
        "products": [
            {"id": "1", "name": "Brake Pad", "image_url": "/img/1.jpg", "price": 24.5, "currency": "USD"},
            {"id": "2", "name": "Rotor", "image_url": "/img/2.jpg", "price": 80, "currency": "USD"}
        ],
        "current_page": 1,
        "total_pages": 2
    }"#;

    #[tokio::test]
    async fn test_fetch_page() {
        let client = ApiClient::new(
            StubTransport::default().with("/api/products?page=1&limit=8", 200, PAGE_JSON),
        );

        let page = client.fetch_page(1, 8).await.unwrap();
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.products[1].name, "Rotor");
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_fetch_page_uses_base_url() {
        let client = ApiClient::new(StubTransport::default().with(
            "https://shop.example/api/products?page=3&limit=4",
            200,
            PAGE_JSON,
        ))
        .with_base_url("https://shop.example");

        assert!(client.fetch_page(3, 4).await.is_ok());
        assert_eq!(
            client.transport().requested.borrow().as_slice(),
            ["https://shop.example/api/products?page=3&limit=4"]
        );
    }

    #[tokio::test]
    async fn test_fetch_product_not_found() {
        let client = ApiClient::new(StubTransport::default().with(
            "/api/products/42",
            404,
            "<h1>Not Found</h1>",
        ));

        let err = client.fetch_product(&ProductId::new("42")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_product_malformed_body() {
        let client = ApiClient::new(StubTransport::default().with(
            "/api/products/42",
            200,
            r#"{"id": "42"}"#,
        ));

        let err = client.fetch_product(&ProductId::new("42")).await.unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let client = ApiClient::new(StubTransport::default());
        let err = client.fetch_page(1, 8).await.unwrap_err();
        assert_eq!(err.kind(), "transport");
    }

    #[tokio::test]
    async fn test_invalid_page_skips_transport() {
        let client = ApiClient::new(StubTransport::default());
        let err = client.fetch_page(0, 8).await.unwrap_err();
        assert_eq!(err.kind(), "invalid_url");
        assert!(client.transport().requested.borrow().is_empty());
    }
}
