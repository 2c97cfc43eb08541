//! Detail flow: resolve the product id from the path, fetch, render.

use catalog_core::{CatalogConfig, CatalogError, RequestTokens, RoutePattern};
use catalog_data::ProductApi;
use catalog_observability::StructuredLogger;

use crate::container::Container;
use crate::error::{FlowError, LoadOutcome};
use crate::sections::{render_message, render_product_detail};

/// Loads a single product into the detail container.
pub struct DetailFlow<A> {
    api: A,
    container: Box<dyn Container>,
    route: RoutePattern,
    not_found_message: String,
    tokens: RequestTokens,
    logger: StructuredLogger,
}

impl<A: ProductApi> DetailFlow<A> {
    /// Create a detail flow rendering into `container`.
    pub fn new(
        api: A,
        container: impl Container + 'static,
        config: &CatalogConfig,
    ) -> Result<Self, CatalogError> {
        config.validate()?;
        Ok(Self {
            api,
            container: Box::new(container),
            route: config.detail_route()?,
            not_found_message: config.detail_not_found_message.clone(),
            tokens: RequestTokens::new(),
            logger: StructuredLogger::new().with_flow("detail"),
        })
    }

    /// Set the logger. The flow name is set to `detail`.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger.with_flow("detail");
        self
    }

    /// Load the product named by `path` (e.g., `/product/42`).
    ///
    /// A path outside the detail route shows the not-found message without
    /// calling the API.
    pub async fn load_path(&self, path: &str) -> LoadOutcome {
        let token = self.tokens.issue();

        let Some(id) = self.route.product_id(path) else {
            self.logger
                .warn_builder("No product id in path")
                .field("path", path)
                .field("route", self.route.as_str())
                .emit();
            return self.fail(FlowError::RouteMismatch(path.to_string()));
        };

        self.logger
            .debug_builder("Loading product")
            .field("product_id", id.as_str())
            .field("token", token.to_string())
            .emit();

        let result = self.api.fetch_product(&id).await;

        if !self.tokens.is_current(token) {
            self.logger
                .debug_builder("Discarding stale response")
                .field("product_id", id.as_str())
                .field("token", token.to_string())
                .emit();
            return LoadOutcome::Stale;
        }

        match result {
            Ok(product) => {
                self.container.set_html(&render_product_detail(&product));
                self.logger
                    .debug_builder("Product rendered")
                    .field("product_id", id.as_str())
                    .emit();
                LoadOutcome::Rendered
            }
            Err(e) => {
                let mut entry = self
                    .logger
                    .error_builder("Error loading product")
                    .field("product_id", id.as_str())
                    .field("error", e.to_string())
                    .field("kind", e.kind());
                if let Some(status) = e.status() {
                    entry = entry.field_i64("status", i64::from(status));
                }
                entry.emit();
                self.fail(FlowError::from(e))
            }
        }
    }

    fn fail(&self, error: FlowError) -> LoadOutcome {
        self.container
            .set_html(&render_message(&self.not_found_message));
        LoadOutcome::Failed(error)
    }

    /// The route used to extract product ids.
    pub fn route(&self) -> &RoutePattern {
        &self.route
    }

    /// The API this flow calls.
    pub fn api(&self) -> &A {
        &self.api
    }
}
