//! List flow: fetch a page of products, render cards and pagination.

use catalog_core::{CatalogConfig, CatalogError, PageResult, RequestTokens, RoutePattern};
use catalog_data::ProductApi;
use catalog_observability::StructuredLogger;

use crate::container::Container;
use crate::error::{FlowError, LoadOutcome};
use crate::sections::{render_message, render_product_list, PaginationView};

/// Loads product pages into the list and pagination containers.
pub struct ListFlow<A> {
    api: A,
    list: Box<dyn Container>,
    pagination: Option<Box<dyn Container>>,
    detail_route: RoutePattern,
    page_size: u32,
    error_message: String,
    tokens: RequestTokens,
    logger: StructuredLogger,
}

impl<A: ProductApi> ListFlow<A> {
    /// Create a list flow rendering into `list`.
    pub fn new(
        api: A,
        list: impl Container + 'static,
        config: &CatalogConfig,
    ) -> Result<Self, CatalogError> {
        config.validate()?;
        Ok(Self {
            api,
            list: Box::new(list),
            pagination: None,
            detail_route: config.detail_route()?,
            page_size: config.page_size,
            error_message: config.list_error_message.clone(),
            tokens: RequestTokens::new(),
            logger: StructuredLogger::new().with_flow("list"),
        })
    }

    /// Render pagination controls into `container`.
    pub fn with_pagination(mut self, container: impl Container + 'static) -> Self {
        self.pagination = Some(Box::new(container));
        self
    }

    /// Set the logger. The flow name is set to `list`.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger.with_flow("list");
        self
    }

    /// Load the first page.
    pub async fn load_first(&self) -> LoadOutcome {
        self.load(1).await
    }

    /// Load `page` (1-based) and render it.
    ///
    /// Failures replace the list with the error message. If another load
    /// was issued while this one was in flight, the result is dropped.
    pub async fn load(&self, page: u32) -> LoadOutcome {
        let token = self.tokens.issue();
        self.logger
            .debug_builder("Loading products")
            .field_i64("page", i64::from(page))
            .field("token", token.to_string())
            .emit();

        let result = self.api.fetch_page(page, self.page_size).await;

        if !self.tokens.is_current(token) {
            self.logger
                .debug_builder("Discarding stale response")
                .field_i64("page", i64::from(page))
                .field("token", token.to_string())
                .emit();
            return LoadOutcome::Stale;
        }

        match result {
            Ok(result) => {
                self.render(&result);
                self.logger
                    .debug_builder("Products rendered")
                    .field_i64("page", i64::from(result.current_page))
                    .field_i64("count", result.products.len() as i64)
                    .emit();
                LoadOutcome::Rendered
            }
            Err(e) => {
                let error = FlowError::from(e);
                self.logger
                    .error_builder("Error loading products")
                    .field("error", error.to_string())
                    .field("kind", error.kind())
                    .field_i64("page", i64::from(page))
                    .emit();
                self.list.set_html(&render_message(&self.error_message));
                if let Some(pagination) = &self.pagination {
                    pagination.clear();
                }
                LoadOutcome::Failed(error)
            }
        }
    }

    fn render(&self, result: &PageResult) {
        self.list
            .set_html(&render_product_list(&result.products, &self.detail_route));
        if let Some(pagination) = &self.pagination {
            pagination.set_html(&PaginationView::from_page(result).render());
        }
    }

    /// The API this flow calls.
    pub fn api(&self) -> &A {
        &self.api
    }
}
