//! List and detail flows for the product catalog browser client.
//!
//! Each flow fetches from a `ProductApi`, renders with the pure section
//! renderers, and writes the result through a `Container`. The browser
//! adapter supplies real DOM containers and transport; tests supply
//! in-memory ones.
//!
//! ```ignore
//! let flow = ListFlow::new(api, list_container, &config)?
//!     .with_pagination(pagination_container)
//!     .with_logger(logger);
//! flow.load_first().await;
//! ```

mod container;
mod error;
mod flow;

pub mod sections;

pub use container::*;
pub use error::*;
pub use flow::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Container, DetailFlow, FlowError, ListFlow, LoadOutcome, MemoryContainer};
    pub use catalog_core::{CatalogConfig, PageResult, ProductDetail, ProductId, ProductSummary};
    pub use catalog_data::{ApiClient, FetchError, HttpResponse, HttpTransport, ProductApi};
    pub use catalog_observability::{LogFormat, LogLevel, MemorySink, StructuredLogger};
}
