//! Catalog API access.
//!
//! This crate provides:
//! - `HttpTransport` - Seam over the platform's HTTP GET
//! - `Endpoints` - URL construction for the catalog API
//! - `ApiClient` / `ProductApi` - Typed list and detail fetches
//! - `FetchError` - Transport, status, and decode failures

mod client;
mod endpoints;
mod error;
mod transport;

pub use client::*;
pub use endpoints::*;
pub use error::*;
pub use transport::*;
