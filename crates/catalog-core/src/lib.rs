//! Core types for the product catalog browser client.
//!
//! This crate provides the fundamental types shared by every other crate:
//! - `ProductSummary` / `ProductDetail` / `PageResult` - API view models
//! - `ProductId` - Typed product identifier
//! - `CatalogConfig` - Page-level configuration
//! - `RoutePattern` - Route parameter extraction (`/product/:id`)
//! - `RequestTokens` - Latest-request-wins bookkeeping per flow

mod config;
mod error;
mod ids;
mod model;
mod money;
mod route;
mod token;

pub use config::*;
pub use error::*;
pub use ids::*;
pub use model::*;
pub use money::*;
pub use route::*;
pub use token::*;
