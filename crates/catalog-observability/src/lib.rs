//! Structured diagnostics for the product catalog browser client.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with flow context
//! - `LogSink` - Output seam (stderr, browser console, memory)

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;

// Re-export level and format from catalog-core for convenience
pub use catalog_core::{LogFormat, LogLevel};
