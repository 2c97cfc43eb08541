//! Flow error types.

use catalog_data::FetchError;
use thiserror::Error;

/// Why a flow showed its error message instead of content.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// The API call failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page path does not carry a product id.
    #[error("Path {0:?} does not match the detail route")]
    RouteMismatch(String),
}

impl FlowError {
    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(e) => e.kind(),
            Self::RouteMismatch(_) => "route_mismatch",
        }
    }
}

/// Result of one load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Content was rendered into the container.
    Rendered,
    /// The error message was rendered into the container.
    Failed(FlowError),
    /// A newer load was issued while this one was in flight; nothing was
    /// written.
    Stale,
}

impl LoadOutcome {
    /// Check if content was rendered.
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered)
    }

    /// Check if the result was discarded.
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }

    /// The error, if the load failed.
    pub fn error(&self) -> Option<&FlowError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}
