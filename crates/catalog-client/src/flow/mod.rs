//! The two load-then-render flows.

mod detail;
mod list;

pub use detail::*;
pub use list::*;
