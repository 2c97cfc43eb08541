//! Section renderers for the catalog pages.
//!
//! Every renderer is a pure function from view model to HTML. Writing the
//! result into the page is the container's job.

mod html;
mod message;
mod pagination;
mod product_detail;
mod product_list;

pub use html::escape;
pub use message::*;
pub use pagination::*;
pub use product_detail::*;
pub use product_list::*;
