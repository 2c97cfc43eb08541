//! Product catalog browser entry point.
//!
//! On load, mounts whichever flows have a container on the page:
//! - `#product-list` (+ optional `#pagination`) - paginated list flow
//! - `#product-detail` - detail flow for the product in the current path
//!
//! Configuration is read from an optional
//! `<script type="application/json" id="catalog-config">` element.

mod bootstrap;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(target_arch = "wasm32")]
mod mount;

pub use bootstrap::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = mount::mount_page() {
        web_sys::console::error_1(&format!("Catalog bootstrap failed: {e:#}").into());
    }
}
