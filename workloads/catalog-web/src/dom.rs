//! DOM-backed containers.

use catalog_client::Container;
use web_sys::Element;

/// A page element a flow renders into.
pub struct ElementContainer {
    element: Element,
}

impl ElementContainer {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl Container for ElementContainer {
    fn set_html(&self, html: &str) {
        self.element.set_inner_html(html);
    }
}
