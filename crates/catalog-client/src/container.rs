//! Container seam between the flows and the page.

use std::cell::RefCell;
use std::rc::Rc;

/// A page region owned by one flow.
///
/// The only place a flow mutates the page. Implementations replace the
/// region's entire content on each call.
pub trait Container {
    /// Replace the content with `html`.
    fn set_html(&self, html: &str);

    /// Remove all content.
    fn clear(&self) {
        self.set_html("");
    }
}

/// In-memory container. Clones share the same content.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    html: Rc<RefCell<String>>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content.
    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    /// Number of `set_html` calls so far.
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl Container for MemoryContainer {
    fn set_html(&self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
        *self.writes.borrow_mut() += 1;
    }
}

impl<C: Container + ?Sized> Container for Rc<C> {
    fn set_html(&self, html: &str) {
        (**self).set_html(html);
    }
}
