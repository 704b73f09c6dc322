// File: src/region.rs
// Purpose: The single container views are rendered into

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Target of every dispatch; its content is always fully overwritten
pub trait ContentRegion {
    fn replace(&self, html: &str);
}

impl<R: ContentRegion + ?Sized> ContentRegion for &R {
    fn replace(&self, html: &str) {
        (**self).replace(html)
    }
}

impl<R: ContentRegion + ?Sized> ContentRegion for Rc<R> {
    fn replace(&self, html: &str) {
        (**self).replace(html)
    }
}

/// Region kept in memory, for the CLI and tests
#[derive(Debug, Default)]
pub struct MemoryRegion {
    html: RefCell<String>,
    writes: Cell<usize>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    /// Number of replacements so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ContentRegion for MemoryRegion {
    fn replace(&self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
        self.writes.set(self.writes.get() + 1);
    }
}
