//! Drives components in a headless `VirtualDom` and renders them to HTML.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;

/// A value the component under test hands back to the test, usually a
/// signal-backed handle created inside the component.
pub struct Captured<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for Captured<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Captured<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T: Clone> Captured<T> {
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = Some(value);
    }

    pub fn get(&self) -> T {
        self.0.borrow().clone().expect("component has not rendered yet")
    }
}

/// Builds `dom` and renders it.
pub fn rebuild(dom: &mut VirtualDom) -> String {
    dom.rebuild_in_place();
    settle(dom)
}

/// Re-renders until queued signal writes have reached every subscriber, then
/// renders the tree. A write during render only dirties its readers.
pub fn settle(dom: &mut VirtualDom) -> String {
    for _ in 0..4 {
        dom.render_immediate(&mut NoOpMutations);
    }
    dioxus_ssr::render(dom)
}
