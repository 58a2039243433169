//! Seams between the page helpers and the browser.
//!
//! Browser objects are shared handles, so every method takes `&self`. The web
//! front-end implements these over `web-sys`; host-side tests use fakes with
//! interior mutability.

use crate::error::PageResult;

/// A clicked navigation control.
pub trait NavElement {
    fn has_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
}

/// The settable current location. Writing triggers a full-page navigation.
pub trait Navigator {
    fn set_href(&self, href: &str) -> PageResult<()>;
}

/// An element with a mutable inline `display` property.
pub trait StyledElement {
    /// Inline value; empty when never set.
    fn display(&self) -> PageResult<String>;
    fn set_display(&self, value: &str) -> PageResult<()>;
}

/// Lookup of elements by id in the current document.
pub trait ElementLookup {
    type Element: StyledElement;

    fn element_by_id(&self, id: &str) -> PageResult<Option<Self::Element>>;
}

/// Window-level URL fragment and relative scrolling.
pub trait Viewport {
    /// Same shape as `location.hash`: empty, or `#`-prefixed.
    fn hash(&self) -> PageResult<String>;
    fn scroll_by(&self, dx: f64, dy: f64);
}
