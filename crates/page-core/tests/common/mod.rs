// Fake browser objects for host-side tests.

#![allow(dead_code)]

use page_core::{
    ElementLookup, NavElement, Navigator, PageError, PageResult, StyledElement, Viewport,
    DATA_HREF_ATTR,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct FakeNavButton {
    pub classes: Vec<String>,
    pub data_href: Option<String>,
}

impl FakeNavButton {
    pub fn new(classes: &[&str], data_href: Option<&str>) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            data_href: data_href.map(str::to_string),
        }
    }
}

impl NavElement for FakeNavButton {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
    fn attribute(&self, name: &str) -> Option<String> {
        if name == DATA_HREF_ATTR {
            self.data_href.clone()
        } else {
            None
        }
    }
}

/// Records every write to the location.
#[derive(Default)]
pub struct FakeLocation {
    pub writes: RefCell<Vec<String>>,
}

impl Navigator for FakeLocation {
    fn set_href(&self, href: &str) -> PageResult<()> {
        self.writes.borrow_mut().push(href.to_string());
        Ok(())
    }
}

/// Shared inline style of one element.
#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    pub display: Rc<RefCell<String>>,
}

impl StyledElement for FakeElement {
    fn display(&self) -> PageResult<String> {
        Ok(self.display.borrow().clone())
    }
    fn set_display(&self, value: &str) -> PageResult<()> {
        *self.display.borrow_mut() = value.to_string();
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeDocument {
    pub elements: HashMap<String, FakeElement>,
}

impl FakeDocument {
    pub fn with_element(id: &str, display: &str) -> Self {
        let mut doc = Self::default();
        doc.insert(id, display);
        doc
    }

    pub fn insert(&mut self, id: &str, display: &str) {
        let el = FakeElement {
            display: Rc::new(RefCell::new(display.to_string())),
        };
        self.elements.insert(id.to_string(), el);
    }

    pub fn display_of(&self, id: &str) -> String {
        self.elements[id].display.borrow().clone()
    }
}

impl ElementLookup for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> PageResult<Option<FakeElement>> {
        Ok(self.elements.get(id).cloned())
    }
}

/// Window with a fixed hash that records scroll calls.
#[derive(Default)]
pub struct FakeWindow {
    pub hash: String,
    pub scrolls: RefCell<Vec<(f64, f64)>>,
}

impl FakeWindow {
    pub fn with_hash(hash: &str) -> Self {
        Self {
            hash: hash.to_string(),
            ..Self::default()
        }
    }
}

impl Viewport for FakeWindow {
    fn hash(&self) -> PageResult<String> {
        Ok(self.hash.clone())
    }
    fn scroll_by(&self, dx: f64, dy: f64) {
        self.scrolls.borrow_mut().push((dx, dy));
    }
}

/// Location whose setter throws, as a blocked navigation would.
pub struct ThrowingLocation;

impl Navigator for ThrowingLocation {
    fn set_href(&self, _href: &str) -> PageResult<()> {
        Err(PageError::Host("SecurityError".to_string()))
    }
}
