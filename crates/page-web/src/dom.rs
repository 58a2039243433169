//! `web-sys` implementations of the page-core host traits.

use page_core::{
    ElementLookup, NavElement, Navigator, PageError, PageResult, StyledElement, Viewport,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn host_err(e: JsValue) -> PageError {
    PageError::Host(format!("{:?}", e))
}

pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Clicked navigation control.
pub struct DomNavElement<'a>(pub &'a web::Element);

impl NavElement for DomNavElement<'_> {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

pub struct DomLocation(pub web::Location);

impl Navigator for DomLocation {
    fn set_href(&self, href: &str) -> PageResult<()> {
        self.0.set_href(href).map_err(host_err)
    }
}

pub struct DomStyled(pub web::HtmlElement);

impl StyledElement for DomStyled {
    fn display(&self) -> PageResult<String> {
        self.0.style().get_property_value("display").map_err(host_err)
    }
    fn set_display(&self, value: &str) -> PageResult<()> {
        self.0.style().set_property("display", value).map_err(host_err)
    }
}

pub struct DomDocument(pub web::Document);

impl ElementLookup for DomDocument {
    type Element = DomStyled;

    fn element_by_id(&self, id: &str) -> PageResult<Option<DomStyled>> {
        match self.0.get_element_by_id(id) {
            None => Ok(None),
            Some(el) => el
                .dyn_into::<web::HtmlElement>()
                .map(|html| Some(DomStyled(html)))
                .map_err(|_| PageError::NotStylable(id.to_string())),
        }
    }
}

pub struct DomWindow(pub web::Window);

impl Viewport for DomWindow {
    fn hash(&self) -> PageResult<String> {
        self.0.location().hash().map_err(host_err)
    }
    fn scroll_by(&self, dx: f64, dy: f64) {
        self.0.scroll_by_with_x_and_y(dx, dy);
    }
}
