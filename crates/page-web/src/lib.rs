#![cfg(target_arch = "wasm32")]
use page_core::{correct_anchor_scroll, navigate, toggle_visibility, PageError};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;

use dom::{DomDocument, DomLocation, DomNavElement, DomWindow};

fn throw(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow::anyhow!("no window"))
}

fn document() -> anyhow::Result<web::Document> {
    dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("page-web loaded");
    Ok(())
}

/// Bound as `onclick="proposalNavbarclickDataHref(this)"` on the proposal filter buttons.
#[wasm_bindgen(js_name = proposalNavbarclickDataHref)]
pub fn navigate_from_click(element: web::Element) -> Result<(), JsValue> {
    let location = window().map_err(throw)?.location();
    navigate(&DomNavElement(&element), &DomLocation(location)).map_err(throw)?;
    Ok(())
}

/// Throws when no element has `element_id`.
#[wasm_bindgen(js_name = hideShow)]
pub fn hide_show(element_id: &str) -> Result<(), JsValue> {
    let doc = DomDocument(document().map_err(throw)?);
    toggle_visibility(&doc, element_id).map_err(|e: PageError| {
        log::error!("[toggle] {}", e);
        throw(e)
    })?;
    Ok(())
}

#[wasm_bindgen]
pub fn fix_anchors() -> Result<(), JsValue> {
    let wnd = DomWindow(window().map_err(throw)?);
    correct_anchor_scroll(&wnd).map_err(throw)
}

/// Optional wiring for pages that do not bind the helpers inline.
#[wasm_bindgen(js_name = installHandlers)]
pub fn install_handlers(nav_selector: &str) -> Result<(), JsValue> {
    let wnd = window().map_err(throw)?;
    let doc = document().map_err(throw)?;
    let navs = events::wire_nav_buttons(&wnd, &doc, nav_selector).map_err(throw)?;
    let toggles = events::wire_toggle_controls(&doc).map_err(throw)?;
    events::wire_anchor_fix_on_load(&wnd);
    log::info!("[wire] nav={} toggles={} anchor-fix=load", navs, toggles);
    Ok(())
}
