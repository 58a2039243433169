use crate::constants::TOGGLE_ATTR;
use crate::dom::{self, DomDocument, DomLocation, DomNavElement, DomWindow};
use page_core::{correct_anchor_scroll, navigate, toggle_visibility};
use wasm_bindgen::JsCast;
use web_sys as web;

fn elements_matching(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Vec<web::Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {:?}: {:?}", selector, e))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect())
}

/// Run the dispatcher on click for every control matching `selector`.
pub fn wire_nav_buttons(
    window: &web::Window,
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<usize> {
    let buttons = elements_matching(document, selector)?;
    for el in &buttons {
        let target = el.clone();
        let location = window.location();
        dom::add_click_listener(el, move || {
            if let Err(e) = navigate(&DomNavElement(&target), &DomLocation(location.clone())) {
                log::error!("[nav] {}", e);
            }
        });
    }
    Ok(buttons.len())
}

/// Toggle the referenced element on click for every control carrying `data-toggle`.
pub fn wire_toggle_controls(document: &web::Document) -> anyhow::Result<usize> {
    let controls = elements_matching(document, &format!("[{}]", TOGGLE_ATTR))?;
    for el in &controls {
        let Some(id) = el.get_attribute(TOGGLE_ATTR) else {
            continue;
        };
        let doc = document.clone();
        dom::add_click_listener(el, move || {
            if let Err(e) = toggle_visibility(&DomDocument(doc.clone()), &id) {
                log::error!("[toggle] {}", e);
            }
        });
    }
    Ok(controls.len())
}

pub fn wire_anchor_fix_on_load(window: &web::Window) {
    let wnd = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Err(e) = correct_anchor_scroll(&DomWindow(wnd.clone())) {
            log::error!("[anchor] {}", e);
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}
