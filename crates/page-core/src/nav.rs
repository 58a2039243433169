use crate::constants::{ACTIVE_CLASS, DATA_HREF_ATTR, MISSING_HREF, PROPOSALS_PATH};
use crate::error::PageResult;
use crate::host::{NavElement, Navigator};

/// Where a click on a navigation control sends the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// The control was already active: drop the filter.
    Proposals,
    Href(String),
    /// No `data-href` on an inactive control.
    Missing,
}

impl NavTarget {
    /// The value written to the location.
    pub fn href(&self) -> &str {
        match self {
            NavTarget::Proposals => PROPOSALS_PATH,
            NavTarget::Href(href) => href,
            NavTarget::Missing => MISSING_HREF,
        }
    }
}

#[inline]
pub fn resolve_target(element: &impl NavElement) -> NavTarget {
    if element.has_class(ACTIVE_CLASS) {
        return NavTarget::Proposals;
    }
    match element.attribute(DATA_HREF_ATTR) {
        Some(href) => NavTarget::Href(href),
        None => NavTarget::Missing,
    }
}

/// Redirect the browser according to the clicked control's active state.
pub fn navigate(element: &impl NavElement, navigator: &impl Navigator) -> PageResult<NavTarget> {
    let target = resolve_target(element);
    if target == NavTarget::Missing {
        log::warn!(
            "[nav] control has no {} attribute; navigating to {:?}",
            DATA_HREF_ATTR,
            MISSING_HREF
        );
    } else {
        log::debug!("[nav] {:?} -> {}", target, target.href());
    }
    navigator.set_href(target.href())?;
    Ok(target)
}
