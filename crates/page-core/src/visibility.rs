use crate::constants::{DISPLAY_BLOCK, DISPLAY_NONE};
use crate::error::{PageError, PageResult};
use crate::host::{ElementLookup, StyledElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn as_str(self) -> &'static str {
        match self {
            Display::Block => DISPLAY_BLOCK,
            Display::None => DISPLAY_NONE,
        }
    }
}

/// Only an exact `none` counts as hidden; unset or anything else gets hidden.
#[inline]
pub fn next_display(current: &str) -> Display {
    if current == DISPLAY_NONE {
        Display::Block
    } else {
        Display::None
    }
}

/// Flip the inline display of the element with `id` and return the new value.
///
/// A missing element is an error, never a silent no-op.
pub fn toggle_visibility(document: &impl ElementLookup, id: &str) -> PageResult<Display> {
    let element = document
        .element_by_id(id)?
        .ok_or_else(|| PageError::ElementNotFound(id.to_string()))?;
    let current = element.display()?;
    let next = next_display(&current);
    element.set_display(next.as_str())?;
    log::debug!("[toggle] #{} display {:?} -> {}", id, current, next.as_str());
    Ok(next)
}
