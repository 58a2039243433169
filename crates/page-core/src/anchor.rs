use crate::constants::{ANCHOR_SCROLL_DX, ANCHOR_SCROLL_DY};
use crate::error::PageResult;
use crate::host::Viewport;

/// `hash` is shaped like `location.hash`; a bare `#` carries no fragment.
#[inline]
pub fn has_fragment(hash: &str) -> bool {
    !hash.strip_prefix('#').unwrap_or(hash).is_empty()
}

/// On load with a fragment, pull the viewport up so the anchor clears the fixed header.
pub fn correct_anchor_scroll(viewport: &impl Viewport) -> PageResult<()> {
    let hash = viewport.hash()?;
    if has_fragment(&hash) {
        log::debug!("[anchor] {} -> scroll_by({}, {})", hash, ANCHOR_SCROLL_DX, ANCHOR_SCROLL_DY);
        viewport.scroll_by(ANCHOR_SCROLL_DX, ANCHOR_SCROLL_DY);
    }
    Ok(())
}
