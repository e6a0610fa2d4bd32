use super::constants::NAV_SCROLLED_OFFSET;

/// Whether the navigation bar should switch to its compact "scrolled" look.
#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_OFFSET
}

/// Document offset to scroll to so an anchor target lands just below the
/// fixed navigation bar.
#[inline]
pub fn anchor_scroll_top(target_offset_top: f64, nav_height: f64) -> f64 {
    (target_offset_top - nav_height).max(0.0)
}

/// In-page anchors are the only links handled with smooth scrolling.
#[inline]
pub fn in_page_anchor(href: &str) -> Option<&str> {
    href.starts_with('#').then_some(href).filter(|h| h.len() > 1)
}

/// Visible-on-load test for reveal elements, from a client rect.
#[inline]
pub fn in_viewport(rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height && rect_bottom > 0.0
}
