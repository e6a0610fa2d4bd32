use super::Listener;
use std::rc::Rc;
use web_sys as web;

/// Wire `mouseenter`/`mouseleave` on every element to one enter and one
/// leave handler.
pub fn on_hover(
    elements: &[web::HtmlElement],
    on_enter: Rc<dyn Fn()>,
    on_leave: Rc<dyn Fn()>,
) -> Vec<Listener> {
    let mut out = Vec::with_capacity(elements.len() * 2);
    for el in elements {
        let enter = on_enter.clone();
        out.push(Listener::new(el, "mouseenter", move |_| enter()));
        let leave = on_leave.clone();
        out.push(Listener::new(el, "mouseleave", move |_| leave()));
    }
    out
}

/// Viewport-space pointer position in CSS pixels.
#[inline]
pub fn client_position(ev: &web::MouseEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}
