use crate::constants::{FALLBACK_CANVAS_WIDTH_FRACTION, MAX_PIXEL_RATIO};
use crate::core::SectionLayout;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id and cast it; a missing or mistyped element is an
/// error the caller turns into "skip this effect".
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn query_all_in_document(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    match document.document_element() {
        Some(root) => query_all(&root, selector),
        None => Vec::new(),
    }
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// CSS viewport size in pixels.
#[inline]
pub fn viewport(window: &web::Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn pixel_ratio(window: &web::Window) -> f64 {
    window.device_pixel_ratio().min(MAX_PIXEL_RATIO)
}

/// Document-space position of `el`, measured against the current scroll.
pub fn section_layout(window: &web::Window, el: &web::Element) -> SectionLayout {
    let rect = el.get_bounding_client_rect();
    let (_, vh) = viewport(window);
    SectionLayout {
        top: scroll_y(window) + rect.top(),
        height: rect.height(),
        viewport_height: vh,
    }
}

/// Match the canvas backing store to its CSS size times the (capped) pixel
/// ratio. Canvases that have not been laid out yet borrow a share of the
/// viewport instead. Returns the backing size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(w) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let dpr = pixel_ratio(&w);
    let rect = canvas.get_bounding_client_rect();
    let (vw, vh) = viewport(&w);
    let css_w = if rect.width() > 0.0 {
        rect.width()
    } else {
        vw * FALLBACK_CANVAS_WIDTH_FRACTION
    };
    let css_h = if rect.height() > 0.0 { rect.height() } else { vh };
    let w_px = ((css_w * dpr) as u32).max(1);
    let h_px = ((css_h * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Pointer position inside `el` as normalized device coordinates, y up.
pub fn pointer_ndc(ev: &web::MouseEvent, el: &web::Element) -> Option<(f32, f32)> {
    let rect = el.get_bounding_client_rect();
    let (w, h) = (rect.width(), rect.height());
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let x = (ev.client_x() as f64 - rect.left()) / w * 2.0 - 1.0;
    let y = -((ev.client_y() as f64 - rect.top()) / h) * 2.0 + 1.0;
    Some((x as f32, y as f32))
}
