use super::Effect;
use crate::constants::{
    CLASS_ACTIVE, CLASS_CANVAS_HOVER, CLASS_CURSOR, CLASS_CURSOR_GLOW, CLASS_HOVER,
    ID_SERVICES_CANVAS, SEL_INTERACTIVE,
};
use crate::core::cursor::CursorFollower;
use crate::dom;
use crate::events::{pointer, Listener};
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CursorState {
    follower: CursorFollower,
    dot: web::HtmlElement,
    glow: web::HtmlElement,
}

impl CursorState {
    fn frame(&mut self) {
        let f = self.follower.tick();
        place(&self.dot, f.dot.x, f.dot.y);
        place(&self.glow, f.glow.x, f.glow.y);
        dom::set_style(&self.dot, "opacity", if f.visible { "1" } else { "0" });
        dom::toggle_class(&self.dot, CLASS_HOVER, f.hover);
        dom::toggle_class(&self.glow, CLASS_ACTIVE, f.glow_active);
    }
}

#[inline]
fn place(el: &web::HtmlElement, x: f32, y: f32) {
    dom::set_style(el, "left", &format!("{}px", x));
    dom::set_style(el, "top", &format!("{}px", y));
}

fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

/// Smoothed dot plus trailing glow replacing the system cursor on wide
/// viewports.
pub struct CursorEffect {
    frame_loop: Option<FrameLoop>,
    listeners: Vec<Listener>,
    dot: web::HtmlElement,
    glow: web::HtmlElement,
}

impl CursorEffect {
    /// `Ok(None)` on narrow (touch-sized) viewports.
    pub fn start() -> anyhow::Result<Option<Self>> {
        let (window, document) = super::page()?;
        let (vw, _) = dom::viewport(&window);
        if !CursorFollower::enabled_for_viewport(vw as f32) {
            log::info!("[cursor] viewport {}px too narrow, skipping", vw);
            return Ok(None);
        }
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let dot = create_div(&document, CLASS_CURSOR)?;
        let glow = create_div(&document, CLASS_CURSOR_GLOW)?;
        body.append_child(&dot)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        body.append_child(&glow)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let state = Rc::new(RefCell::new(CursorState {
            follower: CursorFollower::default(),
            dot: dot.clone(),
            glow: glow.clone(),
        }));

        let mut listeners = Vec::new();
        {
            let st = state.clone();
            listeners.push(Listener::mouse(&document, "mousemove", move |ev| {
                let (x, y) = pointer::client_position(ev);
                st.borrow_mut().follower.pointer_moved(x, y);
            }));
        }
        {
            let st = state.clone();
            listeners.push(Listener::new(&document, "mouseleave", move |_| {
                st.borrow_mut().follower.pointer_left();
            }));
        }
        {
            let st = state.clone();
            listeners.push(Listener::new(&document, "mouseenter", move |_| {
                st.borrow_mut().follower.pointer_entered();
            }));
        }
        {
            let interactive = dom::query_all_in_document(&document, SEL_INTERACTIVE);
            let enter = state.clone();
            let leave = state.clone();
            listeners.extend(pointer::on_hover(
                &interactive,
                Rc::new(move || enter.borrow_mut().follower.hover_enter()),
                Rc::new(move || leave.borrow_mut().follower.hover_leave()),
            ));
        }
        if let Ok(canvas) = dom::element_by_id::<web::HtmlElement>(&document, ID_SERVICES_CANVAS) {
            let on = dot.clone();
            let off = dot.clone();
            listeners.extend(pointer::on_hover(
                &[canvas],
                Rc::new(move || dom::toggle_class(&on, CLASS_CANVAS_HOVER, true)),
                Rc::new(move || dom::toggle_class(&off, CLASS_CANVAS_HOVER, false)),
            ));
        }

        let frame_state = state.clone();
        let frame_loop = FrameLoop::start(move |_| frame_state.borrow_mut().frame());
        log::info!("[cursor] started");
        Ok(Some(Self {
            frame_loop: Some(frame_loop),
            listeners,
            dot,
            glow,
        }))
    }
}

impl Effect for CursorEffect {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn dispose(&mut self) {
        self.frame_loop = None;
        self.listeners.clear();
        self.dot.remove();
        self.glow.remove();
    }
}
