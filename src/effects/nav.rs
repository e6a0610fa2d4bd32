use super::Effect;
use crate::constants::{CLASS_ACTIVE, CLASS_SCROLLED, ID_NAV, ID_NAV_LINKS, ID_NAV_TOGGLE, SEL_NAV_LINKS};
use crate::core::nav::{anchor_scroll_top, in_page_anchor, is_scrolled};
use crate::dom;
use crate::events::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Compact-on-scroll navigation bar, mobile menu toggle, and smooth
/// in-page anchor scrolling that clears the fixed bar.
pub struct NavEffect {
    listeners: Vec<Listener>,
}

fn scroll_to_anchor(window: &web::Window, document: &web::Document, nav: &web::HtmlElement, href: &str) {
    let Some(target) = document
        .query_selector(href)
        .ok()
        .flatten()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let top = anchor_scroll_top(target.offset_top() as f64, nav.offset_height() as f64);
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

impl NavEffect {
    pub fn start() -> anyhow::Result<Self> {
        let (window, document) = super::page()?;
        let nav: web::HtmlElement = dom::element_by_id(&document, ID_NAV)?;
        let links: web::HtmlElement = dom::element_by_id(&document, ID_NAV_LINKS)?;

        let mut listeners = Vec::new();
        dom::toggle_class(&nav, CLASS_SCROLLED, is_scrolled(dom::scroll_y(&window)));
        {
            let w = window.clone();
            let nav = nav.clone();
            listeners.push(Listener::passive(&window, "scroll", move |_| {
                dom::toggle_class(&nav, CLASS_SCROLLED, is_scrolled(dom::scroll_y(&w)));
            }));
        }
        if let Ok(toggle) = dom::element_by_id::<web::HtmlElement>(&document, ID_NAV_TOGGLE) {
            let links = links.clone();
            listeners.push(Listener::new(&toggle, "click", move |_| {
                _ = links.class_list().toggle(CLASS_ACTIVE);
            }));
        }
        for link in dom::query_all(&links, SEL_NAV_LINKS) {
            let w = window.clone();
            let doc = document.clone();
            let nav = nav.clone();
            let menu = links.clone();
            let el = link.clone();
            listeners.push(Listener::new(&link, "click", move |ev| {
                dom::toggle_class(&menu, CLASS_ACTIVE, false);
                let Some(href) = el.get_attribute("href") else {
                    return;
                };
                if let Some(anchor) = in_page_anchor(&href) {
                    ev.prevent_default();
                    scroll_to_anchor(&w, &doc, &nav, anchor);
                }
            }));
        }
        Ok(Self { listeners })
    }
}

impl Effect for NavEffect {
    fn name(&self) -> &'static str {
        "nav"
    }

    fn dispose(&mut self) {
        self.listeners.clear();
    }
}
