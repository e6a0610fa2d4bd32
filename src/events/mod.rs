pub mod pointer;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event-listener registration that unregisters itself on drop.
///
/// Effects keep their listeners in a `Vec<Listener>` and clear it in
/// `dispose()`.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &impl AsRef<web::EventTarget>,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let target: web::EventTarget = target.as_ref().clone();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target,
            event,
            closure,
        }
    }

    /// Passive registration for scroll/touch style events.
    pub fn passive(
        target: &impl AsRef<web::EventTarget>,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let target: web::EventTarget = target.as_ref().clone();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target,
            event,
            closure,
        }
    }

    /// Listener whose handler only runs for mouse-like events.
    pub fn mouse(
        target: &impl AsRef<web::EventTarget>,
        event: &'static str,
        mut handler: impl FnMut(&web::MouseEvent) + 'static,
    ) -> Self {
        Self::new(target, event, move |ev: web::Event| {
            if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
                handler(mouse);
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
