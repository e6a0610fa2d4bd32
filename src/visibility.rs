use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// An `IntersectionObserver` on one or more elements, disconnected on drop.
pub struct Visibility {
    observer: Option<web::IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>>,
}

/// What the callback wants after seeing a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Keep,
    Done,
}

#[derive(Clone, Copy, Debug)]
pub struct VisibilityChange {
    pub ratio: f32,
    pub intersecting: bool,
}

#[inline]
pub fn observer_supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

impl Visibility {
    /// Watch `targets`. `on_change` gets the element and its latest
    /// intersection; returning `Watch::Done` stops watching that element.
    /// Without observer support every target is reported fully visible
    /// once, straight away, so content never stays hidden.
    pub fn observe(
        targets: &[web::Element],
        threshold: f64,
        root_margin: &str,
        mut on_change: impl FnMut(&web::Element, VisibilityChange) -> Watch + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        if !observer_supported(&window) {
            log::warn!("[visibility] IntersectionObserver unavailable; treating targets as visible");
            for el in targets {
                _ = on_change(
                    el,
                    VisibilityChange {
                        ratio: 1.0,
                        intersecting: true,
                    },
                );
            }
            return Ok(Self {
                observer: None,
                _callback: None,
            });
        }

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, obs: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let change = VisibilityChange {
                        ratio: entry.intersection_ratio() as f32,
                        intersecting: entry.is_intersecting(),
                    };
                    if on_change(&target, change) == Watch::Done {
                        obs.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        for el in targets {
            observer.observe(el);
        }
        Ok(Self {
            observer: Some(observer),
            _callback: Some(callback),
        })
    }

    pub fn disconnect(&mut self) {
        if let Some(o) = self.observer.take() {
            o.disconnect();
        }
    }
}

impl Drop for Visibility {
    fn drop(&mut self) {
        self.disconnect();
    }
}
