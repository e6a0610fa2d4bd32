use super::Effect;
use crate::constants::{CLASS_ANIMATE_IN, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SEL_REVEAL};
use crate::core::nav::in_viewport;
use crate::dom;
use crate::visibility::{Visibility, Watch};
use web_sys as web;

/// Adds the entry-animation class to `.fade-in-up` blocks as they scroll
/// in. Content is visible without it; the class only animates.
pub struct RevealEffect {
    visibility: Option<Visibility>,
}

impl RevealEffect {
    pub fn start() -> anyhow::Result<Self> {
        let (window, document) = super::page()?;
        let targets: Vec<web::Element> = dom::query_all_in_document(&document, SEL_REVEAL)
            .into_iter()
            .map(Into::into)
            .collect();
        if targets.is_empty() {
            return Ok(Self { visibility: None });
        }

        let visibility = Visibility::observe(
            &targets,
            REVEAL_THRESHOLD,
            REVEAL_ROOT_MARGIN,
            |el, change| {
                if change.intersecting {
                    dom::toggle_class(el, CLASS_ANIMATE_IN, true);
                    Watch::Done
                } else {
                    Watch::Keep
                }
            },
        )?;

        // Already on screen at load: animate now rather than on first scroll.
        let (_, vh) = dom::viewport(&window);
        for el in &targets {
            let rect = el.get_bounding_client_rect();
            if in_viewport(rect.top(), rect.bottom(), vh) {
                dom::toggle_class(el, CLASS_ANIMATE_IN, true);
            }
        }
        log::info!("[reveal] watching {} elements", targets.len());
        Ok(Self {
            visibility: Some(visibility),
        })
    }
}

impl Effect for RevealEffect {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn dispose(&mut self) {
        self.visibility = None;
    }
}
