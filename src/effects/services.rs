use super::Effect;
use crate::constants::{
    CLASS_ACTIVE, ID_SERVICES_CANVAS, ID_SERVICES_CARDS, ID_SERVICES_SECTION, SEL_SERVICE_CARD,
    SERVICES_CAMERA_Z, SERVICES_FOV_DEG, SERVICES_ROOT_MARGIN, SERVICES_SIZE_PULSE,
    SERVICES_SIZE_SCALE,
};
use crate::core::constants::{DEFAULT_ITEM_SPACING, PARTICLE_COUNT};
use crate::core::scroll::ItemTransform;
use crate::core::{Camera, OrchestratorConfig, ProgressEvent, SectionOrchestrator, ShapeId};
use crate::dom;
use crate::events::{pointer, Listener};
use crate::frame::{FrameLoop, FrameTime};
use crate::render::{GpuState, Scene, SpriteInstance, SpriteParams};
use crate::visibility::{Visibility, Watch};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Services {
    orchestrator: SectionOrchestrator,
    gpu: GpuState,
    canvas: web::HtmlCanvasElement,
    track: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    track_width: f32,
    transforms: Vec<ItemTransform>,
    sprites: Vec<SpriteInstance>,
    camera: Camera,
    cards_dirty: Rc<Cell<bool>>,
}

impl Services {
    /// Re-measure everything a resize can change.
    fn measure(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        self.gpu.resize_if_needed(w, h);
        self.camera.set_viewport(w as f32, h as f32);
        let card_width = self
            .cards
            .first()
            .map(|c| c.offset_width() as f32)
            .unwrap_or(0.0);
        self.orchestrator
            .mapper_mut()
            .set_item_metrics(card_width, DEFAULT_ITEM_SPACING);
        self.track_width = self.track.offset_width() as f32;
        self.cards_dirty.set(true);
    }

    fn apply_cards(&mut self) {
        if !self.cards_dirty.replace(false) {
            return;
        }
        self.orchestrator
            .mapper()
            .layout_items(self.track_width, &mut self.transforms);
        for (card, t) in self.cards.iter().zip(&self.transforms) {
            dom::set_style(
                card,
                "transform",
                &format!("translateX({}px) scale({})", t.translate_x, t.scale),
            );
            dom::set_style(card, "opacity", &t.opacity.to_string());
            dom::toggle_class(card, CLASS_ACTIVE, t.active);
        }
    }

    fn frame(&mut self, time: FrameTime) {
        self.orchestrator.frame(time.elapsed);
        self.apply_cards();
        let Some(field) = self.orchestrator.field() else {
            return;
        };
        self.sprites.clear();
        self.sprites.extend(
            field
                .positions()
                .iter()
                .zip(field.colors())
                .zip(field.sizes())
                .map(|((p, c), s)| SpriteInstance::new(*p, *c, 1.0, *s)),
        );
        let scene = Scene {
            camera: &self.camera,
            model: field.model_matrix(),
            params: SpriteParams {
                time: field.elapsed(),
                intensity: field.hover_intensity(),
                size_scale: SERVICES_SIZE_SCALE,
                pulse_amplitude: SERVICES_SIZE_PULSE,
            },
            sprites: &self.sprites,
            lines: &[],
        };
        if let Err(e) = self.gpu.render(&scene) {
            log::error!("[services] render error: {:?}", e);
        }
    }
}

/// Scroll-driven service cards over a morphing particle field.
pub struct ServicesEffect {
    state: Rc<RefCell<Services>>,
    frame_loop: Rc<RefCell<Option<FrameLoop>>>,
    listeners: Vec<Listener>,
    visibility: Option<Visibility>,
}

impl ServicesEffect {
    pub async fn start() -> anyhow::Result<Self> {
        let (window, document) = super::page()?;
        let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, ID_SERVICES_CANVAS)?;
        let section: web::HtmlElement = dom::element_by_id(&document, ID_SERVICES_SECTION)?;
        let container: web::HtmlElement = dom::element_by_id(&document, ID_SERVICES_CARDS)?;
        let cards = dom::query_all(&container, SEL_SERVICE_CARD);
        let track = container
            .parent_element()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
            .unwrap_or_else(|| container.clone());

        dom::sync_canvas_backing_size(&canvas);
        let gpu = GpuState::new(&canvas, PARTICLE_COUNT).await?;

        let item_count = if cards.is_empty() {
            ShapeId::ALL.len()
        } else {
            cards.len()
        };
        let mut orchestrator = SectionOrchestrator::new(OrchestratorConfig {
            item_count,
            ..Default::default()
        });
        let cards_dirty = Rc::new(Cell::new(true));
        {
            let dirty = cards_dirty.clone();
            orchestrator
                .mapper_mut()
                .subscribe(move |_: &ProgressEvent| dirty.set(true));
        }
        orchestrator.observe();

        let state = Rc::new(RefCell::new(Services {
            orchestrator,
            gpu,
            canvas: canvas.clone(),
            track,
            transforms: Vec::with_capacity(cards.len()),
            cards: cards.clone(),
            track_width: 0.0,
            sprites: Vec::with_capacity(PARTICLE_COUNT),
            camera: Camera::looking_at_origin(SERVICES_CAMERA_Z, SERVICES_FOV_DEG),
            cards_dirty,
        }));
        {
            let mut s = state.borrow_mut();
            s.measure();
            s.apply_cards();
        }
        dom::set_style(&canvas, "cursor", "none");

        let mut listeners = Vec::new();
        {
            let st = state.clone();
            let w = window.clone();
            listeners.push(Listener::passive(&window, "scroll", move |_| {
                st.borrow_mut().orchestrator.queue_scroll(dom::scroll_y(&w));
            }));
        }
        {
            let st = state.clone();
            let w = window.clone();
            let section = section.clone();
            listeners.push(Listener::new(&window, "resize", move |_| {
                let mut s = st.borrow_mut();
                s.measure();
                let layout = dom::section_layout(&w, &section);
                s.orchestrator.on_resize(layout, dom::scroll_y(&w));
                s.apply_cards();
            }));
        }
        {
            let st = state.clone();
            let el = canvas.clone();
            listeners.push(Listener::mouse(&canvas, "mousemove", move |ev| {
                if let Some((x, y)) = dom::pointer_ndc(ev, &el) {
                    st.borrow_mut().orchestrator.on_pointer(x, y);
                }
            }));
        }
        {
            let st = state.clone();
            listeners.push(Listener::new(&canvas, "mouseleave", move |_| {
                st.borrow_mut().orchestrator.on_pointer(0.0, 0.0);
            }));
        }
        {
            let enter = state.clone();
            let leave = state.clone();
            listeners.extend(pointer::on_hover(
                &cards,
                Rc::new(move || enter.borrow_mut().orchestrator.on_hover(true)),
                Rc::new(move || leave.borrow_mut().orchestrator.on_hover(false)),
            ));
        }

        let frame_loop: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
        let visibility = {
            let st = state.clone();
            let fl = frame_loop.clone();
            let w = window.clone();
            let section_el: web::Element = section.clone().into();
            let threshold = OrchestratorConfig::default().visibility_threshold as f64;
            Visibility::observe(
                &[section_el.clone()],
                threshold,
                SERVICES_ROOT_MARGIN,
                move |_, change| {
                    let layout = dom::section_layout(&w, &section_el);
                    let activated =
                        st.borrow_mut()
                            .orchestrator
                            .on_visibility(change.ratio, layout, dom::scroll_y(&w));
                    if activated {
                        log::info!("[services] section visible, starting particle field");
                        let frame_state = st.clone();
                        *fl.borrow_mut() = Some(FrameLoop::start(move |t| {
                            frame_state.borrow_mut().frame(t)
                        }));
                    }
                    Watch::Keep
                },
            )?
        };

        log::info!("[services] ready with {} cards", cards.len());
        Ok(Self {
            state,
            frame_loop,
            listeners,
            visibility: Some(visibility),
        })
    }
}

impl Effect for ServicesEffect {
    fn name(&self) -> &'static str {
        "services"
    }

    fn dispose(&mut self) {
        if let Some(fl) = self.frame_loop.borrow_mut().take() {
            fl.stop();
        }
        self.listeners.clear();
        self.visibility = None;
        self.state.borrow_mut().orchestrator.teardown();
    }
}
