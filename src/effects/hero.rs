use super::Effect;
use crate::constants::{
    CLASS_ANIMATING, CLASS_FADE_OUT, HERO_CAMERA_Z, HERO_FOV_DEG, HERO_PARTICLE_ALPHA,
    HERO_PARTICLE_SIZE, ID_HERO_CANVAS, ID_HERO_TAGLINE,
};
use crate::core::backdrop::{HeroBackdrop, BACKDROP_PARTICLES};
use crate::core::tagline::{TaglineConfig, TaglineEvent, TaglineRotator, HERO_TAGLINES};
use crate::core::Camera;
use crate::dom;
use crate::events::Listener;
use crate::frame::{FrameLoop, FrameTime};
use crate::render::{GpuState, Scene, SpriteInstance, SpriteParams};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const BACKDROP_SEED: u64 = 0x4845_524f;

struct Hero {
    backdrop: HeroBackdrop,
    gpu: GpuState,
    canvas: web::HtmlCanvasElement,
    camera: Camera,
    sprites: Vec<SpriteInstance>,
}

impl Hero {
    fn measure(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        self.gpu.resize_if_needed(w, h);
        self.camera.set_viewport(w as f32, h as f32);
    }

    fn frame(&mut self, time: FrameTime) {
        self.backdrop.tick(time.dt);
        self.sprites.clear();
        for orb in self.backdrop.orbs() {
            self.sprites.push(SpriteInstance {
                center: orb.center.to_array(),
                color: orb.color,
                size: orb.radius,
            });
        }
        self.sprites.extend(
            self.backdrop
                .positions()
                .iter()
                .zip(self.backdrop.colors())
                .map(|(p, c)| SpriteInstance::new(*p, *c, HERO_PARTICLE_ALPHA, HERO_PARTICLE_SIZE)),
        );
        let scene = Scene {
            camera: &self.camera,
            model: self.backdrop.model_matrix(),
            params: SpriteParams {
                time: self.backdrop.time(),
                ..Default::default()
            },
            sprites: &self.sprites,
            lines: &[],
        };
        if let Err(e) = self.gpu.render(&scene) {
            log::error!("[hero] render error: {:?}", e);
        }
    }
}

/// Tumbling particle cube and pulsing orb behind the hero copy.
pub struct HeroEffect {
    frame_loop: Option<FrameLoop>,
    listeners: Vec<Listener>,
}

impl HeroEffect {
    pub async fn start() -> anyhow::Result<Self> {
        let (window, document) = super::page()?;
        let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, ID_HERO_CANVAS)?;
        dom::sync_canvas_backing_size(&canvas);
        let gpu = GpuState::new(&canvas, BACKDROP_PARTICLES + 2).await?;

        let state = Rc::new(RefCell::new(Hero {
            backdrop: HeroBackdrop::new(BACKDROP_PARTICLES, BACKDROP_SEED),
            gpu,
            canvas,
            camera: Camera::looking_at_origin(HERO_CAMERA_Z, HERO_FOV_DEG),
            sprites: Vec::with_capacity(BACKDROP_PARTICLES + 2),
        }));
        state.borrow_mut().measure();

        let resize_state = state.clone();
        let listeners = vec![Listener::new(&window, "resize", move |_| {
            resize_state.borrow_mut().measure()
        })];
        let frame_state = state.clone();
        let frame_loop = FrameLoop::start(move |t| frame_state.borrow_mut().frame(t));
        log::info!("[hero] backdrop running");
        Ok(Self {
            frame_loop: Some(frame_loop),
            listeners,
        })
    }
}

impl Effect for HeroEffect {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn dispose(&mut self) {
        self.frame_loop = None;
        self.listeners.clear();
    }
}

struct Tagline {
    rotator: TaglineRotator,
    events: Vec<TaglineEvent>,
    el: web::HtmlElement,
}

impl Tagline {
    fn apply(&self, ev: TaglineEvent) {
        match ev {
            TaglineEvent::FadeOut => dom::toggle_class(&self.el, CLASS_FADE_OUT, true),
            TaglineEvent::Show(i) => {
                let text = HERO_TAGLINES.get(i).copied().unwrap_or_default();
                self.el.set_text_content(Some(text));
                dom::toggle_class(&self.el, CLASS_FADE_OUT, false);
                dom::toggle_class(&self.el, CLASS_ANIMATING, true);
            }
        }
    }
}

/// Rotating hero tagline. Independent of WebGPU so the copy animates even
/// where the backdrop cannot.
pub struct TaglineEffect {
    state: Rc<RefCell<Tagline>>,
    frame_loop: Option<FrameLoop>,
}

impl TaglineEffect {
    pub fn start() -> anyhow::Result<Self> {
        let (_window, document) = super::page()?;
        let el: web::HtmlElement = dom::element_by_id(&document, ID_HERO_TAGLINE)?;
        let mut rotator = TaglineRotator::new(HERO_TAGLINES.len(), TaglineConfig::default());
        let first = rotator.start();
        let state = Rc::new(RefCell::new(Tagline {
            rotator,
            events: Vec::new(),
            el,
        }));
        if let Some(TaglineEvent::Show(i)) = first {
            // first line appears without the entry animation
            let text = HERO_TAGLINES.get(i).copied().unwrap_or_default();
            state.borrow().el.set_text_content(Some(text));
        }

        let frame_state = state.clone();
        let frame_loop = FrameLoop::start(move |t| {
            let mut s = frame_state.borrow_mut();
            let mut events = std::mem::take(&mut s.events);
            s.rotator.tick(t.dt as f64 * 1000.0, &mut events);
            for ev in events.drain(..) {
                s.apply(ev);
            }
            s.events = events;
        });
        Ok(Self {
            state,
            frame_loop: Some(frame_loop),
        })
    }
}

impl Effect for TaglineEffect {
    fn name(&self) -> &'static str {
        "tagline"
    }

    fn dispose(&mut self) {
        self.frame_loop = None;
        self.state.borrow_mut().rotator.dispose();
    }
}
