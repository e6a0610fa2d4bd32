use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Longest step handed to an effect; a backgrounded tab resumes with one
/// ordinary frame instead of a jump.
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Clone, Copy, Debug)]
pub struct FrameTime {
    /// Seconds since the previous frame, capped.
    pub dt: f32,
    /// Seconds since the loop started.
    pub elapsed: f32,
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that can be stopped.
///
/// Stopping cancels the pending frame and releases the callback. Stop it
/// from page code, not from inside its own step.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn start(mut step: impl FnMut(FrameTime) + 'static) -> Self {
        let running = Rc::new(Cell::new(true));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let started = Instant::now();
        let mut last = started;
        let tick_clone = tick.clone();
        let running_tick = running.clone();
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            let now = Instant::now();
            let dt = (now - last).as_secs_f32().min(MAX_FRAME_DT);
            last = now;
            step(FrameTime {
                dt,
                elapsed: (now - started).as_secs_f32(),
            });
            if running_tick.get() {
                handle_tick.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut()>));

        handle.set(request_frame(&tick));
        Self {
            running,
            handle,
            tick,
        }
    }

    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // breaks the closure <-> slot cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
