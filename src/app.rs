use crate::effects::contact::ContactEffect;
use crate::effects::cursor::CursorEffect;
use crate::effects::hero::{HeroEffect, TaglineEffect};
use crate::effects::nav::NavEffect;
use crate::effects::research::ResearchGraphEffect;
use crate::effects::reveal::RevealEffect;
use crate::effects::services::ServicesEffect;
use crate::effects::terminal::{ResearchTyperEffect, TerminalEffect};
use crate::effects::Effect;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

thread_local! {
    static EFFECTS: RefCell<Vec<Box<dyn Effect>>> = RefCell::new(Vec::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");

    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let ready = Closure::once(move || spawn_local(run()));
        document.add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())?;
        ready.forget();
    } else {
        spawn_local(run());
    }
    Ok(())
}

async fn run() {
    if let Err(e) = init().await {
        log::error!("init error: {:?}", e);
    }
}

/// A failing effect is logged and skipped; the rest still start.
fn adopt<E: Effect + 'static>(effects: &mut Vec<Box<dyn Effect>>, tag: &str, result: anyhow::Result<E>) {
    match result {
        Ok(effect) => effects.push(Box::new(effect)),
        Err(e) => log::error!("[{}] not started: {:?}", tag, e),
    }
}

async fn init() -> anyhow::Result<()> {
    crate::effects::page()?;
    let mut effects: Vec<Box<dyn Effect>> = Vec::new();

    adopt(&mut effects, "nav", NavEffect::start());
    adopt(&mut effects, "reveal", RevealEffect::start());
    adopt(&mut effects, "contact", ContactEffect::start());
    match CursorEffect::start() {
        Ok(Some(cursor)) => effects.push(Box::new(cursor)),
        Ok(None) => {}
        Err(e) => log::error!("[cursor] not started: {:?}", e),
    }
    adopt(&mut effects, "tagline", TaglineEffect::start());
    adopt(&mut effects, "terminal", TerminalEffect::start());
    adopt(&mut effects, "research-typer", ResearchTyperEffect::start());

    // WebGPU scenes last: each awaits its own adapter and device.
    adopt(&mut effects, "hero", HeroEffect::start().await);
    adopt(&mut effects, "services", ServicesEffect::start().await);
    adopt(&mut effects, "research-graph", ResearchGraphEffect::start().await);

    log::info!(
        "[app] running: {}",
        effects
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    EFFECTS.with(|slot| slot.borrow_mut().extend(effects));
    Ok(())
}

/// Tear down every running effect: listeners, observers and frame loops.
#[wasm_bindgen]
pub fn dispose() {
    let effects = EFFECTS.with(|slot| std::mem::take(&mut *slot.borrow_mut()));
    for mut effect in effects {
        effect.dispose();
        log::info!("[{}] disposed", effect.name());
    }
}
