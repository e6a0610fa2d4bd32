//! Page effects. Each binds one piece of `core` to its DOM and, where it
//! draws, to a WebGPU canvas. Construction is `start`; `dispose` removes
//! every listener, observer and frame callback the effect registered.

pub mod contact;
pub mod cursor;
pub mod hero;
pub mod nav;
pub mod research;
pub mod reveal;
pub mod services;
pub mod terminal;

pub trait Effect {
    fn name(&self) -> &'static str;
    fn dispose(&mut self);
}

/// Window and document, or the reason an effect cannot start.
pub(crate) fn page() -> anyhow::Result<(web_sys::Window, web_sys::Document)> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    Ok((window, document))
}
