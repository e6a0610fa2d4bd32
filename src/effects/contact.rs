use super::Effect;
use crate::constants::{
    ID_CONTACT_EMAIL, ID_CONTACT_FORM, ID_CONTACT_MESSAGE, ID_CONTACT_NAME, ID_CONTACT_SUBJECT,
    SEL_SUBMIT_BUTTON,
};
use crate::core::contact::{ContactMessage, CONTACT_ADDRESS, SUBMIT_RESET_MS, SUBMIT_SENDING_LABEL};
use crate::dom;
use crate::events::Listener;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Value of an input, textarea or select; empty when missing.
fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn read_message(document: &web::Document) -> ContactMessage {
    ContactMessage {
        name: field_value(document, ID_CONTACT_NAME),
        email: field_value(document, ID_CONTACT_EMAIL),
        subject: field_value(document, ID_CONTACT_SUBJECT),
        message: field_value(document, ID_CONTACT_MESSAGE),
    }
}

/// Show the sending label for a moment, then restore the button.
fn flash_sending(window: &web::Window, button: &web::HtmlButtonElement) {
    let original = button.text_content().unwrap_or_default();
    button.set_text_content(Some(SUBMIT_SENDING_LABEL));
    button.set_disabled(true);
    let restore_button = button.clone();
    let restore = Closure::once_into_js(move || {
        restore_button.set_text_content(Some(&original));
        restore_button.set_disabled(false);
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        restore.unchecked_ref(),
        SUBMIT_RESET_MS,
    );
}

/// Contact form submits by opening the visitor's mail client.
pub struct ContactEffect {
    listeners: Vec<Listener>,
}

impl ContactEffect {
    pub fn start() -> anyhow::Result<Self> {
        let (window, document) = super::page()?;
        let form: web::HtmlFormElement = dom::element_by_id(&document, ID_CONTACT_FORM)?;
        let button = form
            .query_selector(SEL_SUBMIT_BUTTON)
            .ok()
            .flatten()
            .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok());

        let listener = Listener::new(&form, "submit", move |ev| {
            ev.prevent_default();
            let link = read_message(&document)
                .mailto(CONTACT_ADDRESS, |s| js_sys::encode_uri_component(s).into());
            if let Err(e) = window.location().set_href(&link) {
                log::error!("[contact] could not open mail client: {:?}", e);
                return;
            }
            if let Some(button) = &button {
                flash_sending(&window, button);
            }
        });
        log::info!("[contact] form ready");
        Ok(Self {
            listeners: vec![listener],
        })
    }
}

impl Effect for ContactEffect {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn dispose(&mut self) {
        self.listeners.clear();
    }
}
