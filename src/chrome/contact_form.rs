use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, FormData, HtmlButtonElement, HtmlFormElement};

use crate::config::ChromeConfig;
use crate::dom;
use crate::error::Result;

pub const SENT_LABEL: &str = "Message Sent!";

/// Acknowledges `.contact-form` submissions locally; nothing is sent.
pub fn init(document: &Document, config: &ChromeConfig) -> Result<()> {
    let Some(form) = dom::query(document, ".contact-form")
        .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };

    let ack_ms = config.contact_ack_ms;
    let handle = form.clone();
    dom::listen(&form, "submit", move |e| {
        e.prevent_default();

        if let Ok(data) = FormData::new_with_form(&handle) {
            debug!(
                "Contact form submitted: name={:?} email={:?}",
                data.get("name").as_string(),
                data.get("email").as_string()
            );
        }

        let Some(button) = handle
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok())
        else {
            return;
        };

        let original = button.text_content().unwrap_or_default();
        button.set_text_content(Some(SENT_LABEL));
        button.set_disabled(true);

        let form = handle.clone();
        Timeout::new(ack_ms, move || {
            button.set_text_content(Some(&original));
            button.set_disabled(false);
            form.reset();
        })
        .forget();
    })
}
