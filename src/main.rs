use log::{error, info, warn};
use web_sys::Document;

mod chrome;
mod components;
mod config;
mod contact;
mod dom;
mod error;

use components::beta_signup;
use config::ChromeConfig;
use error::Result;

fn wire_page(document: &Document) -> Result<()> {
    let window = dom::window()?;
    let config = ChromeConfig::default();

    chrome::init(&window, document, &config);

    if let Err(err) = contact::init(document) {
        warn!("Contact links not wired: {}", err);
    }
    if let Err(err) = beta_signup::init(document, &config) {
        error!("Beta signup not wired: {}", err);
    }

    Ok(())
}

fn start(document: &Document) {
    match wire_page(document) {
        Ok(()) => info!("Personal website loaded"),
        Err(err) => error!("Page setup failed: {}", err),
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            error!("Page setup failed: {}", err);
            return;
        }
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        if let Err(err) = dom::listen(&document, "DOMContentLoaded", move |_| start(&doc)) {
            error!("Could not wait for DOMContentLoaded: {}", err);
        }
    } else {
        start(&document);
    }
}
