//! Scroll- and pointer-driven page chrome.
//!
//! Every behavior is wired on its own: one whose markup is missing, or
//! whose wiring fails, leaves the rest untouched.

pub mod active_link;
pub mod anchors;
pub mod cards;
pub mod contact_form;
pub mod counters;
pub mod footer;
pub mod lazy_images;
pub mod navbar;
pub mod reveal;

use log::error;
use web_sys::{Document, Window};

use crate::components::mobile_nav;
use crate::config::ChromeConfig;
use crate::dom;
use crate::error::Result;

fn wire(name: &str, result: Result<()>) {
    if let Err(err) = result {
        error!("Failed to wire {}: {}", name, err);
    }
}

pub fn init(window: &Window, document: &Document, config: &ChromeConfig) {
    let nav_links = dom::query_all(document, ".nav-link");

    wire("mobile nav", mobile_nav::init(document, &nav_links));
    wire("navbar", navbar::init(window, document, config));
    wire("anchor scrolling", anchors::init(window, document));
    wire("section reveal", reveal::init_sections(window, document, config));
    wire("active nav link", active_link::init(window, document, &nav_links, config));
    wire("timeline", reveal::init_timeline(window, document, config));
    wire("cards", cards::init(document));
    wire("counters", counters::init(window, document, config));
    wire("contact form", contact_form::init(document, config));
    wire("lazy images", lazy_images::init(window, document));
    footer::init(document);
}
