use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, Window};

use crate::dom;
use crate::error::Result;

/// Swaps `data-src` into `src` and flags the image as loaded.
fn load(image: &Element) {
    if let Some(src) = image.get_attribute("data-src") {
        let _ = image.set_attribute("src", &src);
        dom::add_class(image, "loaded");
    }
}

/// Defers `img[data-src]` loads until each image scrolls into view.
pub fn init(window: &Window, document: &Document) -> Result<()> {
    if !Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        debug!("IntersectionObserver unavailable, images load eagerly");
        return Ok(());
    }

    let images = dom::query_all(document, "img[data-src]");
    if images.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let image = entry.target();
                load(&image);
                observer.unobserve(&image);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for image in &images {
        observer.observe(image);
    }
    debug!("Lazy-loading {} images", images.len());
    Ok(())
}
