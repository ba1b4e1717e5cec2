use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::error::Result;

/// Selector for the in-page target of `href`, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

/// Document offset that puts `target_top` (viewport-relative) just below
/// the fixed navbar.
pub fn scroll_offset(target_top: f64, page_y: f64, nav_height: f64) -> f64 {
    target_top + page_y - nav_height
}

pub fn init(window: &Window, document: &Document) -> Result<()> {
    let navbar = dom::query(document, ".navbar").and_then(|nav| nav.dyn_into::<HtmlElement>().ok());

    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let win = window.clone();
        let doc = document.clone();
        let navbar = navbar.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |e| {
            let Some(href) = link.get_attribute("href") else { return };
            let Some(selector) = anchor_target(&href) else { return };
            let Some(target) = dom::query(&doc, selector) else { return };

            e.prevent_default();
            let nav_height = navbar.as_ref().map_or(0.0, |nav| f64::from(nav.offset_height()));
            let top = scroll_offset(dom::viewport_top(&target), dom::scroll_y(&win), nav_height);

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_hash_is_ignored() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#about"), Some("#about"));
        assert_eq!(anchor_target("/about"), None);
    }

    #[test]
    fn offset_accounts_for_navbar() {
        assert_eq!(scroll_offset(200.0, 1000.0, 70.0), 1130.0);
        assert_eq!(scroll_offset(-300.0, 1000.0, 70.0), 630.0);
    }
}
