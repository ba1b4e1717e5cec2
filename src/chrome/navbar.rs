use web_sys::{Document, Window};

use crate::config::ChromeConfig;
use crate::dom;
use crate::error::Result;

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Shrinks the fixed navbar once the page leaves the top.
pub fn init(window: &Window, document: &Document, config: &ChromeConfig) -> Result<()> {
    let Some(navbar) = dom::query(document, ".navbar") else {
        return Ok(());
    };

    let threshold = config.navbar_shrink_offset;
    let win = window.clone();
    dom::listen(window, "scroll", move |_| {
        if is_scrolled(dom::scroll_y(&win), threshold) {
            dom::add_class(&navbar, "scrolled");
        } else {
            dom::remove_class(&navbar, "scrolled");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinks_strictly_past_threshold() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }
}
