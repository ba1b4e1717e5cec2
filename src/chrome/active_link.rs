use web_sys::{Document, Element, HtmlElement, Window};
use wasm_bindgen::JsCast;

use crate::config::ChromeConfig;
use crate::dom;
use crate::error::Result;

/// Vertical extent of a page section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos < self.top + self.height
    }
}

/// Index of the section holding `pos`; the last one wins on overlap.
pub fn active_index(spans: &[SectionSpan], pos: f64) -> Option<usize> {
    spans.iter().rposition(|span| span.contains(pos))
}

struct TrackedSection {
    section: HtmlElement,
    link: Element,
}

pub fn init(window: &Window, document: &Document, nav_links: &[Element], config: &ChromeConfig) -> Result<()> {
    let tracked: Vec<TrackedSection> = dom::query_all(document, "section[id]")
        .into_iter()
        .filter_map(|section| {
            let id = section.id();
            let link = dom::query(document, &format!(".nav-link[href=\"#{}\"]", id))?;
            let section = section.dyn_into::<HtmlElement>().ok()?;
            Some(TrackedSection { section, link })
        })
        .collect();
    if tracked.is_empty() {
        return Ok(());
    }

    let nav_links = nav_links.to_vec();
    let offset = config.active_link_offset;
    let win = window.clone();
    dom::listen_passive(window, "scroll", move |_| {
        let spans: Vec<SectionSpan> = tracked
            .iter()
            .map(|tracked| SectionSpan {
                top: f64::from(tracked.section.offset_top()),
                height: f64::from(tracked.section.offset_height()),
            })
            .collect();

        if let Some(index) = active_index(&spans, dom::scroll_y(&win) + offset) {
            for link in &nav_links {
                dom::remove_class(link, "active");
            }
            dom::add_class(&tracked[index].link, "active");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn span(top: f64, height: f64) -> SectionSpan {
        SectionSpan { top, height }
    }

    #[test]
    fn picks_section_under_offset_position() {
        let spans = [span(0.0, 100.0), span(100.0, 200.0)];
        // scrollY 50 plus the 100px offset
        assert_eq!(active_index(&spans, 50.0 + 100.0), Some(1));
    }

    #[test]
    fn span_end_is_exclusive() {
        let spans = [span(0.0, 100.0), span(100.0, 200.0)];
        assert_eq!(active_index(&spans, 100.0), Some(1));
        assert_eq!(active_index(&spans, 99.9), Some(0));
        assert_eq!(active_index(&spans, 300.0), None);
    }

    #[test]
    fn last_overlapping_section_wins() {
        let spans = [span(0.0, 500.0), span(200.0, 100.0), span(900.0, 100.0)];
        assert_eq!(active_index(&spans, 250.0), Some(1));
    }
}
