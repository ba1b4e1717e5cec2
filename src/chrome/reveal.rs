//! One-way reveal animations for sections and timeline entries.
//!
//! Both behaviors add a class once an element's top edge comes within a
//! margin of the viewport bottom, and never take it away again.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, Window};

use crate::config::ChromeConfig;
use crate::dom;
use crate::error::Result;

pub fn within_reveal(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

/// Tracks which elements have already been revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Marks every element whose `tops[i]` is in range and returns the
    /// indices that were newly revealed by this call.
    pub fn update(&mut self, tops: &[f64], viewport_height: f64, margin: f64) -> Vec<usize> {
        let mut newly = Vec::new();
        for (index, (revealed, &top)) in self.revealed.iter_mut().zip(tops).enumerate() {
            if !*revealed && within_reveal(top, viewport_height, margin) {
                *revealed = true;
                newly.push(index);
            }
        }
        newly
    }
}

pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

struct Tracked {
    elements: Vec<Element>,
    seen: RevealSet,
}

impl Tracked {
    fn collect(document: &Document, selector: &str) -> Option<Self> {
        let elements = dom::query_all(document, selector);
        if elements.is_empty() {
            return None;
        }
        let seen = RevealSet::new(elements.len());
        Some(Self { elements, seen })
    }

    fn check(&mut self, window: &Window, margin: f64) -> Vec<usize> {
        let tops: Vec<f64> = self.elements.iter().map(dom::viewport_top).collect();
        self.seen.update(&tops, dom::viewport_height(window), margin)
    }
}

/// Adds `revealed` to `.section` elements; checked once now and on scroll.
pub fn init_sections(window: &Window, document: &Document, config: &ChromeConfig) -> Result<()> {
    let Some(tracked) = Tracked::collect(document, ".section") else {
        return Ok(());
    };
    let tracked = Rc::new(RefCell::new(tracked));
    let margin = config.section_reveal_margin;

    let reveal = {
        let tracked = Rc::clone(&tracked);
        let win = window.clone();
        move || {
            let mut tracked = tracked.borrow_mut();
            for index in tracked.check(&win, margin) {
                dom::add_class(&tracked.elements[index], "revealed");
            }
        }
    };

    reveal();
    dom::listen_passive(window, "scroll", move |_| reveal())
}

/// Adds `visible` to `.timeline-item` entries, staggered by their index.
pub fn init_timeline(window: &Window, document: &Document, config: &ChromeConfig) -> Result<()> {
    let Some(tracked) = Tracked::collect(document, ".timeline-item") else {
        return Ok(());
    };
    let tracked = Rc::new(RefCell::new(tracked));
    let margin = config.timeline_margin;
    let stagger = config.timeline_stagger_ms;

    let animate = {
        let tracked = Rc::clone(&tracked);
        let win = window.clone();
        move || {
            let mut tracked = tracked.borrow_mut();
            for index in tracked.check(&win, margin) {
                let item = tracked.elements[index].clone();
                Timeout::new(stagger_delay(index, stagger), move || {
                    dom::add_class(&item, "visible");
                })
                .forget();
            }
        }
    };

    animate();
    dom::listen_passive(window, "scroll", move |_| animate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveal_point_is_exclusive() {
        assert!(within_reveal(649.0, 800.0, 150.0));
        assert!(!within_reveal(650.0, 800.0, 150.0));
    }

    #[test]
    fn revealed_elements_stay_revealed() {
        let mut set = RevealSet::new(3);
        assert_eq!(set.update(&[100.0, 900.0, 2000.0], 800.0, 150.0), vec![0]);

        // Scrolled back up: everything is below the fold again.
        assert_eq!(set.update(&[1500.0, 2300.0, 3400.0], 800.0, 150.0), Vec::<usize>::new());
        assert!(set.is_revealed(0));

        assert_eq!(set.update(&[-900.0, 300.0, 1000.0], 800.0, 150.0), vec![1]);
        assert_eq!(set.update(&[-2000.0, -800.0, 200.0], 800.0, 150.0), vec![2]);
        assert!((0..3).all(|i| set.is_revealed(i)));
    }

    #[test]
    fn each_element_is_reported_once() {
        let mut set = RevealSet::new(2);
        assert_eq!(set.update(&[0.0, 10.0], 800.0, 100.0), vec![0, 1]);
        assert_eq!(set.update(&[0.0, 10.0], 800.0, 100.0), Vec::<usize>::new());
    }

    #[test]
    fn timeline_delay_grows_with_index() {
        assert_eq!(stagger_delay(0, 100), 0);
        assert_eq!(stagger_delay(4, 100), 400);
        assert_eq!(stagger_delay(usize::MAX, 100), u32::MAX);
    }
}
