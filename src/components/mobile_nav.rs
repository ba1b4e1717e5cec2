use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Node};

use crate::dom;
use crate::error::Result;

const ACTIVE: &str = "active";

/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawerState {
    pub open: bool,
}

impl DrawerState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

struct MobileNav {
    toggle: Element,
    menu: Element,
    state: Cell<DrawerState>,
}

impl MobileNav {
    /// Renders only on a transition; clicks while closed leave `<body>`
    /// overflow alone.
    fn update(&self, change: impl FnOnce(&mut DrawerState)) {
        let before = self.state.get();
        let mut state = before;
        change(&mut state);
        if state != before {
            self.state.set(state);
            self.render();
        }
    }

    fn render(&self) {
        let open = self.state.get().open;
        for element in [&self.toggle, &self.menu] {
            if open {
                dom::add_class(element, ACTIVE);
            } else {
                dom::remove_class(element, ACTIVE);
            }
        }
        dom::lock_body_scroll(open);
    }

    fn contains(&self, target: &Node) -> bool {
        self.menu.contains(Some(target)) || self.toggle.contains(Some(target))
    }
}

pub fn init(document: &Document, nav_links: &[Element]) -> Result<()> {
    let (Some(toggle), Some(menu)) = (
        dom::query(document, ".nav-toggle"),
        dom::query(document, ".nav-menu"),
    ) else {
        debug!("No mobile nav toggle/menu, drawer disabled");
        return Ok(());
    };

    let nav = Rc::new(MobileNav {
        toggle,
        menu,
        state: Cell::new(DrawerState::default()),
    });

    {
        let nav = Rc::clone(&nav);
        dom::listen(&nav.toggle.clone(), "click", move |_| nav.update(DrawerState::toggle))?;
    }

    for link in nav_links {
        let nav = Rc::clone(&nav);
        dom::listen(link, "click", move |_| nav.update(DrawerState::close))?;
    }

    {
        let nav = Rc::clone(&nav);
        dom::listen(document, "click", move |e| {
            let inside = e
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .map_or(false, |target| nav.contains(&target));
            if !inside {
                nav.update(DrawerState::close);
            }
        })?;
    }

    {
        let nav = Rc::clone(&nav);
        dom::listen(document, "keydown", move |e| {
            if let Some(key) = e.dyn_ref::<KeyboardEvent>() {
                if key.key() == "Escape" && nav.state.get().open {
                    nav.update(DrawerState::close);
                }
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_close_is_idempotent() {
        let mut state = DrawerState::default();
        state.toggle();
        assert!(state.open);
        state.toggle();
        assert!(!state.open);

        state.toggle();
        state.close();
        state.close();
        assert!(!state.open);
    }
}
