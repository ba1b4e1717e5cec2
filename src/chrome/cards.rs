use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use crate::dom;
use crate::error::Result;

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

/// 3D tilt for a pointer at `(x, y)` relative to a `width`×`height` card.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let rotate_x = (y - height / 2.0) / 20.0;
    let rotate_y = (width / 2.0 - x) / 20.0;
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-4px)",
        rotate_x, rotate_y
    )
}

/// Hover lift on `.skill-category` and pointer tilt on `.project-card`.
pub fn init(document: &Document) -> Result<()> {
    for card in dom::query_all(document, ".skill-category") {
        let target = card.clone();
        dom::listen(&card, "mouseenter", move |_| {
            dom::set_style(&target, "transform", "translateY(-4px)");
        })?;
        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            dom::set_style(&target, "transform", "translateY(0)");
        })?;
    }

    for card in dom::query_all(document, ".project-card") {
        let target = card.clone();
        dom::listen(&card, "mousemove", move |e| {
            let Some(mouse) = e.dyn_ref::<MouseEvent>() else { return };
            let rect = target.get_bounding_client_rect();
            let transform = tilt_transform(
                f64::from(mouse.client_x()) - rect.left(),
                f64::from(mouse.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
            );
            dom::set_style(&target, "transform", &transform);
        })?;
        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            dom::set_style(&target, "transform", TILT_RESET);
        })?;
    }

    Ok(())
}
