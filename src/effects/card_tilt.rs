// Cards lean toward the pointer while it moves over them.

use crate::dom;
use crate::logging::ResultExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

pub const CARD_SELECTOR: &str = ".card, .info-card, .app-card, .strength-card";
// Pixels of pointer offset per degree of rotation
const TILT_DIVISOR: f64 = 20.0;
const ENTER_TRANSITION: &str = "transform 0.1s ease";
const LEAVE_TRANSITION: &str = "transform 0.3s ease";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Rotation for a pointer at (`x`, `y`) relative to the top-left corner of
    /// a `width` x `height` card.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Tilt {
        Tilt {
            rotate_x: (y - height / 2.0) / TILT_DIVISOR,
            rotate_y: (width / 2.0 - x) / TILT_DIVISOR,
        }
    }

    pub fn to_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-8px)",
            self.rotate_x, self.rotate_y
        )
    }
}

pub fn install(document: &Document) -> Result<(), JsValue> {
    for card in dom::query_all(document, CARD_SELECTOR)? {
        let card = match card.dyn_into::<HtmlElement>() {
            Ok(card) => card,
            Err(_) => continue,
        };

        let target = card.clone();
        dom::listen(&card, "mouseenter", move |_| {
            target
                .style()
                .set_property("transition", ENTER_TRANSITION)
                .ok_or_log_js_error();
        })?;

        let target = card.clone();
        dom::listen(&card, "mousemove", move |event| {
            let event = match event.dyn_ref::<MouseEvent>() {
                Some(event) => event,
                None => return,
            };
            let rect = target.get_bounding_client_rect();
            let tilt = Tilt::at(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
            );
            target
                .style()
                .set_property("transform", &tilt.to_transform())
                .ok_or_log_js_error();
        })?;

        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            let style = target.style();
            style
                .set_property("transition", LEAVE_TRANSITION)
                .ok_or_log_js_error();
            style.set_property("transform", "").ok_or_log_js_error();
        })?;
    }
    Ok(())
}
