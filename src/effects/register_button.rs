// #register-btn: event details on click, ripple feedback on press.

use crate::dom;
use crate::logging::ResultExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

pub const BUTTON_ID: &str = "register-btn";
pub const STYLE_ID: &str = "register-btn-ripple-styles";
const RIPPLE_DURATION_MS: i32 = 600;

pub const EVENT_DETAILS: &str = "✨ Thank you for your interest!\n\n\
📋 Event Details:\n\
━━━━━━━━━━━━━━━━━━\n\
📅 Mode: Offline\n\
👥 Class: 6th to 8th\n\
🎯 Theme: Human vs AI\n\
⏱️ Duration: 1 Hour\n\n\
📞 Contact Information:\n\
━━━━━━━━━━━━━━━━━━\n\
Event Coordinator: Mrs. Monika\n\
Phone: 9508882810 / 7061930023\n\n\
We look forward to seeing your amazing work! 🚀";

const RIPPLE_STYLES: &str = "
.register-btn {
    position: relative;
    overflow: hidden;
}

@keyframes ripple-animation {
    to {
        transform: scale(4);
        opacity: 0;
    }
}
";

// Square ripple box in button-local pixels
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Box covering the whole button, centred on the pointer.
    pub fn centred_on(pointer: [f64; 2], rect_origin: [f64; 2], rect_size: [f64; 2]) -> Ripple {
        let size = rect_size[0].max(rect_size[1]);
        Ripple {
            size,
            left: pointer[0] - rect_origin[0] - size / 2.0,
            top: pointer[1] - rect_origin[1] - size / 2.0,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             border-radius: 50%; background: rgba(0, 212, 255, 0.6); transform: scale(0); \
             animation: ripple-animation {duration}s ease-out; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
            duration = RIPPLE_DURATION_MS as f64 / 1000.0,
        )
    }
}

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let button = match document
        .get_element_by_id(BUTTON_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        Some(button) => button,
        None => return Ok(()),
    };
    install_ripple_styles(document)?;

    let window_handle = window.clone();
    dom::listen(&button, "click", move |_| {
        window_handle
            .alert_with_message(EVENT_DETAILS)
            .ok_or_log_js_error();
    })?;

    let (window, document) = (window.clone(), document.clone());
    let target = button.clone();
    dom::listen(&button, "mousedown", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            spawn_ripple(&window, &document, &target, event).ok_or_log_js_error();
        }
    })
}

fn spawn_ripple(
    window: &Window,
    document: &Document,
    button: &HtmlElement,
    event: &MouseEvent,
) -> Result<(), JsValue> {
    let rect = button.get_bounding_client_rect();
    let ripple = Ripple::centred_on(
        [event.client_x() as f64, event.client_y() as f64],
        [rect.left(), rect.top()],
        [rect.width(), rect.height()],
    );

    let span = document.create_element("span")?.dyn_into::<HtmlElement>()?;
    span.style().set_css_text(&ripple.to_css());
    button.append_child(&span)?;

    let remove = Closure::once_into_js(move || span.remove());
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        remove.unchecked_ref(),
        RIPPLE_DURATION_MS,
    )?;
    Ok(())
}

fn install_ripple_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = match document.head() {
        Some(head) => head,
        None => return Ok(()),
    };
    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(RIPPLE_STYLES));
    head.append_child(&style)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centred_on_pointer() {
        let ripple = Ripple::centred_on([160.0, 420.0], [100.0, 400.0], [200.0, 50.0]);
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -40.0);
        assert_eq!(ripple.top, -80.0);
        assert_eq!(ripple.left + ripple.size / 2.0, 60.0);
        assert_eq!(ripple.top + ripple.size / 2.0, 20.0);
    }

    #[test]
    fn ripple_uses_longer_side() {
        let ripple = Ripple::centred_on([0.0, 0.0], [0.0, 0.0], [40.0, 90.0]);
        assert_eq!(ripple.size, 90.0);
    }

    #[test]
    fn ripple_css_places_box() {
        let css = Ripple { size: 80.0, left: -10.0, top: 5.5 }.to_css();
        assert!(css.contains("width: 80px; height: 80px;"));
        assert!(css.contains("left: -10px; top: 5.5px;"));
        assert!(css.contains("animation: ripple-animation 0.6s ease-out;"));
    }

    #[test]
    fn details_mention_theme_and_contact() {
        assert!(EVENT_DETAILS.contains("Theme: Human vs AI"));
        assert!(EVENT_DETAILS.contains("Phone: 9508882810 / 7061930023"));
    }
}
