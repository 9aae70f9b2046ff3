// Width of the #scroll-progress bar tracks how far down the page we are.

use crate::dom;
use crate::logging::ResultExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub const PROGRESS_ID: &str = "scroll-progress";

/// Percentage of the scrollable height already scrolled, in [0, 100].
///
/// A page that fits in the viewport has nothing to scroll and reports 0.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).max(0.0).min(100.0)
}

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let bar = match document
        .get_element_by_id(PROGRESS_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        Some(bar) => bar,
        None => return Ok(()),
    };

    update(window, document, &bar)?;

    let (window_handle, document) = (window.clone(), document.clone());
    dom::listen(window, "scroll", move |_| {
        update(&window_handle, &document, &bar).ok_or_log_js_error();
    })
}

fn update(window: &Window, document: &Document, bar: &HtmlElement) -> Result<(), JsValue> {
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("No document element"))?;
    let percent = progress_percent(
        window.scroll_y()?,
        root.scroll_height() as f64,
        root.client_height() as f64,
    );
    bar.style().set_property("width", &format!("{}%", percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_middle_bottom() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn page_without_scroll_reports_zero() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(progress_percent(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(2100.0, 3000.0, 1000.0), 100.0);
    }
}
