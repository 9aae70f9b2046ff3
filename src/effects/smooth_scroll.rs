// In-page anchor links scroll smoothly instead of jumping.

use crate::dom;
use crate::logging::ResultExt;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector for the element an in-page `href` points at.
///
/// A bare `#` (the usual placeholder link) has no target.
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

pub fn install(document: &Document) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR)? {
        let document = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = match link.get_attribute("href") {
                Some(href) => href,
                None => return,
            };
            if let Some(selector) = anchor_selector(&href) {
                if let Some(Some(target)) = document.query_selector(selector).ok_or_log_js_error() {
                    scroll_to(&target);
                }
            }
        })?;
    }
    Ok(())
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_have_targets() {
        assert_eq!(anchor_selector("#about"), Some("#about"));
        assert_eq!(anchor_selector("#faq-2"), Some("#faq-2"));
    }

    #[test]
    fn placeholder_and_external_links_do_not() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector(""), None);
        assert_eq!(anchor_selector("https://example.com/#top"), None);
    }
}
