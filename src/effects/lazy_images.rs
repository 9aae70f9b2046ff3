// Fade remote images in once they scroll into view and finish loading.

use crate::dom;
use crate::logging::ResultExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement, Window};

pub const IMAGE_SELECTOR: &str = "img[src*=\"unsplash\"]";

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    // Older browsers just show the images as-is
    if !js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver"))? {
        return Ok(());
    }
    let images = dom::query_all(document, IMAGE_SELECTOR)?;
    if images.is_empty() {
        return Ok(());
    }

    let observer = dom::observe_once(None, None, |target| {
        if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
            fade_in(image).ok_or_log_js_error();
        }
    })?;
    for image in &images {
        observer.observe(image);
    }
    Ok(())
}

pub fn fade_in(image: &HtmlImageElement) -> Result<(), JsValue> {
    let style = image.style();
    style.set_property("opacity", "0")?;
    style.set_property("transition", "opacity 0.5s ease")?;

    // `load` already fired for cached images, nothing would ever reveal them
    if image.complete() {
        return style.set_property("opacity", "1");
    }
    let handle = image.clone();
    let on_load = Closure::once_into_js(move || {
        handle
            .style()
            .set_property("opacity", "1")
            .ok_or_log_js_error();
    });
    image.set_onload(Some(on_load.unchecked_ref()));
    Ok(())
}
