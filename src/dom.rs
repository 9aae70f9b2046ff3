// Small DOM helpers shared by the page effects.

use crate::logging;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

// Attach a listener for the lifetime of the page. The closure is leaked on
// purpose: nothing ever removes these handlers.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// IntersectionObserver that hands each target to `on_visible` the first time
// it intersects, then stops watching it.
pub fn observe_once<F>(
    threshold: Option<f64>,
    root_margin: Option<&str>,
    mut on_visible: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(&Element) + 'static,
{
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(err) => {
                        logging::error("unexpected IntersectionObserver entry", &err);
                        continue;
                    }
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        options.set_threshold(&JsValue::from_f64(threshold));
    }
    if let Some(root_margin) = root_margin {
        options.set_root_margin(root_margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}
