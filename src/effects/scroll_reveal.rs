// Fade sections in the first time they scroll into view.

use crate::dom;
use crate::logging::ResultExt;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub const SECTION_SELECTOR: &str = ".fade-in-section";
pub const VISIBLE_CLASS: &str = "visible";
const THRESHOLD: f64 = 0.1;
// Trigger a little before the section bottom actually reaches the viewport edge
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn install(document: &Document) -> Result<(), JsValue> {
    let sections = dom::query_all(document, SECTION_SELECTOR)?;
    if sections.is_empty() {
        return Ok(());
    }

    let observer = dom::observe_once(Some(THRESHOLD), Some(ROOT_MARGIN), |section| {
        section.class_list().add_1(VISIBLE_CLASS).ok_or_log_js_error();
    })?;
    for section in &sections {
        observer.observe(section);
    }
    Ok(())
}
