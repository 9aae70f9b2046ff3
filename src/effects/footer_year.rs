// Keep the footer copyright year current.

use wasm_bindgen::prelude::*;
use web_sys::Document;

pub const FOOTER_SELECTOR: &str = ".footer p";

/// Replace the first run of four digits in `html` with `year`.
pub fn replace_year(html: &str, year: u32) -> String {
    // Same match as /\d{4}/: leftmost run of four ASCII digits, always on char boundaries
    let bytes = html.as_bytes();
    let start = bytes
        .windows(4)
        .position(|window| window.iter().all(|b| b.is_ascii_digit()));
    match start {
        Some(start) => format!("{}{}{}", &html[..start], year, &html[start + 4..]),
        None => html.to_owned(),
    }
}

pub fn install(document: &Document) -> Result<(), JsValue> {
    if let Some(footer) = document.query_selector(FOOTER_SELECTOR)? {
        let year = js_sys::Date::new_0().get_full_year();
        footer.set_inner_html(&replace_year(&footer.inner_html(), year));
    }
    Ok(())
}
