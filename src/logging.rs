// Console output: styled banners, a load-time performance report, and a
// console.time guard for measuring sections of work.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, PerformanceNavigationTiming, Window};

const ACCENT_CYAN: &str = "color: #00d4ff";
const ACCENT_GREEN: &str = "color: #10b981";
const ACCENT_PURPLE: &str = "color: #7c3aed";

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

pub trait ResultExt<T> {
    // Log the error to the console and carry on without the value
    fn ok_or_log_js_error(self) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T, JsValue> {
    fn ok_or_log_js_error(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                error("page effects", &err);
                None
            }
        }
    }
}

pub fn error(context: &str, err: &JsValue) {
    console::error_2(&JsValue::from_str(context), err);
}

pub fn styled(message: &str, css: &str) {
    console::log_2(
        &JsValue::from_str(&format!("%c{}", message)),
        &JsValue::from_str(css),
    );
}

pub fn welcome() {
    styled(
        "🧠 Human Intelligence vs 🤖 Artificial Intelligence",
        &format!(
            "{}; font-size: 24px; font-weight: bold; text-shadow: 0 0 10px rgba(0, 212, 255, 0.5);",
            ACCENT_CYAN
        ),
    );
    styled(
        "Welcome to the ultimate comparison!",
        &format!("{}; font-size: 16px; font-weight: bold;", ACCENT_PURPLE),
    );
    styled(
        "Built with Rust and WebAssembly",
        "color: #f59e0b; font-size: 12px;",
    );
    styled("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━", "color: #64748b;");
}

pub fn animations_ready() {
    styled(
        "🚀 Animations Initialized",
        &format!("{}; font-size: 16px; font-weight: bold;", ACCENT_CYAN),
    );
}

pub fn features_ready() {
    styled(
        "✅ All features initialized successfully!",
        &format!("{}; font-weight: bold; font-size: 14px;", ACCENT_GREEN),
    );
}

// Report load timing once the window `load` event fires, or right away if
// the page already finished loading before we got here.
pub fn install_performance_report(window: &Window) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    if document.ready_state() == "complete" {
        report_performance(window);
        return Ok(());
    }

    let handle = window.clone();
    let on_load = Closure::once_into_js(move || report_performance(&handle));
    window.add_event_listener_with_callback("load", on_load.unchecked_ref())
}

fn report_performance(window: &Window) {
    let performance = match window.performance() {
        Some(performance) => performance,
        None => return,
    };
    styled(
        &format!("⚡ Page loaded in {:.2}ms", performance.now()),
        &format!("{}; font-weight: bold; font-size: 14px;", ACCENT_GREEN),
    );

    let navigation = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<PerformanceNavigationTiming>();
    if let Ok(timing) = navigation {
        styled(
            "📊 Performance Metrics:",
            &format!("{}; font-weight: bold; font-size: 14px;", ACCENT_PURPLE),
        );
        console::log_1(
            &format!(
                "  DOM Content Loaded: {:.2}ms",
                timing.dom_content_loaded_event_end()
            )
            .into(),
        );
        console::log_1(&format!("  Load Complete: {:.2}ms", timing.load_event_end()).into());
    }
}
