mod dom;
mod utils;

pub mod background;
pub mod color;
pub mod effects;
pub mod field;
pub mod logging;
pub mod particle;
pub mod surface;

use wasm_bindgen::prelude::*;

pub use background::ParticleBackground;
pub use color::Color;
pub use field::{Connection, FieldConfig, ParticleField};
pub use particle::Particle;
pub use surface::{CanvasSurface, Surface};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Everything `start` switched on. Only the particle background needs an
/// owner; the other effects live as long as the page.
#[wasm_bindgen]
pub struct PageEffects {
    background: Option<ParticleBackground>,
}

#[wasm_bindgen]
impl PageEffects {
    #[wasm_bindgen(js_name = hasBackground)]
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    #[wasm_bindgen(js_name = stopBackground)]
    pub fn stop_background(&mut self) {
        if let Some(background) = self.background.as_mut() {
            background.stop();
        }
    }
}

/// Wire up every page effect. Call once the document has been parsed.
#[wasm_bindgen]
pub fn start() -> Result<PageEffects, JsValue> {
    initialize();
    logging::welcome();

    let window = dom::window()?;
    let document = dom::document(&window)?;

    let background = ParticleBackground::attach(background::CANVAS_ID, None)?;
    effects::scroll_reveal::install(&document)?;
    logging::animations_ready();

    effects::scroll_progress::install(&window, &document)?;
    effects::smooth_scroll::install(&document)?;
    effects::register_button::install(&window, &document)?;
    effects::card_tilt::install(&document)?;
    effects::lazy_images::install(&window, &document)?;
    effects::footer_year::install(&document)?;
    logging::install_performance_report(&window)?;

    logging::features_ready();
    Ok(PageEffects { background })
}
