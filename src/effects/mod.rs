// Page glue: each effect installs its own listeners and shares nothing with
// the others.

pub mod card_tilt;
pub mod footer_year;
pub mod lazy_images;
pub mod register_button;
pub mod scroll_progress;
pub mod scroll_reveal;
pub mod smooth_scroll;
