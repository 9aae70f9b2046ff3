// Simple color struct, created from an unsigned 32 representing 0xRRGGBB.
// Opacity is supplied separately when the color is handed to the canvas,
// since connection lines fade with distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const CYAN: Color = Color { r: 0x00, g: 0xd4, b: 0xff };

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = (num >> 0) as u8;

        Color { r, g, b }
    }

    // CSS color string for fill_style / stroke_style, e.g. "rgba(0, 212, 255, 0.6)"
    pub fn to_css(&self, opacity: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            opacity.max(0.0).min(1.0)
        )
    }
}
