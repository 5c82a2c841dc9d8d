//! Color math, contrast and harmony palettes.

mod contrast;
mod harmony;
mod math;

pub use contrast::{contrast_ratio, luminance, meets_contrast};
pub use harmony::{
    complementary, generate_palettes, monochromatic, triadic, Harmony, Palette, PALETTE_SIZE,
};
pub use math::{hex_to_hsl, hsl_to_hex, is_hex_color, normalize_hex, parse_hex, Hsl, Rgb};
