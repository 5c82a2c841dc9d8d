//! Color harmony palettes derived from a single base color.

use serde::{Deserialize, Serialize};

use super::math::{hex_to_hsl, hsl_to_hex, normalize_hex};
use crate::config::WHITE;
use crate::error::Result;

/// Number of colors in every generated palette.
pub const PALETTE_SIZE: usize = 5;

/// Lightness bounds for the shifted monochromatic steps.
const MONO_MIN_LIGHTNESS: f64 = 0.1;
const MONO_MAX_LIGHTNESS: f64 = 0.95;

/// Color-theory relationship used to build a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    Monochromatic,
    Complementary,
    Triadic,
}

impl Harmony {
    /// Every harmony, in the order analysis reports them.
    pub const ALL: [Harmony; 3] = [
        Harmony::Monochromatic,
        Harmony::Complementary,
        Harmony::Triadic,
    ];

    /// Stable palette id.
    pub fn id(&self) -> &'static str {
        match self {
            Harmony::Monochromatic => "monochromatic",
            Harmony::Complementary => "complementary",
            Harmony::Triadic => "triadic",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Harmony::Monochromatic => "Monochromatic",
            Harmony::Complementary => "Complementary",
            Harmony::Triadic => "Triadic",
        }
    }

    /// One-line explanation shown next to the palette.
    pub fn description(&self) -> &'static str {
        match self {
            Harmony::Monochromatic => "Shades of one hue for a calm, cohesive look",
            Harmony::Complementary => "Opposite hues for strong, attention-grabbing contrast",
            Harmony::Triadic => "Three evenly spaced hues for a vibrant, balanced mix",
        }
    }

    /// The five colors of this harmony for `base`.
    pub fn colors(&self, base: &str) -> Result<[String; PALETTE_SIZE]> {
        match self {
            Harmony::Monochromatic => monochromatic(base),
            Harmony::Complementary => complementary(base),
            Harmony::Triadic => triadic(base),
        }
    }
}

/// A named five-color palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub id: String,
    pub name: String,
    pub description: String,
    pub colors: [String; PALETTE_SIZE],
}

impl Palette {
    /// Build the palette for one harmony.
    pub fn generate(harmony: Harmony, base: &str) -> Result<Self> {
        Ok(Self {
            id: harmony.id().to_string(),
            name: harmony.name().to_string(),
            description: harmony.description().to_string(),
            colors: harmony.colors(base)?,
        })
    }

    /// Primary color (index 0): text color when the palette is applied.
    pub fn primary(&self) -> &str {
        &self.colors[0]
    }

    /// Lightest color (index 4): frame background when the palette is applied.
    pub fn background(&self) -> &str {
        &self.colors[PALETTE_SIZE - 1]
    }
}

/// Five lightness steps of the base hue; index 2 is the base itself.
pub fn monochromatic(base: &str) -> Result<[String; PALETTE_SIZE]> {
    let hsl = hex_to_hsl(base)?;
    let step = |delta: f64| {
        hsl_to_hex(
            hsl.h,
            hsl.s,
            (hsl.l + delta).clamp(MONO_MIN_LIGHTNESS, MONO_MAX_LIGHTNESS),
        )
    };

    Ok([
        step(-0.30),
        step(-0.15),
        normalize_hex(base)?,
        step(0.15),
        step(0.30),
    ])
}

/// Base, its complement, a soft tint of each, and white.
pub fn complementary(base: &str) -> Result<[String; PALETTE_SIZE]> {
    let hsl = hex_to_hsl(base)?;
    let complement = hsl.h + 180.0;
    let tint_l = (hsl.l + 0.2).min(0.95);

    Ok([
        normalize_hex(base)?,
        hsl_to_hex(complement, hsl.s, hsl.l),
        hsl_to_hex(hsl.h, 0.3, tint_l),
        hsl_to_hex(complement, 0.3, tint_l),
        WHITE.to_string(),
    ])
}

/// Base, the two hues 120° away, a pale tint of the base, and white.
pub fn triadic(base: &str) -> Result<[String; PALETTE_SIZE]> {
    let hsl = hex_to_hsl(base)?;

    Ok([
        normalize_hex(base)?,
        hsl_to_hex(hsl.h + 120.0, hsl.s, hsl.l),
        hsl_to_hex(hsl.h + 240.0, hsl.s, hsl.l),
        hsl_to_hex(hsl.h, 0.2, hsl.l + 0.3),
        WHITE.to_string(),
    ])
}

/// All harmonies for `base`, in [`Harmony::ALL`] order.
pub fn generate_palettes(base: &str) -> Result<Vec<Palette>> {
    Harmony::ALL
        .iter()
        .map(|&harmony| Palette::generate(harmony, base))
        .collect()
}
