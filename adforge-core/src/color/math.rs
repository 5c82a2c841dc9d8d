//! Hex RGB <-> HSL conversion.

use serde::{Deserialize, Serialize};

use crate::config::float_cmp::unit;
use crate::error::{AdvisorError, Result};

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Channels normalized to `[0, 1]`.
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Hex string for this color.
    pub fn to_hex(&self) -> String {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

/// Parse a strict 7-character `#RRGGBB` string.
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| AdvisorError::invalid_color(hex))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| AdvisorError::invalid_color(hex))
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Whether `s` is a valid `#RRGGBB` color.
pub fn is_hex_color(s: &str) -> bool {
    parse_hex(s).is_ok()
}

/// Canonical lowercase form of a valid hex color.
pub fn normalize_hex(hex: &str) -> Result<String> {
    parse_hex(hex).map(|rgb| rgb.to_hex())
}

/// Convert `#RRGGBB` to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    let (r, g, b) = parse_hex(hex)?.normalized();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Ok(Hsl { h: 0.0, s: 0.0, l });
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Ok(Hsl {
        h: (h * 60.0) % 360.0,
        s,
        l,
    })
}

/// Convert HSL to lowercase `#rrggbb`.
///
/// `h` wraps modulo 360; `s` and `l` are clamped to `[0, 1]`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let h = if h.is_finite() {
        h.rem_euclid(360.0) / 360.0
    } else {
        0.0
    };
    let s = unit(s);
    let l = unit(l);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: to_byte(r),
        g: to_byte(g),
        b: to_byte(b),
    }
    .to_hex()
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(v: f64) -> u8 {
    (unit(v) * 255.0).round() as u8
}
