//! Text/background contrast.
//!
//! This is a simplified approximation, not the WCAG relative luminance: channels are
//! weighted with the Rec. 601 luma coefficients directly on gamma-encoded values.
//! The AA threshold of 4.5 is applied to the result as-is.

use super::math::parse_hex;
use crate::error::Result;

/// Weighted luma of a hex color, in `[0, 1]`.
pub fn luminance(hex: &str) -> Result<f64> {
    let (r, g, b) = parse_hex(hex)?.normalized();
    Ok(0.299 * r + 0.587 * g + 0.114 * b)
}

/// Contrast ratio between two colors, in `[1, 21]`, independent of argument order.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64> {
    let la = luminance(a)?;
    let lb = luminance(b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Whether `fg` on `bg` reaches `min_ratio`.
pub fn meets_contrast(fg: &str, bg: &str, min_ratio: f64) -> Result<bool> {
    Ok(contrast_ratio(fg, bg)? >= min_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{float_cmp::approx_eq, AA_NORMAL_TEXT, CONTRAST_FIX_COLOR};

    #[test]
    fn test_same_color_ratio_is_one() {
        for c in ["#000000", "#ffffff", "#3b82f6", "#cccccc"] {
            assert!(approx_eq(contrast_ratio(c, c).unwrap(), 1.0));
        }
    }

    #[test]
    fn test_black_on_white_is_maximum() {
        let max = contrast_ratio("#000000", "#ffffff").unwrap();
        assert!(approx_eq(max, 21.0));
        assert!(max > AA_NORMAL_TEXT);
        for c in ["#1f2937", "#cccccc", "#ff0000", "#777777"] {
            assert!(contrast_ratio(c, "#ffffff").unwrap() <= max);
            assert!(contrast_ratio(c, "#000000").unwrap() <= max);
        }
    }

    #[test]
    fn test_ratio_is_symmetric() {
        let a = contrast_ratio("#1f2937", "#f3f4f6").unwrap();
        let b = contrast_ratio("#f3f4f6", "#1f2937").unwrap();
        assert!(approx_eq(a, b));
    }

    #[test]
    fn test_light_gray_on_white_fails_aa() {
        // L(#cccccc) = 0.8, ratio = 1.05 / 0.85
        let ratio = contrast_ratio("#cccccc", "#ffffff").unwrap();
        assert!(approx_eq(ratio, 1.05 / 0.85));
        assert!(!meets_contrast("#cccccc", "#ffffff", AA_NORMAL_TEXT).unwrap());
    }

    #[test]
    fn test_fix_color_passes_on_white() {
        assert!(meets_contrast(CONTRAST_FIX_COLOR, "#ffffff", AA_NORMAL_TEXT).unwrap());
    }

    #[test]
    fn test_invalid_color_propagates() {
        assert!(contrast_ratio("white", "#000000").is_err());
        assert!(luminance("#00000").is_err());
    }
}
