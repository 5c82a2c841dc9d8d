//! Rule thresholds and tuning settings for the analysis engine.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Default frame background when a document omits it.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Pure white, the light end of generated palettes.
pub const WHITE: &str = "#ffffff";

/// Fill assigned to text layers by the contrast fix (slate-800).
pub const CONTRAST_FIX_COLOR: &str = "#1f2937";

/// Minimum contrast ratio for normal-size text (AA).
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// More distinct colors than this triggers a consistency suggestion.
pub const MAX_COLORS: usize = 5;

/// More distinct font families than this triggers a consistency suggestion.
pub const MAX_FONTS: usize = 2;

/// Minimum spread between smallest and largest font size for a visible hierarchy.
pub const MIN_HIERARCHY_RANGE: f64 = 16.0;

/// Smallest readable font size on an ad.
pub const MIN_READABLE_FONT_SIZE: f64 = 18.0;

/// Font size at or above which a text layer counts as a heading.
pub const HEADING_FONT_SIZE: f64 = 24.0;

/// CTA bottom edge above this fraction of frame height is too high.
pub const CTA_MIN_BOTTOM_RATIO: f64 = 0.65;

/// Fraction of frame height where a repositioned CTA's bottom edge lands.
pub const CTA_TARGET_BOTTOM_RATIO: f64 = 0.8;

/// Headline top below this fraction of frame height is too low.
pub const HEADLINE_MAX_TOP_RATIO: f64 = 0.2;

/// Fraction of frame height where a repositioned headline's top lands.
pub const HEADLINE_TARGET_TOP_RATIO: f64 = 0.1;

/// Allowed horizontal deviation from the frame center, in pixels.
pub const CENTER_TOLERANCE_PX: f64 = 20.0;

/// Whether a pass visits only top-level layers or the whole group tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalScope {
    /// Only the design's direct children. Groups count as opaque layers.
    #[default]
    TopLevel,
    /// Every layer, descending into groups depth-first.
    Recursive,
}

impl std::fmt::Display for TraversalScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalScope::TopLevel => write!(f, "top-level"),
            TraversalScope::Recursive => write!(f, "recursive"),
        }
    }
}

/// Tunable thresholds for both rule pipelines.
///
/// Every field falls back to its default when missing from a JSON config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleConfig {
    /// Maximum distinct colors before suggesting a reduction.
    pub max_colors: usize,
    /// Maximum distinct font families before suggesting a reduction.
    pub max_fonts: usize,
    /// Contrast ratio below which a text layer is flagged.
    pub min_contrast: f64,
    /// Minimum font size spread for a proper hierarchy.
    pub min_hierarchy_range: f64,
    /// Smallest font size that does not trigger a layout suggestion.
    pub min_font_size: f64,
    /// Allowed horizontal deviation from the frame center.
    pub center_tolerance: f64,
    /// Scope for extraction, palette application and layout rules.
    pub scope: TraversalScope,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_colors: MAX_COLORS,
            max_fonts: MAX_FONTS,
            min_contrast: AA_NORMAL_TEXT,
            min_hierarchy_range: MIN_HIERARCHY_RANGE,
            min_font_size: MIN_READABLE_FONT_SIZE,
            center_tolerance: CENTER_TOLERANCE_PX,
            scope: TraversalScope::TopLevel,
        }
    }
}

impl RuleConfig {
    /// Default thresholds with the given traversal scope.
    pub fn with_scope(scope: TraversalScope) -> Self {
        Self {
            scope,
            ..Default::default()
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Clamp to the unit interval, mapping NaN to zero.
    #[inline]
    pub fn unit(a: f64) -> f64 {
        if a.is_nan() {
            0.0
        } else {
            a.clamp(0.0, 1.0)
        }
    }
}
