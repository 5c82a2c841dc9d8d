//! adforge-core - Design analysis and suggestion engine for ad layouts.
//!
//! This library inspects a layered design (text, shapes, images, groups on a fixed frame),
//! reports consistency, accessibility and layout problems as structured suggestions, and
//! applies a chosen suggestion, palette or font pairing to produce a new design.
//!
//! # Example
//!
//! ```no_run
//! use adforge_core::{analyze_design, apply_suggestion, Design, RuleConfig};
//!
//! let json = std::fs::read_to_string("design.json").unwrap();
//! let design: Design = serde_json::from_str(&json).unwrap();
//! let analysis = analyze_design(&design, None, &RuleConfig::default()).unwrap();
//! if let Some(first) = analysis.suggestions.first() {
//!     let updated = apply_suggestion(&design, first).unwrap();
//!     println!("{}", serde_json::to_string_pretty(&updated).unwrap());
//! }
//! ```

pub mod apply;
pub mod board;
pub mod color;
pub mod config;
pub mod error;
pub mod fonts;
pub mod inspect;
pub mod model;
pub mod rules;
pub mod validation;

use serde::Serialize;

// Re-exports for convenience
pub use apply::{
    apply_contrast_fix, apply_font_pairing, apply_palette, apply_suggestion,
    apply_suggestion_action,
};
pub use board::SuggestionBoard;
pub use color::{contrast_ratio, generate_palettes, Harmony, Palette};
pub use config::{RuleConfig, TraversalScope};
pub use error::{AdvisorError, ErrorCode, Result};
pub use fonts::{find_pairing, FontPairing, PairingCategory, FONT_PAIRINGS};
pub use inspect::{inspect_design, DesignFacts};
pub use model::{
    AdType, Design, Frame, Layer, LayerKind, LayerUpdates, Priority, Suggestion,
    SuggestionAction, SuggestionType,
};
pub use rules::{analyze_suggestions, analyze_suggestions_with, LayerClassifier, NamingClassifier};
pub use validation::{quick_validate, validate_design, ValidationResult};

/// Everything the editor panel shows for one design.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Color the palettes are generated from.
    pub dominant_color: String,
    pub suggestions: Vec<Suggestion>,
    pub palettes: Vec<Palette>,
    pub font_pairings: Vec<FontPairing>,
}

/// Run a full analysis.
///
/// Suggestions come from the rule engine; palettes are generated from the design's
/// dominant color; the font pairing catalog is included as-is.
pub fn analyze_design(
    design: &Design,
    ad_type: Option<AdType>,
    config: &RuleConfig,
) -> Result<Analysis> {
    let suggestions = analyze_suggestions(design, ad_type, config);
    let dominant_color = inspect::dominant_color(design, config.scope);
    let palettes = generate_palettes(&dominant_color)?;

    tracing::debug!(
        suggestions = suggestions.len(),
        dominant = %dominant_color,
        "analysis complete"
    );

    Ok(Analysis {
        dominant_color,
        suggestions,
        palettes,
        font_pairings: FONT_PAIRINGS.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_design_uses_dominant_color() {
        let design = Design::new(
            Frame::new(800.0, 800.0),
            vec![
                Layer::rect("a", "#3366CC"),
                Layer::circle("b", "#3366cc"),
                Layer::rect("c", "#ff0000"),
            ],
        );
        let analysis = analyze_design(&design, None, &RuleConfig::default()).unwrap();
        assert_eq!(analysis.dominant_color, "#3366cc");
        assert_eq!(analysis.palettes.len(), 3);
        assert_eq!(analysis.palettes[0].colors[2], "#3366cc");
        assert_eq!(analysis.font_pairings.len(), FONT_PAIRINGS.len());
    }

    #[test]
    fn test_analyze_empty_design_falls_back_to_background() {
        let design = Design::new(Frame::new(800.0, 800.0), vec![]);
        let analysis = analyze_design(&design, None, &RuleConfig::default()).unwrap();
        assert_eq!(analysis.dominant_color, "#ffffff");
        let ids: Vec<&str> = analysis.suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["weak_hierarchy"]);
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let design = Design::new(Frame::new(100.0, 100.0), vec![]);
        let analysis = analyze_design(&design, None, &RuleConfig::default()).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("dominantColor").is_some());
        assert!(json.get("fontPairings").is_some());
    }
}
