//! Structural validation of incoming designs.

use std::collections::HashSet;

use crate::color::is_hex_color;
use crate::config::TraversalScope;
use crate::error::{AdvisorError, Result};
use crate::model::Design;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Validate a design before analysis.
///
/// Errors: non-positive frame size, duplicate layer ids anywhere in the tree.
/// Warnings: non-hex colors (they are left out of analysis) and non-positive font sizes.
pub fn validate_design(design: &Design) -> ValidationResult {
    let mut result = ValidationResult::ok();

    // Check frame dimensions
    let frame = &design.frame;
    if frame.width <= 0.0 || frame.height <= 0.0 {
        result.add_error(format!(
            "Frame: Invalid dimensions ({}x{})",
            frame.width, frame.height
        ));
    }

    if !is_hex_color(&frame.background_color) {
        result.add_warning(format!(
            "Frame: Background '{}' is not a #RRGGBB color",
            frame.background_color
        ));
    }

    let mut seen = HashSet::new();
    for layer in design.layers_in(TraversalScope::Recursive) {
        if layer.id.trim().is_empty() {
            result.add_error("Layer with empty id");
        } else if !seen.insert(layer.id.as_str()) {
            result.add_error(format!("Layer {}: Duplicate id", layer.id));
        }

        if let Some(fill) = layer.fill() {
            if !is_hex_color(fill) {
                result.add_warning(format!(
                    "Layer {}: Fill '{}' is not a #RRGGBB color",
                    layer.id, fill
                ));
            }
        }

        if let Some(size) = layer.font_size() {
            if size <= 0.0 {
                result.add_warning(format!("Layer {}: Non-positive font size {}", layer.id, size));
            }
        }

        for (dimension, value) in [("width", layer.width), ("height", layer.height)] {
            if value.is_some_and(|v| v < 0.0) {
                result.add_warning(format!("Layer {}: Negative {}", layer.id, dimension));
            }
        }
    }

    result
}

/// Fail with [`AdvisorError::InvalidDesign`] if validation reports errors.
pub fn quick_validate(design: &Design) -> Result<()> {
    let result = validate_design(design);

    if !result.passed {
        return Err(AdvisorError::InvalidDesign {
            message: result.errors.join("; "),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Frame, Layer};

    fn create_basic_design() -> Design {
        Design::new(
            Frame::new(1080.0, 1080.0),
            vec![
                Layer::text("title", "Sale", 48.0, "Inter", "#111111"),
                Layer::rect("bg", "#f5f5f5").sized(1080.0, 1080.0),
            ],
        )
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_add_warning() {
        let mut result = ValidationResult::ok();
        result.add_warning("This is a warning");
        assert!(result.passed); // Warnings don't fail validation
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_add_error() {
        let mut result = ValidationResult::ok();
        result.add_error("This is an error");
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
    }

    // ==================== validate_design tests ====================

    #[test]
    fn test_validate_design_valid() {
        let result = validate_design(&create_basic_design());
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_design_invalid_frame() {
        let mut design = create_basic_design();
        design.frame.height = 0.0;
        let result = validate_design(&design);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("Invalid dimensions")));
    }

    #[test]
    fn test_validate_design_duplicate_nested_id() {
        let mut design = create_basic_design();
        design
            .layers
            .push(Layer::group("g", vec![Layer::rect("bg", "#000000")]));
        let result = validate_design(&design);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e == "Layer bg: Duplicate id"));
    }

    #[test]
    fn test_validate_design_bad_colors_are_warnings() {
        let mut design = create_basic_design();
        design.frame.background_color = "white".to_string();
        design.layers.push(Layer::circle("dot", "red"));
        let result = validate_design(&design);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_validate_design_font_size_warning() {
        let mut design = create_basic_design();
        design
            .layers
            .push(Layer::text("zero", "x", 0.0, "Inter", "#000000"));
        let result = validate_design(&design);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("font size")));
    }

    // ==================== quick_validate tests ====================

    #[test]
    fn test_quick_validate_success() {
        assert!(quick_validate(&create_basic_design()).is_ok());
    }

    #[test]
    fn test_quick_validate_failure() {
        let mut design = create_basic_design();
        design.frame.width = -100.0;
        let err = quick_validate(&design).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidDesign { .. }));
    }
}
