//! Contrast and typographic hierarchy checks on text layers.

use serde::Serialize;

use crate::color::contrast_ratio;
use crate::config::{float_cmp, TraversalScope};
use crate::model::Design;

/// A text layer whose contrast against the frame background is too low.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastIssue {
    pub layer_id: String,
    /// Measured ratio.
    pub current: f64,
    /// Threshold the layer failed.
    pub recommended: f64,
}

/// Font size variety among text layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyReport {
    /// Distinct sizes, ascending.
    pub sizes: Vec<f64>,
    pub has_proper_hierarchy: bool,
}

impl HierarchyReport {
    /// Largest minus smallest size; zero with fewer than two sizes.
    pub fn range(&self) -> f64 {
        match (self.sizes.first(), self.sizes.last()) {
            (Some(min), Some(max)) => max - min,
            _ => 0.0,
        }
    }
}

/// Text layers in scope with contrast below `threshold` against the frame background.
///
/// Layers whose fill, or a frame whose background, is not a hex color are skipped.
pub fn contrast_issues(design: &Design, scope: TraversalScope, threshold: f64) -> Vec<ContrastIssue> {
    let background = &design.frame.background_color;

    design
        .text_layers(scope)
        .into_iter()
        .filter_map(|layer| {
            let fill = layer.fill()?;
            match contrast_ratio(fill, background) {
                Ok(ratio) if ratio < threshold => Some(ContrastIssue {
                    layer_id: layer.id.clone(),
                    current: ratio,
                    recommended: threshold,
                }),
                Ok(_) => None,
                Err(err) => {
                    tracing::debug!(layer_id = %layer.id, %err, "skipping contrast check");
                    None
                }
            }
        })
        .collect()
}

/// Distinct font sizes and whether they span at least `min_range`.
pub fn hierarchy_report(design: &Design, scope: TraversalScope, min_range: f64) -> HierarchyReport {
    let mut sizes: Vec<f64> = design
        .text_layers(scope)
        .into_iter()
        .filter_map(|layer| layer.font_size())
        .collect();
    sizes.sort_by(f64::total_cmp);
    sizes.dedup_by(|a, b| float_cmp::approx_eq(*a, *b));

    let mut report = HierarchyReport {
        sizes,
        has_proper_hierarchy: false,
    };
    report.has_proper_hierarchy = report.sizes.len() >= 2 && report.range() >= min_range;
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AA_NORMAL_TEXT, MIN_HIERARCHY_RANGE};
    use crate::model::{Frame, Layer};

    fn design(layers: Vec<Layer>) -> Design {
        Design::new(Frame::new(600.0, 400.0), layers)
    }

    // ==================== contrast_issues tests ====================

    #[test]
    fn test_light_text_on_white_is_flagged() {
        let d = design(vec![
            Layer::text("faint", "Hi", 20.0, "Inter", "#cccccc"),
            Layer::text("dark", "Hi", 20.0, "Inter", "#111111"),
        ]);
        let issues = contrast_issues(&d, TraversalScope::TopLevel, AA_NORMAL_TEXT);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].layer_id, "faint");
        assert!(issues[0].current < AA_NORMAL_TEXT);
        assert_eq!(issues[0].recommended, AA_NORMAL_TEXT);
    }

    #[test]
    fn test_contrast_uses_frame_background() {
        let mut d = design(vec![Layer::text("t", "Hi", 20.0, "Inter", "#ffffff")]);
        assert_eq!(contrast_issues(&d, TraversalScope::TopLevel, AA_NORMAL_TEXT).len(), 1);

        d.frame.background_color = "#000000".to_string();
        assert!(contrast_issues(&d, TraversalScope::TopLevel, AA_NORMAL_TEXT).is_empty());
    }

    #[test]
    fn test_contrast_skips_unparseable_colors() {
        let d = design(vec![Layer::text("t", "Hi", 20.0, "Inter", "currentColor")]);
        assert!(contrast_issues(&d, TraversalScope::TopLevel, AA_NORMAL_TEXT).is_empty());
    }

    #[test]
    fn test_contrast_ignores_non_text_layers() {
        let d = design(vec![Layer::rect("r", "#ffffff")]);
        assert!(contrast_issues(&d, TraversalScope::TopLevel, AA_NORMAL_TEXT).is_empty());
    }

    // ==================== hierarchy_report tests ====================

    #[test]
    fn test_hierarchy_requires_two_sizes_and_range() {
        let flat = design(vec![
            Layer::text("a", "A", 24.0, "Inter", "#000000"),
            Layer::text("b", "B", 24.0, "Inter", "#000000"),
        ]);
        let report = hierarchy_report(&flat, TraversalScope::TopLevel, MIN_HIERARCHY_RANGE);
        assert_eq!(report.sizes, vec![24.0]);
        assert!(!report.has_proper_hierarchy);

        let narrow = design(vec![
            Layer::text("a", "A", 24.0, "Inter", "#000000"),
            Layer::text("b", "B", 18.0, "Inter", "#000000"),
        ]);
        assert!(!hierarchy_report(&narrow, TraversalScope::TopLevel, MIN_HIERARCHY_RANGE).has_proper_hierarchy);

        let strong = design(vec![
            Layer::text("a", "A", 48.0, "Inter", "#000000"),
            Layer::text("b", "B", 16.0, "Inter", "#000000"),
            Layer::text("c", "C", 32.0, "Inter", "#000000"),
        ]);
        let report = hierarchy_report(&strong, TraversalScope::TopLevel, MIN_HIERARCHY_RANGE);
        assert_eq!(report.sizes, vec![16.0, 32.0, 48.0]);
        assert_eq!(report.range(), 32.0);
        assert!(report.has_proper_hierarchy);
    }

    #[test]
    fn test_hierarchy_range_boundary_is_inclusive() {
        let d = design(vec![
            Layer::text("a", "A", 32.0, "Inter", "#000000"),
            Layer::text("b", "B", 16.0, "Inter", "#000000"),
        ]);
        assert!(hierarchy_report(&d, TraversalScope::TopLevel, 16.0).has_proper_hierarchy);
    }

    #[test]
    fn test_hierarchy_without_text() {
        let report = hierarchy_report(&design(vec![]), TraversalScope::TopLevel, MIN_HIERARCHY_RANGE);
        assert!(report.sizes.is_empty());
        assert_eq!(report.range(), 0.0);
        assert!(!report.has_proper_hierarchy);
    }
}
