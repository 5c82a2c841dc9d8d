//! Layout rules driven by layer geometry: CTA and headline placement, centering,
//! minimum readable font size.

use super::classifier::{LayerClassifier, SemanticRole};
use crate::config::{
    RuleConfig, CTA_MIN_BOTTOM_RATIO, CTA_TARGET_BOTTOM_RATIO, HEADLINE_MAX_TOP_RATIO,
    HEADLINE_TARGET_TOP_RATIO,
};
use crate::model::{AdType, Design, Layer, LayerUpdates, Priority, Suggestion, SuggestionType};

/// Run the layout rules, in fixed rule order.
///
/// The first CTA and the first headline in traversal order are the candidates for the
/// placement and centering rules. `ad_type` is accepted for format-specific rules and
/// does not change the outcome yet.
pub fn layout_suggestions(
    design: &Design,
    ad_type: Option<AdType>,
    config: &RuleConfig,
    classifier: &dyn LayerClassifier,
) -> Vec<Suggestion> {
    let frame = &design.frame;
    let layers = design.layers_in(config.scope);
    let first_with = |role: SemanticRole| {
        layers
            .iter()
            .copied()
            .find(|layer| classifier.has_role(layer, role))
    };
    let cta = first_with(SemanticRole::CallToAction);
    let headline = first_with(SemanticRole::Headline);

    let mut suggestions = Vec::new();

    if let Some(cta) = cta {
        if cta.bottom() < frame.height * CTA_MIN_BOTTOM_RATIO {
            let target_y = frame.height * CTA_TARGET_BOTTOM_RATIO - cta.height_or_zero();
            suggestions.push(
                Suggestion::new(
                    "cta-position",
                    SuggestionType::Layout,
                    Priority::High,
                    "Move call-to-action lower",
                    "Calls to action convert better near the bottom of the ad, after the message has landed.",
                )
                .with_action(cta.id.clone(), LayerUpdates::y(target_y)),
            );
        }
    }

    if let Some(headline) = headline {
        if headline.y > frame.height * HEADLINE_MAX_TOP_RATIO {
            suggestions.push(
                Suggestion::new(
                    "headline-position",
                    SuggestionType::Layout,
                    Priority::High,
                    "Move headline to the top",
                    "Headlines are read first when they sit in the top fifth of the ad.",
                )
                .with_action(
                    headline.id.clone(),
                    LayerUpdates::y(frame.height * HEADLINE_TARGET_TOP_RATIO),
                ),
            );
        }
    }

    for layer in [cta, headline].into_iter().flatten() {
        if let Some(s) = centering_suggestion(layer, frame.center_x(), config.center_tolerance) {
            suggestions.push(s);
        }
    }

    for layer in &layers {
        if classifier.has_role(layer, SemanticRole::Disclaimer) {
            continue;
        }
        let Some(size) = layer.font_size() else {
            continue;
        };
        if size < config.min_font_size {
            suggestions.push(
                Suggestion::new(
                    format!("font-size-{}", layer.id),
                    SuggestionType::Layout,
                    Priority::Medium,
                    "Increase font size",
                    format!(
                        "'{}' is set at {}px. Text under {}px is hard to read on most screens.",
                        layer.label(),
                        size,
                        config.min_font_size
                    ),
                )
                .with_measured(size)
                .with_action(layer.id.clone(), LayerUpdates::font_size(config.min_font_size)),
            );
        }
    }

    tracing::debug!(
        count = suggestions.len(),
        ad_type = ad_type.map(|t| t.as_str()),
        "layout rules evaluated"
    );
    suggestions
}

fn centering_suggestion(layer: &Layer, frame_center: f64, tolerance: f64) -> Option<Suggestion> {
    let deviation = (layer.center_x() - frame_center).abs();
    if deviation <= tolerance {
        return None;
    }

    let target_x = frame_center - layer.width_or_zero() / 2.0;
    Some(
        Suggestion::new(
            format!("center-{}", layer.id),
            SuggestionType::Layout,
            Priority::Medium,
            format!("Center '{}'", layer.label()),
            format!(
                "'{}' is {:.0}px off the horizontal center. Centered key elements read as intentional.",
                layer.label(),
                deviation
            ),
        )
        .with_measured(deviation)
        .with_action(layer.id.clone(), LayerUpdates::x(target_x)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Frame;
    use crate::rules::NamingClassifier;
    use pretty_assertions::assert_eq;

    fn run(design: &Design) -> Vec<Suggestion> {
        layout_suggestions(design, None, &RuleConfig::default(), &NamingClassifier::default())
    }

    fn square(layers: Vec<Layer>) -> Design {
        Design::new(Frame::new(1000.0, 1000.0), layers)
    }

    fn ids(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_cta_too_high_moves_to_eighty_percent() {
        let design = square(vec![Layer::rect("btn", "#000000")
            .named("cta-button")
            .at(400.0, 400.0)
            .sized(200.0, 50.0)]);
        let suggestions = run(&design);
        assert_eq!(ids(&suggestions), vec!["cta-position"]);
        let action = suggestions[0].action.as_ref().unwrap();
        assert_eq!(action.element_id, "btn");
        assert_eq!(action.updates.y, Some(750.0));
    }

    #[test]
    fn test_cta_low_enough_is_left_alone() {
        let design = square(vec![Layer::rect("cta", "#000000").at(400.0, 700.0).sized(200.0, 50.0)]);
        assert!(run(&design).is_empty());
    }

    #[test]
    fn test_headline_too_low_moves_to_ten_percent() {
        let design = square(vec![Layer::text("headline", "Sale", 48.0, "Inter", "#000000")
            .at(300.0, 500.0)
            .sized(400.0, 60.0)]);
        let suggestions = run(&design);
        assert_eq!(ids(&suggestions), vec!["headline-position"]);
        assert_eq!(suggestions[0].action.as_ref().unwrap().updates.y, Some(100.0));
    }

    #[test]
    fn test_off_center_headline_is_recentered() {
        let design = square(vec![Layer::text("headline", "Sale", 48.0, "Inter", "#000000")
            .at(100.0, 50.0)
            .sized(400.0, 60.0)]);
        let suggestions = run(&design);
        assert_eq!(ids(&suggestions), vec!["center-headline"]);
        assert_eq!(suggestions[0].action.as_ref().unwrap().updates.x, Some(300.0));
        assert_eq!(suggestions[0].measured, Some(200.0));
    }

    #[test]
    fn test_centering_tolerance_is_inclusive() {
        let design = square(vec![Layer::text("headline", "Sale", 48.0, "Inter", "#000000")
            .at(320.0, 50.0)
            .sized(400.0, 60.0)]);
        assert!(run(&design).is_empty());
    }

    #[test]
    fn test_small_text_but_not_disclaimer() {
        let design = square(vec![
            Layer::text("body", "Fine print", 14.0, "Inter", "#000000"),
            Layer::text("legal", "Fine print", 14.0, "Inter", "#000000").named("disclaimer"),
        ]);
        let suggestions = run(&design);
        assert_eq!(ids(&suggestions), vec!["font-size-body"]);
        assert_eq!(
            suggestions[0].action.as_ref().unwrap().updates.font_size,
            Some(18.0)
        );
    }

    #[test]
    fn test_disclaimer_matching_other_keywords_keeps_small_size() {
        let design = square(vec![
            Layer::text("cta-disclaimer", "Terms apply", 12.0, "Inter", "#000000"),
            Layer::text("legal", "Offer ends soon", 12.0, "Inter", "#000000")
                .named("Headline disclaimer"),
        ]);
        let suggestions = run(&design);
        assert!(
            !suggestions.iter().any(|s| s.id.starts_with("font-size-")),
            "{:?}",
            ids(&suggestions)
        );
    }

    #[test]
    fn test_cta_bottom_exactly_at_threshold_is_left_alone() {
        // bottom = 600 + 50 = 650 = 0.65 * 1000
        let design = square(vec![Layer::rect("cta", "#000000").at(400.0, 600.0).sized(200.0, 50.0)]);
        assert!(run(&design).is_empty());
    }

    #[test]
    fn test_headline_exactly_at_threshold_is_left_alone() {
        let design = square(vec![Layer::text("headline", "Sale", 48.0, "Inter", "#000000")
            .at(300.0, 200.0)
            .sized(400.0, 60.0)]);
        assert!(run(&design).is_empty());
    }

    #[test]
    fn test_headline_just_below_threshold_moves() {
        let design = square(vec![Layer::text("headline", "Sale", 48.0, "Inter", "#000000")
            .at(300.0, 201.0)
            .sized(400.0, 60.0)]);
        assert_eq!(ids(&run(&design)), vec!["headline-position"]);
    }

    #[test]
    fn test_multiple_rules_fire_for_one_layer_in_table_order() {
        let design = square(vec![
            Layer::text("cta", "Buy", 12.0, "Inter", "#000000")
                .at(0.0, 100.0)
                .sized(200.0, 40.0),
            Layer::text("headline", "Sale", 48.0, "Inter", "#000000")
                .at(0.0, 600.0)
                .sized(200.0, 60.0),
        ]);
        assert_eq!(
            ids(&run(&design)),
            vec![
                "cta-position",
                "headline-position",
                "center-cta",
                "center-headline",
                "font-size-cta"
            ]
        );
    }

    #[test]
    fn test_only_first_cta_is_a_candidate() {
        let design = square(vec![
            Layer::rect("cta-1", "#000000").at(400.0, 800.0).sized(200.0, 50.0),
            Layer::rect("cta-2", "#000000").at(400.0, 100.0).sized(200.0, 50.0),
        ]);
        assert!(run(&design).is_empty());
    }

    #[test]
    fn test_nested_layers_need_recursive_scope() {
        let design = square(vec![Layer::group(
            "card",
            vec![Layer::text("tiny", "x", 10.0, "Inter", "#000000")],
        )]);
        assert!(run(&design).is_empty());

        let config = RuleConfig::with_scope(crate::config::TraversalScope::Recursive);
        let suggestions = layout_suggestions(&design, None, &config, &NamingClassifier::default());
        assert_eq!(ids(&suggestions), vec!["font-size-tiny"]);
    }

    #[test]
    fn test_ad_type_does_not_change_outcome() {
        let design = square(vec![Layer::text("body", "x", 12.0, "Inter", "#000000")]);
        let plain = run(&design);
        let banner = layout_suggestions(
            &design,
            Some(AdType::Banner),
            &RuleConfig::default(),
            &NamingClassifier::default(),
        );
        assert_eq!(plain, banner);
    }
}
