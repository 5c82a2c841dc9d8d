//! Consistency rules: color count, font count, contrast, hierarchy.

use crate::config::{RuleConfig, CONTRAST_FIX_COLOR};
use crate::inspect::{inspect_design, DesignFacts};
use crate::model::{Design, LayerUpdates, Priority, Suggestion, SuggestionType};

/// Id prefix of per-layer contrast suggestions.
pub const CONTRAST_PREFIX: &str = "contrast_";

/// Run the consistency rules on a design.
pub fn consistency_suggestions(design: &Design, config: &RuleConfig) -> Vec<Suggestion> {
    let facts = inspect_design(design, config);
    suggestions_from_facts(&facts, config)
}

/// Run the consistency rules on already-extracted facts, in fixed rule order.
pub fn suggestions_from_facts(facts: &DesignFacts, config: &RuleConfig) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if facts.colors.len() > config.max_colors {
        suggestions.push(Suggestion::new(
            "too_many_colors",
            SuggestionType::Colors,
            Priority::High,
            "Too many colors",
            format!(
                "Your design uses {} different colors. Stick to 3-4 main colors for a cohesive look.",
                facts.colors.len()
            ),
        ));
    }

    if facts.fonts.len() > config.max_fonts {
        suggestions.push(Suggestion::new(
            "too_many_fonts",
            SuggestionType::Typography,
            Priority::Medium,
            "Too many fonts",
            format!(
                "Your design uses {} font families ({}). Stick to 1-2 font families.",
                facts.fonts.len(),
                facts.fonts.join(", ")
            ),
        ));
    }

    for issue in &facts.contrast_issues {
        suggestions.push(
            Suggestion::new(
                format!("{}{}", CONTRAST_PREFIX, issue.layer_id),
                SuggestionType::Accessibility,
                Priority::High,
                "Poor contrast",
                format!(
                    "Text layer '{}' has a contrast ratio of {:.2}:1. Aim for at least {:.1}:1 so it stays readable.",
                    issue.layer_id, issue.current, issue.recommended
                ),
            )
            .with_measured(issue.current)
            .with_action(issue.layer_id.clone(), LayerUpdates::fill(CONTRAST_FIX_COLOR)),
        );
    }

    if !facts.hierarchy.has_proper_hierarchy {
        suggestions.push(Suggestion::new(
            "weak_hierarchy",
            SuggestionType::Typography,
            Priority::Medium,
            "Weak visual hierarchy",
            format!(
                "Use clearly different font sizes for headings and body text (at least {}px apart).",
                config.min_hierarchy_range
            ),
        ));
    }

    tracing::debug!(count = suggestions.len(), "consistency rules evaluated");
    suggestions
}
