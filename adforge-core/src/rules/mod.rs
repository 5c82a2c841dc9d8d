//! Suggestion rule engine: consistency and layout pipelines.

mod classifier;
mod consistency;
mod layout;

pub use classifier::{LayerClassifier, NamingClassifier, SemanticRole};
pub use consistency::{consistency_suggestions, suggestions_from_facts, CONTRAST_PREFIX};
pub use layout::layout_suggestions;

use crate::config::RuleConfig;
use crate::model::{AdType, Design, Suggestion};

/// Run both pipelines with the default naming classifier.
pub fn analyze_suggestions(
    design: &Design,
    ad_type: Option<AdType>,
    config: &RuleConfig,
) -> Vec<Suggestion> {
    analyze_suggestions_with(design, ad_type, config, &NamingClassifier::default())
}

/// Run consistency rules, then layout rules, concatenating their output.
pub fn analyze_suggestions_with(
    design: &Design,
    ad_type: Option<AdType>,
    config: &RuleConfig,
    classifier: &dyn LayerClassifier,
) -> Vec<Suggestion> {
    let mut suggestions = consistency_suggestions(design, config);
    suggestions.extend(layout_suggestions(design, ad_type, config, classifier));

    debug_assert!(
        has_unique_ids(&suggestions),
        "suggestion ids collide within one run"
    );
    suggestions
}

fn has_unique_ids(suggestions: &[Suggestion]) -> bool {
    let mut seen = std::collections::HashSet::new();
    suggestions.iter().all(|s| seen.insert(s.id.as_str()))
}
