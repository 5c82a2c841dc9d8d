//! Semantic roles for layers, used to pick layout rule candidates.

use serde::Serialize;

use crate::model::Layer;

/// What a layer does on the ad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticRole {
    CallToAction,
    Headline,
    Disclaimer,
}

/// Assigns a semantic role to a layer, or none.
pub trait LayerClassifier {
    /// The layer's primary role.
    fn classify(&self, layer: &Layer) -> Option<SemanticRole>;

    /// Whether the layer carries `role`, even if another role takes precedence.
    fn has_role(&self, layer: &Layer, role: SemanticRole) -> bool {
        self.classify(layer) == Some(role)
    }
}

impl<F> LayerClassifier for F
where
    F: Fn(&Layer) -> Option<SemanticRole>,
{
    fn classify(&self, layer: &Layer) -> Option<SemanticRole> {
        self(layer)
    }
}

/// Matches keywords as case-insensitive substrings of a layer's id or name.
///
/// Keywords are tried in order; the first hit wins.
#[derive(Debug, Clone)]
pub struct NamingClassifier {
    keywords: Vec<(String, SemanticRole)>,
}

impl Default for NamingClassifier {
    fn default() -> Self {
        Self {
            keywords: vec![
                ("cta".to_string(), SemanticRole::CallToAction),
                ("headline".to_string(), SemanticRole::Headline),
                ("disclaimer".to_string(), SemanticRole::Disclaimer),
            ],
        }
    }
}

impl NamingClassifier {
    /// Classifier with no keywords.
    pub fn empty() -> Self {
        Self {
            keywords: Vec::new(),
        }
    }

    /// Add a keyword, checked after the existing ones.
    pub fn with_keyword(mut self, keyword: impl Into<String>, role: SemanticRole) -> Self {
        self.keywords.push((keyword.into().to_lowercase(), role));
        self
    }
}

impl NamingClassifier {
    fn matching_roles<'a>(&'a self, layer: &Layer) -> impl Iterator<Item = SemanticRole> + 'a {
        let id = layer.id.to_lowercase();
        let name = layer.name.as_deref().map(str::to_lowercase);

        self.keywords
            .iter()
            .filter(move |(keyword, _)| {
                id.contains(keyword.as_str())
                    || name.as_deref().is_some_and(|n| n.contains(keyword.as_str()))
            })
            .map(|(_, role)| *role)
    }
}

impl LayerClassifier for NamingClassifier {
    fn classify(&self, layer: &Layer) -> Option<SemanticRole> {
        self.matching_roles(layer).next()
    }

    fn has_role(&self, layer: &Layer, role: SemanticRole) -> bool {
        self.matching_roles(layer).any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_id_or_name() {
        let classifier = NamingClassifier::default();
        let by_id = Layer::rect("cta-button", "#000000");
        let by_name = Layer::text("layer-7", "Big sale", 40.0, "Inter", "#000000").named("Main Headline");
        let plain = Layer::rect("background", "#ffffff");

        assert_eq!(classifier.classify(&by_id), Some(SemanticRole::CallToAction));
        assert_eq!(classifier.classify(&by_name), Some(SemanticRole::Headline));
        assert_eq!(classifier.classify(&plain), None);
    }

    #[test]
    fn test_disclaimer_role() {
        let classifier = NamingClassifier::default();
        let layer = Layer::text("t9", "Terms apply", 10.0, "Inter", "#666666").named("disclaimer");
        assert_eq!(classifier.classify(&layer), Some(SemanticRole::Disclaimer));
    }

    #[test]
    fn test_layer_matching_several_keywords() {
        let classifier = NamingClassifier::default();
        let layer = Layer::text("cta-disclaimer", "Terms apply", 10.0, "Inter", "#666666");

        assert_eq!(classifier.classify(&layer), Some(SemanticRole::CallToAction));
        assert!(classifier.has_role(&layer, SemanticRole::CallToAction));
        assert!(classifier.has_role(&layer, SemanticRole::Disclaimer));
        assert!(!classifier.has_role(&layer, SemanticRole::Headline));
    }

    #[test]
    fn test_closure_has_role_uses_classify() {
        let everything_headline = |_: &Layer| Some(SemanticRole::Headline);
        let layer = Layer::rect("r", "#000000");
        assert!(everything_headline.has_role(&layer, SemanticRole::Headline));
        assert!(!everything_headline.has_role(&layer, SemanticRole::Disclaimer));
    }

    #[test]
    fn test_custom_keywords() {
        let classifier = NamingClassifier::empty().with_keyword("BUY", SemanticRole::CallToAction);
        assert_eq!(
            classifier.classify(&Layer::rect("buy-now", "#000000")),
            Some(SemanticRole::CallToAction)
        );
        assert_eq!(classifier.classify(&Layer::rect("cta", "#000000")), None);
    }

    #[test]
    fn test_closure_classifier() {
        let only_text = |layer: &Layer| layer.is_text().then_some(SemanticRole::Headline);
        assert_eq!(
            only_text.classify(&Layer::text("t", "x", 10.0, "Inter", "#000000")),
            Some(SemanticRole::Headline)
        );
        assert_eq!(only_text.classify(&Layer::rect("r", "#000000")), None);
    }
}
