//! Suggestion records emitted by the rule engine.

use serde::{Deserialize, Serialize};

use super::updates::LayerUpdates;

/// What aspect of the design a suggestion addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Colors,
    Typography,
    Accessibility,
    Layout,
}

impl std::fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionType::Colors => write!(f, "colors"),
            SuggestionType::Typography => write!(f, "typography"),
            SuggestionType::Accessibility => write!(f, "accessibility"),
            SuggestionType::Layout => write!(f, "layout"),
        }
    }
}

/// Urgency of a suggestion. Orders `High < Medium < Low` so sorting puts urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Concrete mutation a suggestion prescribes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionAction {
    /// Target layer id, resolved anywhere in the tree.
    pub element_id: String,
    pub updates: LayerUpdates,
}

/// A proposed fix to a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Unique within one analysis run; derived from the rule and, per layer, the layer id.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// Offending measurement, e.g. the contrast ratio that triggered the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<SuggestionAction>,
}

impl Suggestion {
    /// Create a suggestion with no action.
    pub fn new(
        id: impl Into<String>,
        kind: SuggestionType,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            priority,
            title: title.into(),
            description: description.into(),
            measured: None,
            action: None,
        }
    }

    /// Attach a concrete action on one layer.
    pub fn with_action(mut self, element_id: impl Into<String>, updates: LayerUpdates) -> Self {
        self.action = Some(SuggestionAction {
            element_id: element_id.into(),
            updates,
        });
        self
    }

    /// Attach the measurement that triggered the rule.
    pub fn with_measured(mut self, value: f64) -> Self {
        self.measured = Some(value);
        self
    }

    /// Target layer id, if the suggestion carries an action.
    pub fn target(&self) -> Option<&str> {
        self.action.as_ref().map(|a| a.element_id.as_str())
    }

    /// Whether the applier can carry this suggestion out automatically.
    pub fn is_actionable(&self) -> bool {
        self.action.is_some()
    }
}
