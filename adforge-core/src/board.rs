//! The active list of suggestions shown to the user.

use crate::apply::apply_suggestion;
use crate::error::{AdvisorError, Result};
use crate::model::{Design, Priority, Suggestion};

/// Suggestions from one analysis run that have not been applied or dismissed.
///
/// Consuming a suggestion removes only that entry; the rest stay as issued.
#[derive(Debug, Clone, Default)]
pub struct SuggestionBoard {
    active: Vec<Suggestion>,
}

impl SuggestionBoard {
    /// Board holding `suggestions` in their issued order.
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        Self {
            active: suggestions,
        }
    }

    /// Remaining suggestions, in issued order.
    pub fn active(&self) -> &[Suggestion] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Look up an active suggestion.
    pub fn get(&self, id: &str) -> Option<&Suggestion> {
        self.active.iter().find(|s| s.id == id)
    }

    /// Active suggestions at a given priority.
    pub fn with_priority(&self, priority: Priority) -> impl Iterator<Item = &Suggestion> {
        self.active.iter().filter(move |s| s.priority == priority)
    }

    /// Remove a suggestion without applying it.
    pub fn dismiss(&mut self, id: &str) -> Option<Suggestion> {
        let idx = self.active.iter().position(|s| s.id == id)?;
        Some(self.active.remove(idx))
    }

    /// Apply a suggestion to `design` and remove it from the board.
    ///
    /// The suggestion is removed even when applying fails, since a failure means it
    /// no longer matches the design.
    pub fn apply(&mut self, id: &str, design: &Design) -> Result<Design> {
        let suggestion = self
            .dismiss(id)
            .ok_or_else(|| AdvisorError::SuggestionNotFound {
                suggestion_id: id.to_string(),
            })?;

        apply_suggestion(design, &suggestion).inspect_err(|err| {
            tracing::warn!(suggestion_id = id, %err, "dropping suggestion that could not be applied");
        })
    }
}
