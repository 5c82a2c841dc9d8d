//! Error types for design analysis and suggestion application.

use thiserror::Error;

/// Error codes reported to the hosting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed `#RRGGBB` color (E100)
    InvalidColorFormat = 100,
    /// Suggestion target no longer exists in the tree (E200)
    LayerNotFound = 200,
    /// Field not meaningful for the target layer variant (E201)
    UnsupportedLayerVariant = 201,
    /// Suggestion carries nothing to apply (E202)
    MissingAction = 202,
    /// Suggestion id is not on the active board (E203)
    SuggestionNotFound = 203,
    /// Design failed structural validation (E300)
    InvalidDesign = 300,
    /// Unknown ad type tag (E301)
    InvalidAdType = 301,
}

/// Main error type for the engine.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Invalid color format: expected #RRGGBB, got '{value}'")]
    InvalidColorFormat { value: String },

    #[error("Layer not found: {layer_id} (the suggestion may be out of date)")]
    LayerNotFound { layer_id: String },

    #[error("Field '{field}' is not supported on layer {layer_id}")]
    UnsupportedLayerVariant { layer_id: String, field: String },

    #[error("Suggestion {suggestion_id} has no action to apply")]
    MissingAction { suggestion_id: String },

    #[error("Suggestion not found: {suggestion_id}")]
    SuggestionNotFound { suggestion_id: String },

    #[error("Invalid design: {message}")]
    InvalidDesign { message: String },

    #[error("Unknown ad type '{value}'")]
    InvalidAdType { value: String },
}

impl AdvisorError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AdvisorError::InvalidColorFormat { .. } => ErrorCode::InvalidColorFormat,
            AdvisorError::LayerNotFound { .. } => ErrorCode::LayerNotFound,
            AdvisorError::UnsupportedLayerVariant { .. } => ErrorCode::UnsupportedLayerVariant,
            AdvisorError::MissingAction { .. } => ErrorCode::MissingAction,
            AdvisorError::SuggestionNotFound { .. } => ErrorCode::SuggestionNotFound,
            AdvisorError::InvalidDesign { .. } => ErrorCode::InvalidDesign,
            AdvisorError::InvalidAdType { .. } => ErrorCode::InvalidAdType,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether the host can recover by dropping the suggestion and re-running analysis.
    pub fn is_stale_suggestion(&self) -> bool {
        matches!(
            self,
            AdvisorError::LayerNotFound { .. } | AdvisorError::SuggestionNotFound { .. }
        )
    }

    pub(crate) fn invalid_color(value: impl Into<String>) -> Self {
        AdvisorError::InvalidColorFormat {
            value: value.into(),
        }
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, AdvisorError>;
