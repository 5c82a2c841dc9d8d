//! Data model types for design documents and suggestions.

mod ad_type;
mod design;
mod layer;
mod suggestion;
pub mod tree;
mod updates;

pub use ad_type::AdType;
pub use design::{Design, Frame};
pub use layer::{
    CircleProps, GroupProps, ImageProps, Layer, LayerKind, RectProps, TextAlign, TextProps,
};
pub use suggestion::{Priority, Suggestion, SuggestionAction, SuggestionType};
pub use updates::LayerUpdates;
