//! Partial layer updates carried by suggestion actions.

use serde::{Deserialize, Serialize};

use super::layer::{Layer, LayerKind, TextAlign};

/// A sparse set of layer fields to overwrite.
///
/// Fields that make no sense for the target variant (e.g. `fontSize` on a rect)
/// are ignored by [`LayerUpdates::apply_to`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
}

impl LayerUpdates {
    /// Move to a new left edge.
    pub fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            ..Default::default()
        }
    }

    /// Move to a new top edge.
    pub fn y(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Default::default()
        }
    }

    /// Set the font size.
    pub fn font_size(size: f64) -> Self {
        Self {
            font_size: Some(size),
            ..Default::default()
        }
    }

    /// Set the fill color.
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Default::default()
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Names of set fields that the layer's variant cannot hold.
    pub fn unsupported_fields(&self, layer: &Layer) -> Vec<&'static str> {
        let is_text = matches!(layer.kind, LayerKind::Text(_));
        let mut fields = Vec::new();

        if !is_text {
            if self.font_size.is_some() {
                fields.push("fontSize");
            }
            if self.font_family.is_some() {
                fields.push("fontFamily");
            }
            if self.font_weight.is_some() {
                fields.push("fontWeight");
            }
            if self.text_align.is_some() {
                fields.push("textAlign");
            }
        }
        if self.fill.is_some() && layer.fill().is_none() {
            fields.push("fill");
        }

        fields
    }

    /// Copy of `layer` with these updates merged in. Unsupported fields are skipped.
    pub fn apply_to(&self, layer: &Layer) -> Layer {
        let skipped = self.unsupported_fields(layer);
        if !skipped.is_empty() {
            tracing::debug!(
                layer_id = %layer.id,
                variant = layer.kind.tag(),
                ?skipped,
                "ignoring fields not supported by layer variant"
            );
        }

        let mut next = layer.clone();
        if let Some(x) = self.x {
            next.x = x;
        }
        if let Some(y) = self.y {
            next.y = y;
        }
        if let Some(width) = self.width {
            next.width = Some(width);
        }
        if let Some(height) = self.height {
            next.height = Some(height);
        }
        if let Some(visible) = self.is_visible {
            next.is_visible = visible;
        }

        if let Some(fill) = &self.fill {
            next = next.with_fill(fill);
        }

        if let LayerKind::Text(text) = &mut next.kind {
            if let Some(size) = self.font_size {
                text.font_size = size;
            }
            if let Some(family) = &self.font_family {
                text.font_family = family.clone();
            }
            if let Some(weight) = &self.font_weight {
                text.font_weight = weight.clone();
            }
            if let Some(align) = self.text_align {
                text.text_align = align;
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_position_to_any_variant() {
        let rect = Layer::rect("r", "#000000").at(10.0, 10.0).sized(20.0, 20.0);
        let moved = LayerUpdates::y(750.0).apply_to(&rect);
        assert_eq!(moved.y, 750.0);
        assert_eq!(moved.x, 10.0);
        assert_eq!(moved.id, "r");
    }

    #[test]
    fn test_apply_font_size_to_text() {
        let text = Layer::text("t", "Hi", 14.0, "Inter", "#000000");
        let next = LayerUpdates::font_size(18.0).apply_to(&text);
        assert_eq!(next.font_size(), Some(18.0));
    }

    #[test]
    fn test_font_size_on_rect_is_ignored() {
        let rect = Layer::rect("r", "#ff0000");
        let updates = LayerUpdates {
            font_size: Some(18.0),
            x: Some(5.0),
            ..Default::default()
        };
        assert_eq!(updates.unsupported_fields(&rect), vec!["fontSize"]);

        let next = updates.apply_to(&rect);
        assert_eq!(next.x, 5.0);
        assert_eq!(next.kind, rect.kind);
    }

    #[test]
    fn test_fill_on_image_is_unsupported() {
        let image = Layer::image("i", "x.png");
        let updates = LayerUpdates::fill("#ffffff");
        assert_eq!(updates.unsupported_fields(&image), vec!["fill"]);
        assert_eq!(updates.apply_to(&image), image);
    }

    #[test]
    fn test_serialization_skips_unset_fields() {
        let json = serde_json::to_string(&LayerUpdates::font_size(18.0)).unwrap();
        assert_eq!(json, r#"{"fontSize":18.0}"#);
        assert!(LayerUpdates::default().is_empty());
    }
}
