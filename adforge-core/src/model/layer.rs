//! Layer definition: one node of the design's visual tree.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_font_weight() -> String {
    "normal".to_string()
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text layer fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    /// Displayed string.
    pub text: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Font family name.
    pub font_family: String,
    /// CSS-style weight ("normal", "bold", "600", ...).
    #[serde(default = "default_font_weight")]
    pub font_weight: String,
    /// Text color.
    pub fill: String,
    #[serde(default)]
    pub text_align: TextAlign,
}

/// Rectangle layer fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectProps {
    pub fill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
}

/// Circle layer fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleProps {
    pub fill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

/// Image layer fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    /// Image URL as returned by the upload service.
    pub src: String,
}

/// Group layer fields. A group owns its children.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupProps {
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// Variant-specific part of a layer, tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerKind {
    Text(TextProps),
    Image(ImageProps),
    Rect(RectProps),
    Circle(CircleProps),
    Group(GroupProps),
}

impl LayerKind {
    /// Lowercase variant tag, as it appears in JSON.
    pub fn tag(&self) -> &'static str {
        match self {
            LayerKind::Text(_) => "text",
            LayerKind::Image(_) => "image",
            LayerKind::Rect(_) => "rect",
            LayerKind::Circle(_) => "circle",
            LayerKind::Group(_) => "group",
        }
    }
}

/// A visual element positioned on the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Unique within a design; never reassigned by the engine.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Left edge.
    #[serde(default)]
    pub x: f64,
    /// Top edge.
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(flatten)]
    pub kind: LayerKind,
}

impl Layer {
    fn with_kind(id: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            x: 0.0,
            y: 0.0,
            width: None,
            height: None,
            is_visible: true,
            is_locked: false,
            kind,
        }
    }

    /// Create a text layer with normal weight and left alignment.
    pub fn text(
        id: impl Into<String>,
        text: impl Into<String>,
        font_size: f64,
        font_family: impl Into<String>,
        fill: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            id,
            LayerKind::Text(TextProps {
                text: text.into(),
                font_size,
                font_family: font_family.into(),
                font_weight: default_font_weight(),
                fill: fill.into(),
                text_align: TextAlign::Left,
            }),
        )
    }

    /// Create a rectangle layer.
    pub fn rect(id: impl Into<String>, fill: impl Into<String>) -> Self {
        Self::with_kind(
            id,
            LayerKind::Rect(RectProps {
                fill: fill.into(),
                border_radius: None,
            }),
        )
    }

    /// Create a circle layer.
    pub fn circle(id: impl Into<String>, fill: impl Into<String>) -> Self {
        Self::with_kind(
            id,
            LayerKind::Circle(CircleProps {
                fill: fill.into(),
                radius: None,
            }),
        )
    }

    /// Create an image layer.
    pub fn image(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self::with_kind(id, LayerKind::Image(ImageProps { src: src.into() }))
    }

    /// Create a group owning `layers`.
    pub fn group(id: impl Into<String>, layers: Vec<Layer>) -> Self {
        Self::with_kind(id, LayerKind::Group(GroupProps { layers }))
    }

    /// Set the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the top-left position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set explicit dimensions.
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Whether this is a text layer.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, LayerKind::Text(_))
    }

    /// Text fields, if this is a text layer.
    pub fn as_text(&self) -> Option<&TextProps> {
        match &self.kind {
            LayerKind::Text(props) => Some(props),
            _ => None,
        }
    }

    /// Fill color for variants that have one (text, rect, circle).
    pub fn fill(&self) -> Option<&str> {
        match &self.kind {
            LayerKind::Text(p) => Some(&p.fill),
            LayerKind::Rect(p) => Some(&p.fill),
            LayerKind::Circle(p) => Some(&p.fill),
            LayerKind::Image(_) | LayerKind::Group(_) => None,
        }
    }

    /// Font size of a text layer.
    pub fn font_size(&self) -> Option<f64> {
        self.as_text().map(|t| t.font_size)
    }

    /// Font family of a text layer.
    pub fn font_family(&self) -> Option<&str> {
        self.as_text().map(|t| t.font_family.as_str())
    }

    /// Children of a group; empty for every other variant.
    pub fn children(&self) -> &[Layer] {
        match &self.kind {
            LayerKind::Group(g) => &g.layers,
            _ => &[],
        }
    }

    /// Whether this is a rect or circle, the layers a palette recolors.
    pub fn is_shape(&self) -> bool {
        matches!(self.kind, LayerKind::Rect(_) | LayerKind::Circle(_))
    }

    /// Width, treating a missing value as zero.
    pub fn width_or_zero(&self) -> f64 {
        self.width.unwrap_or(0.0)
    }

    /// Height, treating a missing value as zero.
    pub fn height_or_zero(&self) -> f64 {
        self.height.unwrap_or(0.0)
    }

    /// Bottom edge Y coordinate.
    pub fn bottom(&self) -> f64 {
        self.y + self.height_or_zero()
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f64 {
        self.x + self.width_or_zero() / 2.0
    }

    /// Name if present, else id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Copy of this layer with a new fill; variants without a fill come back unchanged.
    pub fn with_fill(&self, fill: &str) -> Layer {
        let mut next = self.clone();
        match &mut next.kind {
            LayerKind::Text(p) => p.fill = fill.to_string(),
            LayerKind::Rect(p) => p.fill = fill.to_string(),
            LayerKind::Circle(p) => p.fill = fill.to_string(),
            LayerKind::Image(_) | LayerKind::Group(_) => {}
        }
        next
    }

    /// Copy of this layer with a new font family; non-text layers come back unchanged.
    pub fn with_font_family(&self, family: &str) -> Layer {
        let mut next = self.clone();
        if let LayerKind::Text(p) = &mut next.kind {
            p.font_family = family.to_string();
        }
        next
    }

    /// Copy of this group with replaced children; non-groups come back unchanged.
    pub fn with_children(&self, layers: Vec<Layer>) -> Layer {
        let mut next = self.clone();
        if let LayerKind::Group(g) = &mut next.kind {
            g.layers = layers;
        }
        next
    }
}
