//! Design document: a frame plus its top-level layers.

use serde::{Deserialize, Serialize};

use super::layer::Layer;
use super::tree;
use crate::config::{TraversalScope, DEFAULT_BACKGROUND};

fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

/// Canvas-level attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_background")]
    pub background_color: String,
}

impl Frame {
    /// Create a frame with the default white background.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background_color: default_background(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Horizontal center line.
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// The full editable document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub frame: Frame,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Design {
    /// Create a design from a frame and its top-level layers.
    pub fn new(frame: Frame, layers: Vec<Layer>) -> Self {
        Self { frame, layers }
    }

    /// Layers visited by a pass with the given scope, in traversal order.
    pub fn layers_in(&self, scope: TraversalScope) -> Vec<&Layer> {
        tree::collect(&self.layers, scope)
    }

    /// Text layers in scope.
    pub fn text_layers(&self, scope: TraversalScope) -> Vec<&Layer> {
        tree::collect(&self.layers, scope)
            .into_iter()
            .filter(|l| l.is_text())
            .collect()
    }

    /// Find a layer anywhere in the tree, including inside groups.
    pub fn find_layer(&self, id: &str) -> Option<&Layer> {
        tree::find(&self.layers, &|l: &Layer| l.id == id)
    }

    /// Total number of layers in the tree, groups included.
    pub fn layer_count(&self) -> usize {
        tree::collect(&self.layers, TraversalScope::Recursive).len()
    }
}
