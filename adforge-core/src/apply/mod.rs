//! Apply accepted suggestions, producing a new design.
//!
//! Every function takes the design by shared reference and returns a fresh value;
//! the caller's snapshot stays as it was.

use crate::color::{Palette, PALETTE_SIZE};
use crate::config::{TraversalScope, CONTRAST_FIX_COLOR, HEADING_FONT_SIZE};
use crate::error::{AdvisorError, Result};
use crate::fonts::FontPairing;
use crate::model::{tree, Design, Layer, LayerKind, Suggestion};
use crate::rules::CONTRAST_PREFIX;

/// Recolor shapes and text from a palette and use its lightest color as background.
///
/// Rects and circles cycle through the palette in traversal order, text takes the
/// primary color.
pub fn apply_palette(design: &Design, palette: &Palette, scope: TraversalScope) -> Design {
    let mut shape_index = 0;
    let layers = tree::map(&design.layers, scope, &mut |layer: &Layer| match layer.kind {
        LayerKind::Rect(_) | LayerKind::Circle(_) => {
            let color = &palette.colors[shape_index % PALETTE_SIZE];
            shape_index += 1;
            layer.with_fill(color)
        }
        LayerKind::Text(_) => layer.with_fill(palette.primary()),
        LayerKind::Image(_) | LayerKind::Group(_) => layer.clone(),
    });

    tracing::debug!(palette = %palette.id, shapes = shape_index, "applied palette");

    Design {
        frame: design.frame.clone().with_background(palette.background()),
        layers,
    }
}

/// Set heading-sized text to the pairing's heading font and everything else to its body font.
pub fn apply_font_pairing(design: &Design, pairing: &FontPairing, scope: TraversalScope) -> Design {
    let layers = tree::map(&design.layers, scope, &mut |layer: &Layer| {
        match layer.font_size() {
            Some(size) if size >= HEADING_FONT_SIZE => layer.with_font_family(pairing.heading.family),
            Some(_) => layer.with_font_family(pairing.body.family),
            None => layer.clone(),
        }
    });

    Design {
        frame: design.frame.clone(),
        layers,
    }
}

/// Darken the text layer a contrast suggestion points at.
///
/// The target is the action's element id, or the id encoded in the suggestion id.
/// Unknown ids and non-text targets leave the design unchanged.
pub fn apply_contrast_fix(design: &Design, suggestion: &Suggestion) -> Design {
    let Some(target) = contrast_target(suggestion) else {
        tracing::debug!(suggestion_id = %suggestion.id, "contrast fix has no target");
        return design.clone();
    };

    let is_target_text = |layer: &Layer| layer.id == target && layer.is_text();
    match tree::replace_first(&design.layers, &is_target_text, |l| l.with_fill(CONTRAST_FIX_COLOR)) {
        Some(layers) => Design {
            frame: design.frame.clone(),
            layers,
        },
        None => {
            tracing::debug!(layer_id = target, "contrast fix target missing or not text");
            design.clone()
        }
    }
}

fn contrast_target(suggestion: &Suggestion) -> Option<&str> {
    suggestion
        .target()
        .or_else(|| suggestion.id.strip_prefix(CONTRAST_PREFIX))
}

/// Merge a suggestion's updates into its target layer, wherever it sits in the tree.
pub fn apply_suggestion_action(design: &Design, suggestion: &Suggestion) -> Result<Design> {
    let action = suggestion
        .action
        .as_ref()
        .ok_or_else(|| AdvisorError::MissingAction {
            suggestion_id: suggestion.id.clone(),
        })?;

    let is_target = |layer: &Layer| layer.id == action.element_id;
    let layers = tree::replace_first(&design.layers, &is_target, |layer| action.updates.apply_to(layer))
        .ok_or_else(|| AdvisorError::LayerNotFound {
            layer_id: action.element_id.clone(),
        })?;

    tracing::debug!(
        suggestion_id = %suggestion.id,
        layer_id = %action.element_id,
        "applied suggestion"
    );

    Ok(Design {
        frame: design.frame.clone(),
        layers,
    })
}

/// Apply any suggestion: contrast suggestions through the contrast fix, the rest
/// through their generic action.
pub fn apply_suggestion(design: &Design, suggestion: &Suggestion) -> Result<Design> {
    if suggestion.id.starts_with(CONTRAST_PREFIX) {
        let target = contrast_target(suggestion).unwrap_or_default();
        if design.find_layer(target).is_none() {
            return Err(AdvisorError::LayerNotFound {
                layer_id: target.to_string(),
            });
        }
        return Ok(apply_contrast_fix(design, suggestion));
    }
    apply_suggestion_action(design, suggestion)
}
