//! Colors and fonts in use.

use crate::color::normalize_hex;
use crate::config::{TraversalScope, DEFAULT_BACKGROUND};
use crate::model::Design;

fn push_unique(out: &mut Vec<String>, value: String) {
    if !out.contains(&value) {
        out.push(value);
    }
}

/// Distinct fill colors of layers in scope plus the frame background.
///
/// Colors are normalized to lowercase; fills that are not `#RRGGBB` are skipped.
/// Order is first appearance, background last.
pub fn extract_colors(design: &Design, scope: TraversalScope) -> Vec<String> {
    let mut colors = Vec::new();

    let fills = design
        .layers_in(scope)
        .into_iter()
        .filter_map(|layer| layer.fill().map(|fill| (layer, fill)));

    for (layer, fill) in fills {
        match normalize_hex(fill) {
            Ok(color) => push_unique(&mut colors, color),
            Err(_) => tracing::debug!(layer_id = %layer.id, fill, "skipping non-hex fill"),
        }
    }

    match normalize_hex(&design.frame.background_color) {
        Ok(color) => push_unique(&mut colors, color),
        Err(_) => tracing::debug!(
            background = %design.frame.background_color,
            "skipping non-hex frame background"
        ),
    }

    colors
}

/// Distinct font families of text layers in scope, in order of appearance.
pub fn extract_fonts(design: &Design, scope: TraversalScope) -> Vec<String> {
    let mut fonts = Vec::new();
    for family in design
        .text_layers(scope)
        .into_iter()
        .filter_map(|layer| layer.font_family())
    {
        push_unique(&mut fonts, family.to_string());
    }
    fonts
}

/// Most frequent valid fill among layers in scope; ties go to the first seen.
///
/// Falls back to the frame background, then to white.
pub fn dominant_color(design: &Design, scope: TraversalScope) -> String {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for fill in design
        .layers_in(scope)
        .into_iter()
        .filter_map(|layer| layer.fill())
        .filter_map(|fill| normalize_hex(fill).ok())
    {
        match counts.iter_mut().find(|(color, _)| *color == fill) {
            Some((_, n)) => *n += 1,
            None => counts.push((fill, 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (color, n) in counts {
        if best.as_ref().map_or(true, |(_, top)| n > *top) {
            best = Some((color, n));
        }
    }

    best.map(|(color, _)| color)
        .or_else(|| normalize_hex(&design.frame.background_color).ok())
        .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string())
}
