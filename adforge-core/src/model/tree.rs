//! Generic walks over the layer tree.
//!
//! Lookups are predicate-driven and depth-first pre-order. Rewrites never touch the
//! input slice: they build new vectors, cloning only what they replace, so callers
//! holding the original design keep an unchanged value.

use super::layer::Layer;
use crate::config::TraversalScope;

/// First layer matching `pred`, searching groups recursively.
pub fn find<'a, P>(layers: &'a [Layer], pred: &P) -> Option<&'a Layer>
where
    P: Fn(&Layer) -> bool,
{
    for layer in layers {
        if pred(layer) {
            return Some(layer);
        }
        if let Some(found) = find(layer.children(), pred) {
            return Some(found);
        }
    }
    None
}

/// Every layer in scope, in traversal order.
pub fn collect(layers: &[Layer], scope: TraversalScope) -> Vec<&Layer> {
    let mut out = Vec::new();
    collect_into(layers, scope, &mut out);
    out
}

fn collect_into<'a>(layers: &'a [Layer], scope: TraversalScope, out: &mut Vec<&'a Layer>) {
    for layer in layers {
        out.push(layer);
        if scope == TraversalScope::Recursive {
            collect_into(layer.children(), scope, out);
        }
    }
}

/// Rebuild the tree, replacing every in-scope layer with `f(layer)`.
///
/// With [`TraversalScope::Recursive`], a group is passed to `f` first and its
/// children are then rebuilt inside the result. Visit order matches [`collect`].
pub fn map<F>(layers: &[Layer], scope: TraversalScope, f: &mut F) -> Vec<Layer>
where
    F: FnMut(&Layer) -> Layer,
{
    layers
        .iter()
        .map(|layer| {
            let mapped = f(layer);
            if scope == TraversalScope::Recursive && !layer.children().is_empty() {
                let children = map(layer.children(), scope, &mut *f);
                mapped.with_children(children)
            } else {
                mapped
            }
        })
        .collect()
}

/// Rebuild the tree with the first layer matching `pred` replaced by `f(layer)`.
///
/// Returns `None` when nothing matches anywhere in the tree.
pub fn replace_first<P, F>(layers: &[Layer], pred: &P, f: F) -> Option<Vec<Layer>>
where
    P: Fn(&Layer) -> bool,
    F: FnOnce(&Layer) -> Layer,
{
    let mut f = Some(f);
    replace_inner(layers, pred, &mut f)
}

fn replace_inner<P, F>(layers: &[Layer], pred: &P, f: &mut Option<F>) -> Option<Vec<Layer>>
where
    P: Fn(&Layer) -> bool,
    F: FnOnce(&Layer) -> Layer,
{
    for (idx, layer) in layers.iter().enumerate() {
        let replacement = if pred(layer) {
            f.take().map(|f| f(layer))
        } else {
            replace_inner(layer.children(), pred, f).map(|children| layer.with_children(children))
        };

        if let Some(replacement) = replacement {
            let mut next = layers.to_vec();
            next[idx] = replacement;
            return Some(next);
        }
    }
    None
}
