// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The z-order queries: directional neighbor scans, z-index lookup, and
//! order-preserving subset sorts.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::model::CanvasModel;

/// Position of `query` in a sequence of object handles.
///
/// A linear identity scan; returns the first matching position. `None` means
/// the object is not in the sequence, which is a normal outcome rather than
/// an error.
pub fn index_of<T: Eq>(query: T, objs: impl IntoIterator<Item = T>) -> Option<usize> {
    objs.into_iter().position(|o| o == query)
}

/// The nearest object above `query` in the stacking order that overlaps
/// `query` and is not in `ignore`.
///
/// "Above" walks from `query` toward the top of the canvas; objects that do
/// not overlap `query` are skipped no matter how close to it they sit.
/// Returns `None` when `query` is not in the model, is already topmost, or
/// no candidate qualifies.
///
/// `ignore` only filters candidates out of the result; it does not change
/// the stacking order or the overlap relation. Re-querying with a previous
/// result added to `ignore` steps to the next-nearest qualifying object, so
/// repeated calls enumerate the overlapping objects above `query` nearest
/// first.
pub fn object_above<M: CanvasModel>(
    model: &M,
    query: M::ObjectId,
    ignore: &[M::ObjectId],
) -> Option<M::ObjectId> {
    nearest_preceding(model, query, model.objects_from_top(), ignore)
}

/// The nearest object below `query` in the stacking order that overlaps
/// `query` and is not in `ignore`.
///
/// The mirror of [`object_above`]: walks from `query` toward the bottom of
/// the canvas. Returns `None` when `query` is not in the model, is already
/// bottommost, or no candidate qualifies.
pub fn object_below<M: CanvasModel>(
    model: &M,
    query: M::ObjectId,
    ignore: &[M::ObjectId],
) -> Option<M::ObjectId> {
    nearest_preceding(model, query, model.objects_from_bottom(), ignore)
}

/// Directional scan shared by [`object_above`] and [`object_below`].
///
/// Walking from `query`'s position in `view` back toward index 0 and taking
/// the first qualifying object is equivalent to one forward pass that
/// remembers the last qualifying object seen before reaching `query`; the
/// latter avoids materializing the view. If `query` never shows up the
/// candidate is discarded, so an absent query yields `None` rather than an
/// arbitrary neighbor.
fn nearest_preceding<M: CanvasModel>(
    model: &M,
    query: M::ObjectId,
    view: impl Iterator<Item = M::ObjectId>,
    ignore: &[M::ObjectId],
) -> Option<M::ObjectId> {
    let overlapping: HashSet<M::ObjectId> = model.objects_overlapping(query).collect();
    let mut nearest = None;
    for o in view {
        if o == query {
            return nearest;
        }
        if overlapping.contains(&o) && !ignore.contains(&o) {
            nearest = Some(o);
        }
    }
    None
}

/// `query`'s 0-based rank in the paint order, counted from the bottom.
///
/// Returns `None` for objects not present in the model.
pub fn z_index<M: CanvasModel>(model: &M, query: M::ObjectId) -> Option<usize> {
    index_of(query, model.objects_from_bottom())
}

/// Z-indices for a whole subset of objects in a single pass.
///
/// Entries are `(object, z_index)` pairs in bottom-first visitation order,
/// one per distinct member of `queries` that is present in the model; absent
/// objects produce no entry and duplicates collapse. Each recorded value
/// equals what [`z_index`] would return for that object standalone, but the
/// whole subset costs one O(n) traversal instead of one per object.
pub fn z_indices<M: CanvasModel>(
    model: &M,
    queries: &[M::ObjectId],
) -> Vec<(M::ObjectId, usize)> {
    let wanted: HashSet<M::ObjectId> = queries.iter().copied().collect();
    model
        .objects_from_bottom()
        .enumerate()
        .filter(|(_, o)| wanted.contains(o))
        .map(|(z, o)| (o, z))
        .collect()
}

/// The given objects in ascending paint order (bottommost first).
///
/// Filters the model's bottom-first view down to the given subset, so the
/// result is exactly the members of `objects` that are present in the model,
/// each once, in the order they are painted. Objects absent from the model
/// are dropped.
pub fn sort_ascending<M: CanvasModel>(model: &M, objects: &[M::ObjectId]) -> Vec<M::ObjectId> {
    filter_view(model.objects_from_bottom(), objects)
}

/// The given objects in descending paint order (topmost first).
///
/// The mirror of [`sort_ascending`], filtering the top-first view. This is
/// the order in which hit-testing should consider candidates.
pub fn sort_descending<M: CanvasModel>(model: &M, objects: &[M::ObjectId]) -> Vec<M::ObjectId> {
    filter_view(model.objects_from_top(), objects)
}

fn filter_view<T: Copy + Eq + Hash>(
    view: impl Iterator<Item = T>,
    objects: &[T],
) -> Vec<T> {
    let wanted: HashSet<T> = objects.iter().copied().collect();
    view.filter(|o| wanted.contains(o)).collect()
}
