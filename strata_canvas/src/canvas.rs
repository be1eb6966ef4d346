// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core canvas implementation: shape arena, stacking order, overlap scan.

use alloc::vec::Vec;
use kurbo::Rect;
use strata_zorder::CanvasModel;

use crate::types::ShapeId;

#[derive(Clone, Debug)]
struct Shape {
    generation: u32,
    bounds: Rect,
}

/// A flat canvas of rectangular shapes with a bottom-to-top stacking order.
///
/// Shapes live in a generational slot arena, so [`ShapeId`]s are cheap to
/// copy and stale ids are detected rather than re-resolved to a different
/// shape. The stacking order is a separate permutation of the live ids,
/// bottom-first; reorder operations permute it without touching geometry.
///
/// `Canvas` implements [`CanvasModel`], which is the only surface the
/// z-order queries in [`strata_zorder`] consume. The trait views are
/// snapshots of current state; mutate the canvas freely between queries, but
/// not during one.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    /// slots
    shapes: Vec<Option<Shape>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    /// stacking order, bottom-first; one entry per live shape
    order: Vec<ShapeId>,
}

impl Canvas {
    /// Create a new empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live shapes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the canvas holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns true if `id` refers to a live shape.
    ///
    /// A `ShapeId` is live if its slot is occupied and its generation matches
    /// the slot's current generation. See [`ShapeId`] for the generational
    /// semantics.
    pub fn is_alive(&self, id: ShapeId) -> bool {
        self.shapes
            .get(id.idx())
            .and_then(|s| s.as_ref())
            .is_some_and(|s| s.generation == id.generation())
    }

    /// Add a shape with the given extent on top of the stack.
    ///
    /// New shapes always enter at the top of the paint order, matching how
    /// drawing tools add objects.
    pub fn insert(&mut self, bounds: Rect) -> ShapeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.shapes[idx] = Some(Shape { generation, bounds });
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ShapeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.shapes.push(Some(Shape { generation, bounds }));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ShapeId uses 32-bit indices by design."
            )]
            ((self.shapes.len() - 1) as u32, generation)
        };
        let id = ShapeId::new(idx, generation);
        self.order.push(id);
        id
    }

    /// Remove a shape from the canvas.
    ///
    /// The id becomes stale immediately; its slot may be reused by a later
    /// insert under a higher generation. No-op for stale ids.
    pub fn remove(&mut self, id: ShapeId) {
        if !self.is_alive(id) {
            return;
        }
        self.order.retain(|&o| o != id);
        self.shapes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// The extent of a live shape, or `None` for stale ids.
    pub fn bounds(&self, id: ShapeId) -> Option<Rect> {
        self.shapes
            .get(id.idx())
            .and_then(|s| s.as_ref())
            .filter(|s| s.generation == id.generation())
            .map(|s| s.bounds)
    }

    /// Update a live shape's extent. No-op for stale ids.
    pub fn set_bounds(&mut self, id: ShapeId, bounds: Rect) {
        let idx = id.idx();
        if let Some(Some(s)) = self.shapes.get_mut(idx)
            && s.generation == id.generation()
        {
            s.bounds = bounds;
        }
    }

    // --- reorder operations ---

    /// Move a shape one step up in the stacking order. No-op when the shape
    /// is already topmost or the id is stale.
    pub fn raise(&mut self, id: ShapeId) {
        if let Some(pos) = self.position(id)
            && pos + 1 < self.order.len()
        {
            self.order.swap(pos, pos + 1);
        }
    }

    /// Move a shape one step down in the stacking order. No-op when the
    /// shape is already bottommost or the id is stale.
    pub fn lower(&mut self, id: ShapeId) {
        if let Some(pos) = self.position(id)
            && pos > 0
        {
            self.order.swap(pos, pos - 1);
        }
    }

    /// Move a shape to the top of the stacking order ("bring to front").
    pub fn raise_to_top(&mut self, id: ShapeId) {
        if let Some(pos) = self.position(id) {
            let id = self.order.remove(pos);
            self.order.push(id);
        }
    }

    /// Move a shape to the bottom of the stacking order ("send to back").
    pub fn lower_to_bottom(&mut self, id: ShapeId) {
        if let Some(pos) = self.position(id) {
            let id = self.order.remove(pos);
            self.order.insert(0, id);
        }
    }

    /// Move a shape to the given z-index, clamped to the current stack.
    ///
    /// Other shapes keep their relative order. No-op for stale ids.
    pub fn move_to(&mut self, id: ShapeId, z: usize) {
        if let Some(pos) = self.position(id) {
            let id = self.order.remove(pos);
            let z = z.min(self.order.len());
            self.order.insert(z, id);
        }
    }

    /// Position of `id` in the stacking order, bottom-first.
    fn position(&self, id: ShapeId) -> Option<usize> {
        self.order.iter().position(|&o| o == id)
    }
}

/// Edge-touching rectangles are considered to overlap, the same semantics as
/// point containment on an AABB edge.
fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

impl CanvasModel for Canvas {
    type ObjectId = ShapeId;

    fn objects_from_bottom(&self) -> impl DoubleEndedIterator<Item = ShapeId> {
        self.order.iter().copied()
    }

    fn objects_overlapping(&self, query: ShapeId) -> impl Iterator<Item = ShapeId> {
        let query_bounds = self.bounds(query);
        self.order.iter().copied().filter(move |&o| {
            if o == query {
                return false;
            }
            match (query_bounds, self.bounds(o)) {
                (Some(a), Some(b)) => rects_overlap(&a, &b),
                _ => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use strata_zorder::{
        object_above, object_below, sort_ascending, sort_descending, z_index, z_indices,
    };

    fn rect(x: f64, y: f64) -> Rect {
        Rect::new(x, y, x + 10.0, y + 10.0)
    }

    fn stack(canvas: &Canvas) -> Vec<ShapeId> {
        canvas.objects_from_bottom().collect()
    }

    #[test]
    fn insert_stacks_on_top() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(rect(0.0, 0.0));
        let b = canvas.insert(rect(5.0, 5.0));
        let c = canvas.insert(rect(100.0, 100.0));
        assert_eq!(stack(&canvas), vec![a, b, c]);
        assert_eq!(z_index(&canvas, a), Some(0));
        assert_eq!(z_index(&canvas, c), Some(2));
    }

    #[test]
    fn liveness_insert_remove_reuse() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(rect(0.0, 0.0));
        let b = canvas.insert(rect(5.0, 5.0));
        assert!(canvas.is_alive(a));

        canvas.remove(a);
        assert!(!canvas.is_alive(a));
        assert_eq!(canvas.bounds(a), None);
        assert_eq!(stack(&canvas), vec![b]);

        // Reinsertion may reuse a's slot, but the generation must bump.
        let c = canvas.insert(rect(1.0, 1.0));
        assert!(canvas.is_alive(c));
        assert!(!canvas.is_alive(a));
        if a.0 == c.0 {
            assert!(c.1 > a.1, "generation must increase on reuse");
        }

        // Stale ids are inert everywhere.
        canvas.remove(a);
        canvas.raise(a);
        canvas.set_bounds(a, rect(9.0, 9.0));
        assert_eq!(stack(&canvas), vec![b, c]);
        assert_eq!(z_index(&canvas, a), None);
    }

    #[test]
    fn overlap_is_symmetric_and_irreflexive() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(rect(0.0, 0.0));
        let b = canvas.insert(rect(5.0, 5.0));
        let far = canvas.insert(rect(100.0, 0.0));

        let over_a: Vec<ShapeId> = canvas.objects_overlapping(a).collect();
        let over_b: Vec<ShapeId> = canvas.objects_overlapping(b).collect();
        assert_eq!(over_a, vec![b]);
        assert_eq!(over_b, vec![a]);
        assert_eq!(canvas.objects_overlapping(far).count(), 0);
    }

    #[test]
    fn edge_touching_counts_as_overlap() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = canvas.insert(Rect::new(10.0, 0.0, 20.0, 10.0));
        let c = canvas.insert(Rect::new(20.5, 0.0, 30.0, 10.0));
        assert_eq!(object_below(&canvas, b, &[]), Some(a));
        assert_eq!(object_above(&canvas, c, &[]), None);
        assert_eq!(object_below(&canvas, c, &[]), None);
    }

    #[test]
    fn stale_query_overlaps_nothing() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(rect(0.0, 0.0));
        let b = canvas.insert(rect(5.0, 5.0));
        canvas.remove(a);
        assert_eq!(canvas.objects_overlapping(a).count(), 0);
        assert_eq!(object_above(&canvas, a, &[]), None);
        let _ = b;
    }

    #[test]
    fn raise_and_lower_step_by_one() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(rect(0.0, 0.0));
        let b = canvas.insert(rect(0.0, 0.0));
        let c = canvas.insert(rect(0.0, 0.0));

        canvas.raise(a);
        assert_eq!(stack(&canvas), vec![b, a, c]);
        canvas.raise(a);
        assert_eq!(stack(&canvas), vec![b, c, a]);
        // Already topmost: no-op.
        canvas.raise(a);
        assert_eq!(stack(&canvas), vec![b, c, a]);

        canvas.lower(c);
        assert_eq!(stack(&canvas), vec![c, b, a]);
        canvas.lower(c);
        assert_eq!(stack(&canvas), vec![c, b, a]);
    }

    #[test]
    fn raise_to_top_and_lower_to_bottom() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(rect(0.0, 0.0));
        let b = canvas.insert(rect(0.0, 0.0));
        let c = canvas.insert(rect(0.0, 0.0));

        canvas.raise_to_top(a);
        assert_eq!(stack(&canvas), vec![b, c, a]);
        canvas.lower_to_bottom(c);
        assert_eq!(stack(&canvas), vec![c, b, a]);
        // The rest keep their relative order either way.
        canvas.raise_to_top(c);
        assert_eq!(stack(&canvas), vec![b, a, c]);
    }

    #[test]
    fn move_to_clamps() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(rect(0.0, 0.0));
        let b = canvas.insert(rect(0.0, 0.0));
        let c = canvas.insert(rect(0.0, 0.0));

        canvas.move_to(c, 0);
        assert_eq!(stack(&canvas), vec![c, a, b]);
        canvas.move_to(c, 99);
        assert_eq!(stack(&canvas), vec![a, b, c]);
        canvas.move_to(a, 1);
        assert_eq!(stack(&canvas), vec![b, a, c]);
    }

    #[test]
    fn directional_queries_track_reorders() {
        let mut canvas = Canvas::new();
        // Three mutually overlapping shapes plus one far away.
        let a = canvas.insert(rect(0.0, 0.0));
        let b = canvas.insert(rect(2.0, 2.0));
        let c = canvas.insert(rect(4.0, 4.0));
        let far = canvas.insert(rect(500.0, 500.0));

        assert_eq!(object_above(&canvas, a, &[]), Some(b));
        assert_eq!(object_above(&canvas, a, &[b]), Some(c));
        assert_eq!(object_below(&canvas, c, &[]), Some(b));
        assert_eq!(object_above(&canvas, far, &[]), None);

        canvas.lower_to_bottom(c);
        assert_eq!(object_below(&canvas, a, &[]), Some(c));
        assert_eq!(object_above(&canvas, a, &[]), Some(b));
        assert_eq!(object_above(&canvas, c, &[a]), Some(b));
    }

    #[test]
    fn batch_indices_and_sorts_on_live_canvas() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(rect(0.0, 0.0));
        let b = canvas.insert(rect(2.0, 2.0));
        let c = canvas.insert(rect(4.0, 4.0));
        canvas.remove(b);

        assert_eq!(z_indices(&canvas, &[c, b, a]), vec![(a, 0), (c, 1)]);
        assert_eq!(sort_ascending(&canvas, &[c, a]), vec![a, c]);
        assert_eq!(sort_descending(&canvas, &[a, c, b]), vec![c, a]);
    }

    #[test]
    fn removal_keeps_indices_contiguous() {
        let mut canvas = Canvas::new();
        let a = canvas.insert(rect(0.0, 0.0));
        let b = canvas.insert(rect(2.0, 2.0));
        let c = canvas.insert(rect(4.0, 4.0));
        canvas.remove(b);

        assert_eq!(canvas.len(), 2);
        assert_eq!(z_index(&canvas, a), Some(0));
        assert_eq!(z_index(&canvas, c), Some(1));
    }
}
