// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas model contract consumed by the z-order queries.

use core::hash::Hash;

/// A host-owned view of a canvas stacking order and overlap relation.
///
/// Implementors own the canonical total order of objects (bottom-to-top) and
/// the geometry used for overlap testing. The z-order queries in this crate
/// treat an implementor as a read-only snapshot: they never create, retain,
/// or invalidate object handles, and they re-derive every answer from the
/// views returned here at call time.
///
/// Expectations on implementors:
///
/// - Each live object appears exactly once in [`objects_from_bottom`][Self::objects_from_bottom],
///   and [`objects_from_top`][Self::objects_from_top] yields exactly the
///   reverse sequence.
/// - [`objects_overlapping`][Self::objects_overlapping] is symmetric (if `a`
///   overlaps `b` then `b` overlaps `a`), irreflexive (an object never
///   overlaps itself), and not necessarily transitive. How "overlap" is
///   computed (bounding boxes, exact shapes, a spatial index) is entirely the
///   model's business.
/// - The model must not be mutated while a single query call is in progress.
///   Between calls it may change freely.
pub trait CanvasModel {
    /// Handle identifying an object on the canvas.
    ///
    /// Identity is handle equality: two handles compare equal exactly when
    /// they name the same object, regardless of geometry. Generational ids,
    /// arena indices, or plain integers all work.
    type ObjectId: Copy + Eq + Hash;

    /// The canonical stacking order, bottom-first.
    ///
    /// The first object yielded is painted first (lowest priority), the last
    /// is painted last (topmost).
    fn objects_from_bottom(&self) -> impl DoubleEndedIterator<Item = Self::ObjectId>;

    /// The canonical stacking order, top-first.
    ///
    /// The reverse of [`objects_from_bottom`][Self::objects_from_bottom];
    /// the default implementation derives it that way.
    fn objects_from_top(&self) -> impl DoubleEndedIterator<Item = Self::ObjectId> {
        self.objects_from_bottom().rev()
    }

    /// All objects other than `query` whose extent intersects `query`'s.
    ///
    /// Yields nothing when `query` is not a live object of this model. Order
    /// of the yielded objects is unspecified; callers that need stacking
    /// order combine this with one of the ordered views.
    fn objects_overlapping(&self, query: Self::ObjectId)
    -> impl Iterator<Item = Self::ObjectId>;
}
