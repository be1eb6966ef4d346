// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_zorder --heading-base-level=0

//! Strata Z-Order: stateless stacking-order queries for 2D canvases.
//!
//! Strata Z-Order is a reusable building block for canvas and vector editors.
//! It answers questions about the *paint order* of objects on a canvas:
//!
//! - Which object sits directly above (or below) this one, among objects that
//!   actually overlap it? See [`object_above`] and [`object_below`].
//! - What is an object's numeric rank in the paint order? See [`z_index`] and
//!   the batched [`z_indices`].
//! - Given an arbitrary subset of objects, what is that subset in ascending or
//!   descending paint order? See [`sort_ascending`] and [`sort_descending`].
//!
//! These are the queries behind editor commands like "bring forward", "send
//! backward", and selection-priority hit resolution.
//!
//! The crate owns no canvas state. Every query re-derives its answer from a
//! [`CanvasModel`]: a host-provided view of the canonical bottom-to-top
//! stacking order plus an overlap predicate. The host (a scene graph, a box
//! tree, a document model) remains the single authority for both; this crate
//! only observes. Objects are identified by any small copyable handle
//! (`Copy + Eq + Hash`), so identity is handle equality and two distinct
//! objects never compare equal even when their geometry coincides.
//!
//! # Example
//!
//! ```rust
//! use strata_zorder::{CanvasModel, object_above, sort_descending, z_index};
//!
//! // A minimal model: four objects stacked bottom-to-top, with a hard-coded
//! // overlap relation. Real hosts derive overlap from geometry.
//! struct Stack {
//!     order: Vec<u32>,
//!     overlaps: Vec<(u32, u32)>,
//! }
//!
//! impl CanvasModel for Stack {
//!     type ObjectId = u32;
//!
//!     fn objects_from_bottom(&self) -> impl DoubleEndedIterator<Item = u32> {
//!         self.order.iter().copied()
//!     }
//!
//!     fn objects_overlapping(&self, query: u32) -> impl Iterator<Item = u32> {
//!         self.overlaps.iter().filter_map(move |&(a, b)| {
//!             if a == query {
//!                 Some(b)
//!             } else if b == query {
//!                 Some(a)
//!             } else {
//!                 None
//!             }
//!         })
//!     }
//! }
//!
//! let model = Stack {
//!     order: vec![1, 2, 3, 4],
//!     overlaps: vec![(1, 2), (2, 3)],
//! };
//!
//! // Object 3 is third from the bottom.
//! assert_eq!(z_index(&model, 3), Some(2));
//!
//! // The nearest object above 1 that overlaps it is 2; object 3 sits higher
//! // but does not overlap 1, so it is never returned.
//! assert_eq!(object_above(&model, 1, &[]), Some(2));
//! assert_eq!(object_above(&model, 1, &[2]), None);
//!
//! // Any subset can be put into paint order, here top-first.
//! assert_eq!(sort_descending(&model, &[1, 4, 3]), vec![4, 3, 1]);
//! ```
//!
//! ## Cost model
//!
//! Every query is a single pass over the relevant stacking view, O(n) in the
//! number of objects on the canvas. Nothing is cached between calls, so the
//! model is free to mutate between queries; it only has to stay consistent
//! for the duration of one call. [`z_indices`] amortizes lookups for a whole
//! subset into one pass.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod model;
mod resolve;

pub use model::CanvasModel;
pub use resolve::{
    index_of, object_above, object_below, sort_ascending, sort_descending, z_index, z_indices,
};
