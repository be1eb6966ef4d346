// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=strata_canvas --heading-base-level=0

//! Strata Canvas: a reference canvas model for z-order queries.
//!
//! Strata Canvas is a minimal host for [`strata_zorder`]: a flat collection
//! of rectangular shapes with a canonical bottom-to-top stacking order and an
//! axis-aligned overlap relation. It is the piece a canvas editor would own;
//! the z-order queries themselves live in [`strata_zorder`] and treat this
//! crate purely as a snapshot provider through the
//! [`CanvasModel`][strata_zorder::CanvasModel] trait.
//!
//! - Shapes are held in a generational arena; a [`ShapeId`] stays cheap to
//!   copy and becomes stale (never dangling) when its shape is removed.
//! - New shapes land on top of the stack, the way drawing tools add objects.
//! - Reorder operations ([`Canvas::raise`], [`Canvas::lower`],
//!   [`Canvas::raise_to_top`], [`Canvas::lower_to_bottom`],
//!   [`Canvas::move_to`]) implement the editor-facing "bring forward / send
//!   backward" family by permuting the stacking order only; geometry is
//!   untouched.
//! - Overlap is a linear scan over axis-aligned extents. Edge-touching
//!   rectangles count as overlapping. Small canvases don't need more; a
//!   spatial index can replace the scan behind the same trait if one ever
//!   does.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use strata_canvas::Canvas;
//! use strata_zorder::{object_above, object_below, z_index};
//!
//! let mut canvas = Canvas::new();
//! let floor = canvas.insert(Rect::new(0.0, 0.0, 100.0, 100.0));
//! let table = canvas.insert(Rect::new(20.0, 20.0, 60.0, 60.0));
//! let lamp = canvas.insert(Rect::new(200.0, 200.0, 210.0, 210.0));
//!
//! // Later inserts stack higher.
//! assert_eq!(z_index(&canvas, floor), Some(0));
//! assert_eq!(z_index(&canvas, lamp), Some(2));
//!
//! // The lamp is above the table in the stacking order but doesn't overlap
//! // it, so directional queries skip it.
//! assert_eq!(object_above(&canvas, table, &[]), None);
//! assert_eq!(object_below(&canvas, table, &[]), Some(floor));
//!
//! // Send the table to the back and the relation flips.
//! canvas.lower_to_bottom(table);
//! assert_eq!(object_above(&canvas, table, &[]), Some(floor));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod canvas;
mod types;

pub use canvas::Canvas;
pub use types::ShapeId;
