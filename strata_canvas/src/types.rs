// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public handle type for canvas shapes.

/// Identifier for a shape on the canvas (generational).
///
/// A `ShapeId` names a slot plus the generation at which the slot was
/// occupied. Removing a shape bumps the slot's generation on reuse, so ids
/// held across a removal go stale instead of silently naming a different
/// shape. Stale ids are answered with `None` or a no-op by every
/// [`Canvas`][crate::Canvas] operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ShapeId(pub(crate) u32, pub(crate) u32);

impl ShapeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}
