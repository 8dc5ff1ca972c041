// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered tracking of active pointers.
//!
//! [`PointerMap`] keeps the last known position of every active pointer in
//! the order the pointers went down. Updating an existing pointer keeps its
//! place, so "the first two pointers" stays stable for the lifetime of a
//! pinch even when more fingers join.

use kurbo::Point;
use smallvec::SmallVec;

use crate::PointerId;

/// Active pointers and their last known positions, in insertion order.
///
/// Storage is inline for up to four pointers and spills to the heap beyond
/// that.
#[derive(Clone, Debug, Default)]
pub struct PointerMap {
    entries: SmallVec<[(PointerId, Point); 4]>,
}

impl PointerMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pointer or updates its position in place.
    ///
    /// Returns the previous position if the pointer was already tracked.
    pub fn insert(&mut self, id: PointerId, pos: Point) -> Option<Point> {
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, slot)) => Some(core::mem::replace(slot, pos)),
            None => {
                self.entries.push((id, pos));
                None
            }
        }
    }

    /// Removes a pointer, returning its last position.
    pub fn remove(&mut self, id: PointerId) -> Option<Point> {
        let idx = self.entries.iter().position(|(key, _)| *key == id)?;
        Some(self.entries.remove(idx).1)
    }

    /// Returns the last known position of a pointer.
    #[must_use]
    pub fn get(&self, id: PointerId) -> Option<Point> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, pos)| *pos)
    }

    /// Returns `true` if the pointer is tracked.
    #[must_use]
    pub fn contains(&self, id: PointerId) -> bool {
        self.entries.iter().any(|(key, _)| *key == id)
    }

    /// Number of tracked pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no pointer is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the earliest tracked pointer.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.entries.first().map(|(_, pos)| *pos)
    }

    /// Positions of the two earliest tracked pointers.
    #[must_use]
    pub fn first_two(&self) -> Option<(Point, Point)> {
        match self.entries.as_slice() {
            [(_, a), (_, b), ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Iterates over `(id, position)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PointerId, Point)> + '_ {
        self.entries.iter().copied()
    }

    /// Forgets every pointer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
