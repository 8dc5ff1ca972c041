// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: follow a single pointer from press to release.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the pointer id and the
//!    initial position.
//! 2) On each move, call [`DragState::update`] to get the movement delta since
//!    the last update. Moves from other pointers return `None`.
//! 3) Query [`DragState::total_offset`] for the offset from the start.
//! 4) Finish with [`DragState::end`], which returns the total offset if the
//!    pointer matches and resets the state.

use kurbo::{Point, Vec2};

use crate::PointerId;

/// An in-progress drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer driving the drag.
    pub pointer: PointerId,
    /// Position where the drag started.
    pub start: Point,
    /// Last recorded position.
    pub current: Point,
}

/// Tracks a drag driven by one pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging(DragSession),
}

impl DragState {
    /// Start tracking a drag for `pointer` at `pos`, replacing any previous one.
    pub fn start(&mut self, pointer: PointerId, pos: Point) {
        *self = Self::Dragging(DragSession {
            pointer,
            start: pos,
            current: pos,
        });
    }

    /// Record a new position, returning the movement delta since the last one.
    ///
    /// Returns `None` when idle or when `pointer` is not the dragging pointer.
    pub fn update(&mut self, pointer: PointerId, pos: Point) -> Option<Vec2> {
        let session = self.session_mut(pointer)?;
        let delta = pos - session.current;
        session.current = pos;
        Some(delta)
    }

    /// Offset of the last recorded position from the start position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        self.session().map(|s| s.current - s.start)
    }

    /// End the drag for `pointer`, returning its total offset.
    ///
    /// Returns `None` and leaves the state untouched when `pointer` is not the
    /// dragging pointer.
    pub fn end(&mut self, pointer: PointerId) -> Option<Vec2> {
        let offset = self.session_mut(pointer).map(|s| s.current - s.start)?;
        *self = Self::Idle;
        Some(offset)
    }

    /// Abandon any drag without reporting an offset.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Pointer driving the current drag.
    #[must_use]
    pub fn pointer(&self) -> Option<PointerId> {
        self.session().map(|s| s.pointer)
    }

    /// The current drag, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    fn session_mut(&mut self, pointer: PointerId) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) if session.pointer == pointer => Some(session),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.pointer(), None);
        assert_eq!(drag.total_offset(), None);
    }

    #[test]
    fn start_sets_dragging_state() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        drag.start(4, start);

        assert!(drag.is_dragging());
        assert_eq!(drag.pointer(), Some(4));
        assert_eq!(drag.total_offset(), Some(Vec2::ZERO));
    }

    #[test]
    fn update_returns_delta_when_dragging() {
        let mut drag = DragState::default();
        drag.start(1, Point::new(10.0, 20.0));

        let delta = drag.update(1, Point::new(15.0, 25.0));

        assert_eq!(delta, Some(Vec2::new(5.0, 5.0)));
        assert_eq!(drag.session().unwrap().current, Point::new(15.0, 25.0));
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();

        assert_eq!(drag.update(1, Point::new(15.0, 25.0)), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn update_from_other_pointer_is_ignored() {
        let mut drag = DragState::default();
        drag.start(1, Point::new(0.0, 0.0));

        assert_eq!(drag.update(2, Point::new(50.0, 0.0)), None);
        assert_eq!(drag.total_offset(), Some(Vec2::ZERO));
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(1, Point::new(0.0, 0.0));

        assert_eq!(drag.update(1, Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(1, Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(drag.update(1, Point::new(10.0, 10.0)), Some(Vec2::new(2.0, 3.0)));
        assert_eq!(drag.total_offset(), Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn end_reports_total_offset_and_resets() {
        let mut drag = DragState::default();
        drag.start(9, Point::new(500.0, 0.0));
        drag.update(9, Point::new(380.0, 3.0));

        assert_eq!(drag.end(9), Some(Vec2::new(-120.0, 3.0)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn end_from_other_pointer_keeps_drag() {
        let mut drag = DragState::default();
        drag.start(1, Point::ZERO);

        assert_eq!(drag.end(2), None);
        assert!(drag.is_dragging());
    }

    #[test]
    fn end_on_fresh_state_is_safe() {
        let mut drag = DragState::default();
        assert_eq!(drag.end(1), None);
        drag.cancel();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();

        drag.start(1, Point::new(0.0, 0.0));
        drag.update(1, Point::new(10.0, 10.0));

        drag.start(2, Point::new(50.0, 60.0));
        drag.update(2, Point::new(55.0, 65.0));

        assert_eq!(drag.pointer(), Some(2));
        assert_eq!(drag.total_offset(), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn fractional_coordinates() {
        let mut drag = DragState::default();
        drag.start(1, Point::new(1.5, 2.7));

        let delta = drag.update(1, Point::new(3.2, 4.1)).unwrap();

        let expected = Vec2::new(1.7, 1.4);
        assert!((delta.x - expected.x).abs() < f64::EPSILON * 10.0);
        assert!((delta.y - expected.y).abs() < f64::EPSILON * 10.0);
    }
}
