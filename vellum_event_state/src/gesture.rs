// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan and pinch recognition from raw pointer events.
//!
//! ## Usage
//!
//! 1) Feed pointer down events to [`PanZoomGesture::pointer_down`].
//! 2) Feed moves to [`PanZoomGesture::pointer_move`] and apply the returned
//!    [`GestureStep`]: zoom first (if any), then pan.
//! 3) Feed up/cancel events to [`PanZoomGesture::pointer_up`] and leave
//!    events to [`PanZoomGesture::pointer_left`].
//!
//! One active pointer pans incrementally. Two or more active pointers pinch:
//! the scale changes by the ratio of finger distances, anchored at their
//! midpoint, and the view additionally pans by the midpoint's movement so a
//! two-finger drag works while pinching. Only the two earliest pointers are
//! measured; further pointers are tracked but do not contribute.
//!
//! All positions are expected in one coordinate space, typically
//! viewport-local pixels, so zoom anchors can be used directly.

use kurbo::{Point, Vec2};

use crate::PointerId;
use crate::pointers::PointerMap;

/// Midpoint and distance between two pointers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchMetrics {
    /// Midpoint of the two pointers.
    pub center: Point,
    /// Euclidean distance between the two pointers.
    pub distance: f64,
}

impl PinchMetrics {
    /// Measures the pair `a`, `b`.
    #[must_use]
    pub fn between(a: Point, b: Point) -> Self {
        Self {
            center: a.midpoint(b),
            distance: a.distance(b),
        }
    }
}

/// The phase of a pan/pinch interaction.
///
/// Each phase carries only the anchors that are meaningful in it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// Exactly one pointer is down; `last` is its previous position.
    Panning {
        /// Anchor for the next incremental pan.
        last: Point,
    },
    /// Two or more pointers are down.
    Pinching {
        /// Metrics of the first two pointers at the previous event.
        last: PinchMetrics,
    },
}

/// Scale change requested by a pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomStep {
    /// Multiplicative factor to apply to the current scale.
    pub factor: f64,
    /// Point that must stay fixed while scaling.
    pub anchor: Point,
}

/// Changes to apply to a view after a pointer move.
///
/// Apply `zoom` first, then `pan`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureStep {
    /// Optional anchored scale change.
    pub zoom: Option<ZoomStep>,
    /// Translation delta.
    pub pan: Vec2,
}

/// Recognizes one-finger pans and two-finger pinches.
#[derive(Clone, Debug, Default)]
pub struct PanZoomGesture {
    pointers: PointerMap,
    phase: GesturePhase,
}

impl PanZoomGesture {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Tracked pointers.
    #[must_use]
    pub fn pointers(&self) -> &PointerMap {
        &self.pointers
    }

    /// Returns `true` while any pointer is down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.pointers.is_empty()
    }

    /// Registers a pointer going down at `pos`.
    ///
    /// The first pointer anchors a pan; the second anchors a pinch. Later
    /// pointers are tracked without changing the anchors.
    pub fn pointer_down(&mut self, id: PointerId, pos: Point) {
        self.pointers.insert(id, pos);
        match self.pointers.len() {
            1 => self.phase = GesturePhase::Panning { last: pos },
            2 => self.reanchor(),
            _ => {}
        }
    }

    /// Updates a tracked pointer and returns the resulting view change.
    ///
    /// Returns `None` for pointers that are not tracked, or when the phase
    /// has no anchor to measure against.
    pub fn pointer_move(&mut self, id: PointerId, pos: Point) -> Option<GestureStep> {
        if !self.pointers.contains(id) {
            return None;
        }
        self.pointers.insert(id, pos);

        if self.pointers.len() == 1 {
            let GesturePhase::Panning { last } = self.phase else {
                return None;
            };
            self.phase = GesturePhase::Panning { last: pos };
            return Some(GestureStep {
                zoom: None,
                pan: pos - last,
            });
        }

        let (a, b) = self.pointers.first_two()?;
        let metrics = PinchMetrics::between(a, b);
        let previous = self.phase;
        self.phase = GesturePhase::Pinching { last: metrics };

        let GesturePhase::Pinching { last } = previous else {
            return None;
        };
        let zoom = (last.distance > 0.0).then(|| ZoomStep {
            factor: metrics.distance / last.distance,
            anchor: metrics.center,
        });
        Some(GestureStep {
            zoom,
            pan: metrics.center - last.center,
        })
    }

    /// Handles a pointer going up or being cancelled.
    ///
    /// A single remaining pointer becomes the new pan anchor; two or more
    /// remaining pointers re-anchor the pinch at their current positions.
    /// Returns `true` if the pointer was tracked.
    pub fn pointer_up(&mut self, id: PointerId) -> bool {
        if self.pointers.remove(id).is_none() {
            return false;
        }
        self.reanchor();
        true
    }

    /// Handles a pointer leaving the element.
    ///
    /// When the pointer is not captured no up event will follow, so it is
    /// dropped as if it went up. Captured pointers are left alone.
    pub fn pointer_left(&mut self, id: PointerId, captured: bool) -> bool {
        if captured {
            return false;
        }
        self.pointer_up(id)
    }

    /// Forgets all pointers.
    pub fn clear(&mut self) {
        self.pointers.clear();
        self.phase = GesturePhase::Idle;
    }

    fn reanchor(&mut self) {
        self.phase = match (self.pointers.first_two(), self.pointers.first()) {
            (Some((a, b)), _) => GesturePhase::Pinching {
                last: PinchMetrics::between(a, b),
            },
            (None, Some(last)) => GesturePhase::Panning { last },
            (None, None) => GesturePhase::Idle,
        };
    }
}
