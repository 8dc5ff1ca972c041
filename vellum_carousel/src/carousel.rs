// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use vellum_event_state::PointerId;
use vellum_event_state::drag::DragState;

use crate::keys::NavKey;
use crate::swipe::{Release, SwipeConfig, classify_release};

/// What a renderer should show after a carousel operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideFrame {
    /// Selected slide.
    pub index: usize,
    /// Number of slides.
    pub len: usize,
    /// Horizontal track offset in pixels (`translateX`).
    pub offset: f64,
    /// Whether the move to `offset` should use the track's CSS transition.
    ///
    /// This is `false` while a drag is in progress so the track follows the
    /// pointer immediately.
    pub animate: bool,
    /// The previous button has nowhere to go.
    pub prev_disabled: bool,
    /// The next button has nowhere to go.
    pub next_disabled: bool,
}

impl SlideFrame {
    /// Returns `true` if the dot targeting `index` is the selected one.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        index == self.index
    }

    /// Roving tab index for the dot targeting `index`: `0` for the selected
    /// dot, `-1` for the rest.
    #[must_use]
    pub fn dot_tab_index(&self, index: usize) -> i32 {
        if self.is_selected(index) { 0 } else { -1 }
    }
}

/// A track of `len` equally wide slides with one selected slide.
///
/// Every navigation request is clamped into `0..len`, so the selected index
/// is always valid. Operations return a [`SlideFrame`] describing the new
/// rendering; navigation always produces a frame even when the index does not
/// change, which snaps the track back after an overscrolled drag.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    viewport_width: f64,
    swipe: SwipeConfig,
    drag: DragState,
}

impl Carousel {
    /// Creates a carousel showing the first of `len` slides.
    ///
    /// Returns `None` when there are no slides.
    #[must_use]
    pub fn new(len: usize, viewport_width: f64) -> Option<Self> {
        (len > 0).then(|| Self {
            len,
            index: 0,
            viewport_width,
            swipe: SwipeConfig::default(),
            drag: DragState::default(),
        })
    }

    /// Replaces the swipe threshold parameters.
    #[must_use]
    pub fn with_swipe(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no slides, which construction rules out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Selected slide.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Last measured viewport width.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Swipe threshold parameters.
    #[must_use]
    pub fn swipe(&self) -> SwipeConfig {
        self.swipe
    }

    /// Returns `true` while a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Pointer driving the current drag.
    #[must_use]
    pub fn drag_pointer(&self) -> Option<PointerId> {
        self.drag.pointer()
    }

    /// Track offset that shows the selected slide.
    #[must_use]
    pub fn offset(&self) -> f64 {
        // Subtracting from zero keeps the first slide at `0px` rather than `-0px`.
        0.0 - self.index as f64 * self.viewport_width
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn frame(&self) -> SlideFrame {
        let offset = match self.drag.total_offset() {
            Some(delta) => self.offset() + delta.x,
            None => self.offset(),
        };
        SlideFrame {
            index: self.index,
            len: self.len,
            offset,
            animate: !self.drag.is_dragging(),
            prev_disabled: self.index == 0,
            next_disabled: self.index == self.len - 1,
        }
    }

    /// Re-measures the viewport and aligns the track with the selected slide.
    pub fn snap(&mut self, viewport_width: f64) -> SlideFrame {
        self.viewport_width = viewport_width;
        self.frame()
    }

    /// Selects `index`, clamped to the last slide, and snaps.
    pub fn go_to(&mut self, index: usize, viewport_width: f64) -> SlideFrame {
        self.index = index.min(self.len - 1);
        self.snap(viewport_width)
    }

    /// Selects the next slide, if any, and snaps.
    pub fn next(&mut self, viewport_width: f64) -> SlideFrame {
        self.go_to(self.index.saturating_add(1), viewport_width)
    }

    /// Selects the previous slide, if any, and snaps.
    pub fn prev(&mut self, viewport_width: f64) -> SlideFrame {
        self.go_to(self.index.saturating_sub(1), viewport_width)
    }

    /// Applies a keyboard command.
    pub fn navigate(&mut self, key: NavKey, viewport_width: f64) -> SlideFrame {
        match key {
            NavKey::Next => self.next(viewport_width),
            NavKey::Previous => self.prev(viewport_width),
            NavKey::First => self.go_to(0, viewport_width),
            NavKey::Last => self.go_to(self.len - 1, viewport_width),
        }
    }

    /// Starts dragging the track with `pointer` at horizontal position `x`.
    ///
    /// The returned frame has `animate == false` so the renderer can disable
    /// the track transition for the duration of the drag.
    pub fn begin_drag(&mut self, pointer: PointerId, x: f64, viewport_width: f64) -> SlideFrame {
        self.viewport_width = viewport_width;
        self.drag.start(pointer, Point::new(x, 0.0));
        self.frame()
    }

    /// Follows the dragging pointer to `x`, returning the live track offset.
    ///
    /// The offset is not clamped, so the first and last slides can be pulled
    /// past their resting position. Returns `None` for other pointers or when
    /// no drag is in progress.
    pub fn drag_to(&mut self, pointer: PointerId, x: f64) -> Option<f64> {
        self.drag.update(pointer, Point::new(x, 0.0))?;
        Some(self.frame().offset)
    }

    /// Finishes the drag driven by `pointer`.
    ///
    /// The drag distance is compared against the swipe threshold for the
    /// width measured when the drag started; then the track snaps using
    /// `viewport_width`. Returns `None` for other pointers or when no drag is
    /// in progress.
    pub fn end_drag(&mut self, pointer: PointerId, viewport_width: f64) -> Option<SlideFrame> {
        let delta = self.drag.end(pointer)?;
        let threshold = self.swipe.threshold(self.viewport_width);
        let frame = match classify_release(delta.x, threshold) {
            Release::Next => self.next(viewport_width),
            Release::Previous => self.prev(viewport_width),
            Release::Stay => self.snap(viewport_width),
        };
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::Carousel;
    use crate::{NavKey, SwipeConfig};

    fn four() -> Carousel {
        Carousel::new(4, 500.0).unwrap()
    }

    #[test]
    fn empty_track_is_rejected() {
        assert!(Carousel::new(0, 500.0).is_none());
    }

    #[test]
    fn starts_on_first_slide() {
        let c = four();
        let frame = c.frame();
        assert_eq!(frame.index, 0);
        assert_eq!(frame.offset, 0.0);
        assert!(frame.animate);
    }

    #[test]
    fn first_slide_offset_is_positive_zero() {
        let mut c = four();
        c.go_to(2, 500.0);
        let frame = c.go_to(0, 500.0);
        assert!(frame.offset.is_sign_positive());
    }

    #[test]
    fn go_to_clamps_to_last_slide() {
        let mut c = four();
        assert_eq!(c.go_to(99, 500.0).index, 3);
        assert_eq!(c.go_to(usize::MAX, 500.0).index, 3);
        assert_eq!(c.go_to(2, 500.0).offset, -1000.0);
    }

    #[test]
    fn next_and_prev_stop_at_ends() {
        let mut c = four();
        assert_eq!(c.prev(500.0).index, 0);
        for _ in 0..10 {
            c.next(500.0);
        }
        assert_eq!(c.index(), 3);
        assert_eq!(c.prev(500.0).index, 2);
    }

    #[test]
    fn button_disabled_state_tracks_ends() {
        let mut c = four();
        let first = c.frame();
        assert!(first.prev_disabled);
        assert!(!first.next_disabled);

        let last = c.go_to(3, 500.0);
        assert!(!last.prev_disabled);
        assert!(last.next_disabled);

        let middle = c.go_to(1, 500.0);
        assert!(!middle.prev_disabled && !middle.next_disabled);
    }

    #[test]
    fn single_slide_disables_both_buttons() {
        let c = Carousel::new(1, 300.0).unwrap();
        let frame = c.frame();
        assert!(frame.prev_disabled && frame.next_disabled);
    }

    #[test]
    fn dots_follow_selection() {
        let mut c = four();
        let frame = c.go_to(2, 500.0);
        assert!(frame.is_selected(2));
        assert!(!frame.is_selected(0));
        assert_eq!(frame.dot_tab_index(2), 0);
        assert_eq!(frame.dot_tab_index(3), -1);
    }

    #[test]
    fn keyboard_home_and_end_jump() {
        let mut c = four();
        c.go_to(1, 500.0);
        assert_eq!(c.navigate(NavKey::Last, 500.0).index, 3);
        assert_eq!(c.navigate(NavKey::First, 500.0).index, 0);
        assert_eq!(c.navigate(NavKey::Next, 500.0).index, 1);
        assert_eq!(c.navigate(NavKey::Previous, 500.0).index, 0);
    }

    #[test]
    fn resize_resnaps_with_new_width() {
        let mut c = four();
        c.go_to(2, 500.0);
        assert_eq!(c.offset(), -1000.0);
        let frame = c.snap(800.0);
        assert_eq!(frame.offset, -1600.0);
        assert_eq!(c.viewport_width(), 800.0);
    }

    #[test]
    fn drag_tracks_pointer_without_animation() {
        let mut c = four();
        c.go_to(1, 500.0);
        let frame = c.begin_drag(5, 300.0, 500.0);
        assert!(!frame.animate);
        assert!(c.is_dragging());
        assert_eq!(c.drag_pointer(), Some(5));

        assert_eq!(c.drag_to(5, 260.0), Some(-540.0));
        assert_eq!(c.drag_to(6, 0.0), None);
        assert_eq!(c.frame().offset, -540.0);
    }

    #[test]
    fn drag_past_first_slide_overscrolls_then_snaps_back() {
        let mut c = four();
        c.begin_drag(1, 100.0, 500.0);
        assert_eq!(c.drag_to(1, 400.0), Some(300.0));

        let frame = c.end_drag(1, 500.0).unwrap();
        assert_eq!(frame.index, 0);
        assert_eq!(frame.offset, 0.0);
        assert!(frame.animate);
        assert!(!c.is_dragging());
    }

    #[test]
    fn release_classification_at_500px() {
        // Threshold is min(160, 500 * 0.2) = 100.
        let mut c = four();
        c.go_to(1, 500.0);

        c.begin_drag(1, 300.0, 500.0);
        c.drag_to(1, 180.0);
        assert_eq!(c.end_drag(1, 500.0).unwrap().index, 2);

        c.begin_drag(1, 300.0, 500.0);
        c.drag_to(1, 420.0);
        assert_eq!(c.end_drag(1, 500.0).unwrap().index, 1);

        c.begin_drag(1, 300.0, 500.0);
        c.drag_to(1, 220.0);
        assert_eq!(c.end_drag(1, 500.0).unwrap().index, 1);
    }

    #[test]
    fn end_drag_requires_matching_pointer() {
        let mut c = four();
        assert_eq!(c.end_drag(1, 500.0), None);

        c.begin_drag(1, 300.0, 500.0);
        assert_eq!(c.end_drag(2, 500.0), None);
        assert!(c.is_dragging());
    }

    #[test]
    fn custom_swipe_threshold() {
        let mut c = four().with_swipe(SwipeConfig {
            threshold_ratio: 0.5,
            max_threshold: 1_000.0,
        });
        c.begin_drag(1, 400.0, 500.0);
        c.drag_to(1, 200.0);
        // 200px is below the 250px threshold.
        assert_eq!(c.end_drag(1, 500.0).unwrap().index, 0);
    }
}
