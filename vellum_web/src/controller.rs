// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use vellum_event_state::PointerId;
use vellum_event_state::gesture::PanZoomGesture;
use vellum_view2d::PanZoomView;

use crate::config::BlueprintConfig;

/// Input handling for the blueprint viewport, independent of the DOM.
///
/// Each method corresponds to one browser event and returns `true` when the
/// view changed and the scene transform has to be rendered again. All points
/// are viewport-local pixels.
#[derive(Clone, Debug)]
pub struct BlueprintController {
    view: PanZoomView,
    gesture: PanZoomGesture,
    config: BlueprintConfig,
}

impl BlueprintController {
    /// Creates a controller for a viewport of `view_size` pixels.
    #[must_use]
    pub fn new(view_size: Size, config: BlueprintConfig) -> Self {
        Self {
            view: PanZoomView::with_limits(view_size, config.limits),
            gesture: PanZoomGesture::new(),
            config,
        }
    }

    /// The pan/zoom state.
    #[must_use]
    pub fn view(&self) -> &PanZoomView {
        &self.view
    }

    /// The pointer gesture state.
    #[must_use]
    pub fn gesture(&self) -> &PanZoomGesture {
        &self.gesture
    }

    /// Active tuning.
    #[must_use]
    pub fn config(&self) -> &BlueprintConfig {
        &self.config
    }

    /// Records the current viewport size; it anchors centered zooms.
    pub fn set_view_size(&mut self, size: Size) {
        self.view.set_view_size(size);
    }

    /// Returns `true` while any pointer is down.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// CSS `transform` for the scene element.
    #[must_use]
    pub fn css_transform(&self) -> String {
        self.view.css_transform()
    }

    /// Wheel scroll of `delta_y` with the cursor at `cursor`.
    pub fn wheel(&mut self, delta_y: f64, cursor: Point) -> bool {
        let factor = (-delta_y * self.config.wheel_intensity).exp();
        self.view.set_scale(self.view.scale() * factor, cursor)
    }

    /// A pointer went down.
    pub fn pointer_down(&mut self, id: PointerId, pos: Point) {
        self.gesture.pointer_down(id, pos);
    }

    /// A pointer moved; pans with one pointer, pinches with two.
    pub fn pointer_move(&mut self, id: PointerId, pos: Point) -> bool {
        let Some(step) = self.gesture.pointer_move(id, pos) else {
            return false;
        };
        if let Some(zoom) = step.zoom {
            self.view
                .set_scale(self.view.scale() * zoom.factor, zoom.anchor);
        }
        self.view.pan_by_view(step.pan);
        true
    }

    /// A pointer went up or was cancelled. Returns `true` if it was tracked.
    pub fn pointer_up(&mut self, id: PointerId) -> bool {
        self.gesture.pointer_up(id)
    }

    /// A pointer left the viewport. Returns `true` if it was dropped.
    pub fn pointer_left(&mut self, id: PointerId, captured: bool) -> bool {
        self.gesture.pointer_left(id, captured)
    }

    /// Double click at `pos`.
    pub fn double_click(&mut self, pos: Point) -> bool {
        self.view
            .zoom_about_view_point(pos, self.config.double_click_factor)
    }

    /// Zoom-in button.
    pub fn zoom_in(&mut self) -> bool {
        self.view
            .set_scale_centered(self.view.scale() * self.config.button_factor)
    }

    /// Zoom-out button.
    pub fn zoom_out(&mut self) -> bool {
        self.view
            .set_scale_centered(self.view.scale() / self.config.button_factor)
    }

    /// Reset button.
    pub fn reset(&mut self) {
        self.view.reset();
    }
}
