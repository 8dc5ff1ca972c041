// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use kurbo::{Affine, Point, Size, Vec2};

use crate::limits::ScaleLimits;

/// Pan/zoom state for a scene element inside a fixed viewport.
///
/// `PanZoomView` maps scene coordinates into viewport-local pixels with a
/// translation followed by a uniform scale. It can be used to:
/// - Zoom around an anchor point so the scene point under it does not move.
/// - Pan by deltas in viewport space (no bounds are applied to panning).
/// - Convert points between scene and viewport space.
/// - Render the current state as a CSS `transform` value.
#[derive(Clone, Debug)]
pub struct PanZoomView {
    view_size: Size,
    scale: f64,
    translate: Vec2,
    limits: ScaleLimits,
}

impl PanZoomView {
    /// Creates a new view for a viewport of `view_size` pixels.
    ///
    /// - Initial scale is `1.0` (clamped into the default limits).
    /// - Initial translation is zero.
    /// - Scale is clamped to `[1, 3]` by default.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self::with_limits(view_size, ScaleLimits::default())
    }

    /// Creates a new view with explicit scale limits.
    #[must_use]
    pub fn with_limits(view_size: Size, limits: ScaleLimits) -> Self {
        Self {
            view_size,
            scale: limits.clamp(1.0),
            translate: Vec2::ZERO,
            limits,
        }
    }

    /// Returns the viewport size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Updates the viewport size.
    ///
    /// Scale and translation are left untouched; only the default zoom anchor
    /// (the viewport center) moves.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Returns the center of the viewport in viewport-local coordinates.
    #[must_use]
    pub fn view_center(&self) -> Point {
        Point::new(self.view_size.width / 2.0, self.view_size.height / 2.0)
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current translation in viewport pixels.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Returns the configured scale limits.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Replaces the scale limits.
    ///
    /// The current scale is clamped into the new range, anchored at the
    /// viewport center.
    pub fn set_scale_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
        self.set_scale_centered(self.scale);
    }

    /// Sets the scale, keeping the scene point under `anchor` fixed.
    ///
    /// `anchor` is in viewport-local pixels. The requested scale is clamped
    /// into the configured limits first, so infinite targets land on a bound.
    /// Returns `false` without touching the state if the clamped scale equals
    /// the current one or `target` is NaN.
    pub fn set_scale(&mut self, target: f64, anchor: Point) -> bool {
        if target.is_nan() {
            return false;
        }
        let next = self.limits.clamp(target);
        let current = self.scale;
        if (next - current).abs() < f64::EPSILON {
            return false;
        }

        // Scene point currently under the anchor.
        let origin = (anchor.to_vec2() - self.translate) / current;
        self.scale = next;
        self.translate = anchor.to_vec2() - origin * next;
        true
    }

    /// Sets the scale anchored at the viewport center.
    pub fn set_scale_centered(&mut self, target: f64) -> bool {
        self.set_scale(target, self.view_center())
    }

    /// Multiplies the scale by `factor`, anchored at `anchor`.
    ///
    /// Non-positive factors are ignored.
    pub fn zoom_about_view_point(&mut self, anchor: Point, factor: f64) -> bool {
        if factor <= 0.0 {
            return false;
        }
        self.set_scale(self.scale * factor, anchor)
    }

    /// Multiplies the scale by `factor`, anchored at the viewport center.
    pub fn zoom_about_center(&mut self, factor: f64) -> bool {
        self.zoom_about_view_point(self.view_center(), factor)
    }

    /// Pans by a delta in viewport pixels.
    ///
    /// Panning is unbounded and purely additive.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        self.translate += delta;
    }

    /// Restores the identity view: scale `1` (or the nearest allowed value)
    /// and zero translation.
    pub fn reset(&mut self) {
        self.scale = self.limits.clamp(1.0);
        self.translate = Vec2::ZERO;
    }

    /// Returns the scene → viewport transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Converts a scene point into viewport-local coordinates.
    #[must_use]
    pub fn scene_to_view_point(&self, pt: Point) -> Point {
        self.transform() * pt
    }

    /// Converts a viewport-local point into scene coordinates.
    #[must_use]
    pub fn view_to_scene_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.translate) / self.scale).to_point()
    }

    /// Renders the state as a CSS `transform` value.
    ///
    /// The format is `translate(<x>px, <y>px) scale(<s>)`, applied to the
    /// scene element with its transform origin at the top-left corner.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanZoomDebugInfo {
        PanZoomDebugInfo {
            view_size: self.view_size,
            scale: self.scale,
            translate: self.translate,
            min_scale: self.limits.min(),
            max_scale: self.limits.max(),
            visible_scene_origin: self.view_to_scene_point(Point::ZERO),
        }
    }
}

/// Debug snapshot of a [`PanZoomView`].
#[derive(Clone, Copy, Debug)]
pub struct PanZoomDebugInfo {
    /// Viewport size in pixels.
    pub view_size: Size,
    /// Current scale.
    pub scale: f64,
    /// Current translation in viewport pixels.
    pub translate: Vec2,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Scene point shown at the viewport's top-left corner.
    pub visible_scene_origin: Point,
}
