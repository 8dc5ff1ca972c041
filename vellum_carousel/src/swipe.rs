// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Threshold parameters for committing a swipe.
///
/// The distance a drag must cover is `min(max_threshold, viewport_width *
/// threshold_ratio)`, so narrow viewports need proportionally short drags and
/// wide ones never need more than `max_threshold` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Fraction of the viewport width a drag must cover.
    pub threshold_ratio: f64,
    /// Upper bound on the threshold, in pixels.
    pub max_threshold: f64,
}

impl SwipeConfig {
    /// Default fraction of the viewport width.
    pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.2;
    /// Default cap in pixels.
    pub const DEFAULT_MAX_THRESHOLD: f64 = 160.0;

    /// Drag distance needed to change slides in a viewport of `viewport_width`.
    #[must_use]
    pub fn threshold(&self, viewport_width: f64) -> f64 {
        (viewport_width * self.threshold_ratio).min(self.max_threshold)
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_ratio: Self::DEFAULT_THRESHOLD_RATIO,
            max_threshold: Self::DEFAULT_MAX_THRESHOLD,
        }
    }
}

/// Outcome of a released drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Dragged left past the threshold: show the next slide.
    Next,
    /// Dragged right past the threshold: show the previous slide.
    Previous,
    /// Not far enough: snap back to the current slide.
    Stay,
}

/// Classifies a horizontal drag of `delta` pixels (end minus start).
///
/// The threshold must be exceeded strictly; a drag of exactly `threshold`
/// pixels snaps back.
#[must_use]
pub fn classify_release(delta: f64, threshold: f64) -> Release {
    if delta < -threshold {
        Release::Next
    } else if delta > threshold {
        Release::Previous
    } else {
        Release::Stay
    }
}
