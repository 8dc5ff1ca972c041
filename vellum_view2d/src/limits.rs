// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Inclusive range of allowed scale factors for a [`crate::PanZoomView`].
///
/// The default range is `[1, 3]`: the scene can never be shown smaller than
/// its natural size and can be magnified up to three times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Default minimum scale.
    pub const DEFAULT_MIN: f64 = 1.0;
    /// Default maximum scale.
    pub const DEFAULT_MAX: f64 = 3.0;

    /// Creates a new range, swapping the bounds if they are given out of order.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into this range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies within this range.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::ScaleLimits;

    #[test]
    fn default_is_one_to_three() {
        let limits = ScaleLimits::default();
        assert_eq!(limits.min(), 1.0);
        assert_eq!(limits.max(), 3.0);
    }

    #[test]
    fn out_of_order_bounds_are_swapped() {
        let limits = ScaleLimits::new(4.0, 0.5);
        assert_eq!(limits.min(), 0.5);
        assert_eq!(limits.max(), 4.0);
    }

    #[test]
    fn clamp_pins_to_bounds() {
        let limits = ScaleLimits::default();
        assert_eq!(limits.clamp(0.2), 1.0);
        assert_eq!(limits.clamp(2.5), 2.5);
        assert_eq!(limits.clamp(9.0), 3.0);
        assert!(limits.contains(3.0));
        assert!(!limits.contains(3.0001));
    }
}
