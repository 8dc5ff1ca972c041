// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget tuning, overridable through data attributes on the widget roots.
//!
//! Every value has a built-in default. A root element may override any of
//! them, for example `<div data-blueprint data-blueprint-max-scale="5">`.
//! Malformed overrides are logged at `warn` level and ignored.

use log::warn;
use vellum_carousel::SwipeConfig;
use vellum_view2d::ScaleLimits;

use crate::error::ConfigError;

/// Attribute overriding [`ScaleLimits::min`].
pub const MIN_SCALE_ATTR: &str = "data-blueprint-min-scale";
/// Attribute overriding [`ScaleLimits::max`].
pub const MAX_SCALE_ATTR: &str = "data-blueprint-max-scale";
/// Attribute overriding [`BlueprintConfig::wheel_intensity`].
pub const WHEEL_INTENSITY_ATTR: &str = "data-blueprint-wheel-intensity";
/// Attribute overriding [`BlueprintConfig::double_click_factor`].
pub const DOUBLE_CLICK_FACTOR_ATTR: &str = "data-blueprint-double-click-factor";
/// Attribute overriding [`BlueprintConfig::button_factor`].
pub const BUTTON_FACTOR_ATTR: &str = "data-blueprint-button-factor";
/// Attribute overriding [`SwipeConfig::threshold_ratio`].
pub const THRESHOLD_RATIO_ATTR: &str = "data-slider-threshold-ratio";
/// Attribute overriding [`SwipeConfig::max_threshold`].
pub const MAX_THRESHOLD_ATTR: &str = "data-slider-max-threshold";

/// Tuning for the blueprint pan/zoom viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlueprintConfig {
    /// Allowed scale range.
    pub limits: ScaleLimits,
    /// Wheel sensitivity: each event scales by `exp(-delta_y * intensity)`.
    pub wheel_intensity: f64,
    /// Scale multiplier for a double click.
    pub double_click_factor: f64,
    /// Scale multiplier (or divisor) for the zoom buttons.
    pub button_factor: f64,
}

impl BlueprintConfig {
    /// Default wheel sensitivity.
    pub const DEFAULT_WHEEL_INTENSITY: f64 = 0.0014;
    /// Default double-click multiplier.
    pub const DEFAULT_DOUBLE_CLICK_FACTOR: f64 = 1.4;
    /// Default zoom button multiplier.
    pub const DEFAULT_BUTTON_FACTOR: f64 = 1.2;

    /// Reads overrides through `lookup`, which returns an attribute's value.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let min = read(&lookup, MIN_SCALE_ATTR).unwrap_or(defaults.limits.min());
        let max = read(&lookup, MAX_SCALE_ATTR).unwrap_or(defaults.limits.max());
        Self {
            limits: ScaleLimits::new(min, max),
            wheel_intensity: read(&lookup, WHEEL_INTENSITY_ATTR)
                .unwrap_or(defaults.wheel_intensity),
            double_click_factor: read(&lookup, DOUBLE_CLICK_FACTOR_ATTR)
                .unwrap_or(defaults.double_click_factor),
            button_factor: read(&lookup, BUTTON_FACTOR_ATTR).unwrap_or(defaults.button_factor),
        }
    }
}

impl Default for BlueprintConfig {
    fn default() -> Self {
        Self {
            limits: ScaleLimits::default(),
            wheel_intensity: Self::DEFAULT_WHEEL_INTENSITY,
            double_click_factor: Self::DEFAULT_DOUBLE_CLICK_FACTOR,
            button_factor: Self::DEFAULT_BUTTON_FACTOR,
        }
    }
}

/// Tuning for the slide carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderConfig {
    /// Swipe threshold parameters.
    pub swipe: SwipeConfig,
}

impl SliderConfig {
    /// Reads overrides through `lookup`, which returns an attribute's value.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = SwipeConfig::default();
        Self {
            swipe: SwipeConfig {
                threshold_ratio: read(&lookup, THRESHOLD_RATIO_ATTR)
                    .unwrap_or(defaults.threshold_ratio),
                max_threshold: read(&lookup, MAX_THRESHOLD_ATTR)
                    .unwrap_or(defaults.max_threshold),
            },
        }
    }

    /// Reads overrides from the slider root, falling back to the viewport
    /// for attributes the root does not carry.
    pub fn from_layered_attributes(
        root: impl Fn(&str) -> Option<String>,
        viewport: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self::from_attributes(|name| root(name).or_else(|| viewport(name)))
    }
}

/// Parses a positive, finite number from an attribute value.
pub fn parse_positive(attribute: &'static str, raw: &str) -> Result<f64, ConfigError> {
    let value: f64 = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        attribute,
        value: raw.to_owned(),
    })?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange { attribute, value })
    }
}

fn read(lookup: &impl Fn(&str) -> Option<String>, attribute: &'static str) -> Option<f64> {
    let raw = lookup(attribute)?;
    parse_positive(attribute, &raw)
        .inspect_err(|err| warn!("ignoring attribute: {err}"))
        .ok()
}
