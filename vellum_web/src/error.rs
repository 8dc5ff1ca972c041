// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Reasons a widget could not be attached.
///
/// None of these are shown to the user: the page logs them at `debug` level
/// and leaves the widget inert.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A required element inside the widget root is missing.
    #[error("missing required element `{0}`")]
    MissingElement(&'static str),
    /// The carousel track has no slides.
    #[error("slider track has no slides")]
    NoSlides,
    /// A DOM call failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// A malformed configuration attribute.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The attribute is not a number.
    #[error("`{attribute}` is not a number: {value:?}")]
    NotANumber {
        /// Attribute name.
        attribute: &'static str,
        /// Raw attribute value.
        value: String,
    },
    /// The attribute is a number outside its allowed range.
    #[error("`{attribute}` must be a positive finite number, got {value}")]
    OutOfRange {
        /// Attribute name.
        attribute: &'static str,
        /// Parsed value.
        value: f64,
    },
}
