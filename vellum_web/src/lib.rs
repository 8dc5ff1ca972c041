// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vellum_web --heading-base-level=0

//! Browser bindings for the Vellum widgets.
//!
//! Two independent widgets are attached to attribute-addressed DOM subtrees:
//!
//! - The **blueprint viewport** (`[data-blueprint]`): wheel, drag, pinch, and
//!   double-click pan/zoom of `[data-blueprint-scene]` inside
//!   `[data-blueprint-viewport]`, with optional zoom-in, zoom-out and reset
//!   buttons.
//! - The **slide carousel** (`[data-slider-viewport]` containing
//!   `[data-slider-track]`): pointer swipes, arrow/page/home/end keys, dot
//!   indicators and prev/next buttons.
//!
//! Missing markup leaves a widget inert. Nothing is reported to the user;
//! reasons are logged through the [`log`] facade at `debug` level, so the
//! host page decides whether and where they show up.
//!
//! # Usage
//!
//! From JavaScript, after loading the generated module:
//!
//! ```js
//! const widgets = attachPage();
//! // ... later, if the page swaps out its content:
//! widgets.detach();
//! ```
//!
//! From Rust on `wasm32`, attach individual widgets:
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn attach(
//!     document: &web_sys::Document,
//! ) -> Result<Option<vellum_web::BlueprintWidget>, vellum_web::WidgetError> {
//!     vellum_web::BlueprintWidget::attach(document)
//! }
//! ```
//!
//! The event handling itself lives in [`BlueprintController`] and
//! `vellum_carousel::Carousel`, which compile on every target and are tested
//! natively.

mod config;
mod controller;
mod error;
mod input;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use config::{
    BUTTON_FACTOR_ATTR, BlueprintConfig, DOUBLE_CLICK_FACTOR_ATTR, MAX_SCALE_ATTR,
    MAX_THRESHOLD_ATTR, MIN_SCALE_ATTR, SliderConfig, THRESHOLD_RATIO_ATTR, WHEEL_INTENSITY_ATTR,
    parse_positive,
};
pub use controller::BlueprintController;
pub use error::{ConfigError, WidgetError};
pub use input::{accepts_pointer, local_point, parse_dot_index};

#[cfg(target_arch = "wasm32")]
pub use dom::{BlueprintWidget, PageWidgets, SliderWidget, attach_page};
