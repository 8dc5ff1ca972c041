// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vellum_view2d --heading-base-level=0

//! Vellum View 2D: a headless pan/zoom model for a scene shown inside a
//! fixed-size viewport.
//!
//! The model tracks a uniform scale and a translation that together map scene
//! coordinates into viewport-local pixels:
//!
//! ```text
//! view = translate + scene * scale
//! ```
//!
//! It focuses on:
//! - Scale changes anchored at a chosen viewport point (zoom-to-cursor).
//! - Unbounded, purely additive panning.
//! - Clamping the scale into configurable [`ScaleLimits`].
//! - Rendering the state as a CSS `transform` string.
//!
//! It does **not** interpret input events. Callers wire wheel, pointer, and
//! button events into [`PanZoomView`] operations at a higher layer (see
//! `vellum_event_state` for the pointer gesture state machine).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vellum_view2d::PanZoomView;
//!
//! // 800x600 viewport, default scale limits [1, 3].
//! let mut view = PanZoomView::new(Size::new(800.0, 600.0));
//!
//! // Zoom in around the cursor; the scene point under it stays put.
//! let cursor = Point::new(200.0, 150.0);
//! let under_cursor = view.view_to_scene_point(cursor);
//! view.set_scale(2.0, cursor);
//! let after = view.scene_to_view_point(under_cursor);
//! assert!((after - cursor).hypot() < 1e-9);
//!
//! // Pan by a drag delta and render.
//! view.pan_by_view(Vec2::new(10.0, -5.0));
//! assert_eq!(view.css_transform(), "translate(-190px, -155px) scale(2)");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod limits;
mod pan_zoom;

pub use limits::ScaleLimits;
pub use pan_zoom::{PanZoomDebugInfo, PanZoomView};
