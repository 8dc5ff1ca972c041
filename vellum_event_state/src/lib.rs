// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vellum_event_state --heading-base-level=0

//! Vellum Event State: pointer state machines for the Vellum widgets.
//!
//! This crate provides small, explicit state machines for interactions that
//! need to be tracked across several input events:
//!
//! - [`pointers`]: an insertion-ordered map from pointer id to last known
//!   position.
//! - [`gesture`]: one-finger pan and two-finger pinch recognition, with the
//!   phases `Idle`, `Panning`, and `Pinching` modelled as a tagged enum.
//! - [`drag`]: a single-pointer drag keyed by pointer id, with total offset
//!   from the start position.
//!
//! The state machines never touch the DOM or any rendering backend. They
//! consume positions and pointer ids and produce deltas that a caller applies
//! to its own model (for example `vellum_view2d::PanZoomView`).
//!
//! ## Pan and pinch
//!
//! ```rust
//! # #[cfg(feature = "gesture")]
//! # {
//! use kurbo::{Point, Vec2};
//! use vellum_event_state::gesture::PanZoomGesture;
//!
//! let mut gesture = PanZoomGesture::new();
//!
//! // One finger down, then a move: the step pans by the movement.
//! gesture.pointer_down(1, Point::new(100.0, 100.0));
//! let step = gesture.pointer_move(1, Point::new(110.0, 95.0)).unwrap();
//! assert_eq!(step.pan, Vec2::new(10.0, -5.0));
//! assert!(step.zoom.is_none());
//!
//! // A second finger starts a pinch; spreading the fingers zooms in.
//! gesture.pointer_down(2, Point::new(210.0, 95.0));
//! let step = gesture.pointer_move(2, Point::new(310.0, 95.0)).unwrap();
//! let zoom = step.zoom.unwrap();
//! assert_eq!(zoom.factor, 2.0);
//! # }
//! ```
//!
//! ## Drag
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # {
//! use kurbo::{Point, Vec2};
//! use vellum_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(7, Point::new(300.0, 40.0));
//!
//! // Moves from other pointers are ignored.
//! assert_eq!(drag.update(8, Point::new(0.0, 0.0)), None);
//! assert_eq!(drag.update(7, Point::new(180.0, 42.0)), Some(Vec2::new(-120.0, 2.0)));
//!
//! // Ending the drag yields the total offset from the start.
//! assert_eq!(drag.end(7), Some(Vec2::new(-120.0, 2.0)));
//! assert!(!drag.is_dragging());
//! # }
//! ```
//!
//! ## Features
//!
//! - `gesture`: pointer map and pan/pinch recognition (requires `smallvec`)
//! - `drag`: single-pointer drag tracking
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

#[cfg(feature = "drag")]
pub mod drag;
#[cfg(feature = "gesture")]
pub mod gesture;
#[cfg(feature = "gesture")]
pub mod pointers;

/// Identifier of an active pointer, as reported by the platform.
///
/// This matches the `pointerId` of DOM pointer events.
pub type PointerId = i32;
