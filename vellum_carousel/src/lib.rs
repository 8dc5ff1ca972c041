// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vellum_carousel --heading-base-level=0

//! Vellum Carousel: a headless model of a horizontally sliding track of
//! equally wide slides.
//!
//! The core concepts are:
//!
//! - [`Carousel`]: owns the current slide index (always within
//!   `0..len`), the cached viewport width, and an in-progress pointer drag.
//! - [`SlideFrame`]: a snapshot of everything a renderer needs after an
//!   operation: the track offset, whether the move should animate, which dot
//!   is selected, and which navigation buttons are disabled.
//! - [`SwipeConfig`] and [`classify_release`]: decide whether a finished drag
//!   commits to the next/previous slide or snaps back.
//! - [`NavKey`]: keyboard mapping for arrow, page, home and end keys.
//!
//! This crate does not know about the DOM. Host code is responsible for
//! measuring the viewport, forwarding input, and applying [`SlideFrame`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use vellum_carousel::{Carousel, NavKey};
//!
//! // Four slides in a 500px wide viewport.
//! let mut carousel = Carousel::new(4, 500.0).unwrap();
//!
//! // Drag left by 120px: more than the 100px threshold, so advance.
//! carousel.begin_drag(1, 400.0, 500.0);
//! assert_eq!(carousel.drag_to(1, 280.0), Some(-120.0));
//! let frame = carousel.end_drag(1, 500.0).unwrap();
//! assert_eq!(frame.index, 1);
//! assert_eq!(frame.offset, -500.0);
//!
//! // `End` jumps to the last slide; the next button is now disabled.
//! let frame = carousel.navigate(NavKey::Last, 500.0);
//! assert_eq!(frame.index, 3);
//! assert!(frame.next_disabled && !frame.prev_disabled);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod carousel;
mod keys;
mod swipe;

pub use carousel::{Carousel, SlideFrame};
pub use keys::NavKey;
pub use swipe::{Release, SwipeConfig, classify_release};
