// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the DOM-independent half of `vellum_web`.
//!
//! Each test plays a short input session against a [`BlueprintController`]
//! configured the way a page would configure it through data attributes.

use kurbo::{Point, Size, Vec2};
use vellum_web::{
    BlueprintConfig, BlueprintController, MAX_SCALE_ATTR, WHEEL_INTENSITY_ATTR, accepts_pointer,
    local_point,
};

fn configured(pairs: &[(&str, &str)]) -> BlueprintController {
    let config = BlueprintConfig::from_attributes(|name| {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_owned())
    });
    BlueprintController::new(Size::new(800.0, 600.0), config)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn raised_max_scale_lets_double_clicks_go_further() {
    let mut c = configured(&[(MAX_SCALE_ATTR, "5")]);
    let center = Point::new(400.0, 300.0);
    for _ in 0..10 {
        c.double_click(center);
    }
    assert_eq!(c.view().scale(), 5.0);
}

#[test]
fn malformed_overrides_fall_back_to_defaults() {
    let mut c = configured(&[(MAX_SCALE_ATTR, "huge"), (WHEEL_INTENSITY_ATTR, "-1")]);
    assert_eq!(c.config(), &BlueprintConfig::default());

    for _ in 0..10 {
        c.zoom_in();
    }
    assert_eq!(c.view().scale(), 3.0);
}

#[test]
fn scale_never_leaves_limits_across_mixed_input() {
    let mut c = configured(&[]);
    let cursor = Point::new(250.0, 120.0);
    for delta in [-900.0, -900.0, 2_000.0, -40.0, 12.0, -3_000.0] {
        c.wheel(delta, cursor);
        let scale = c.view().scale();
        assert!((1.0..=3.0).contains(&scale), "scale {scale} out of range");
    }
}

#[test]
fn pan_then_pinch_then_lift_one_finger_resumes_panning() {
    let mut c = configured(&[]);

    c.pointer_down(1, Point::new(100.0, 100.0));
    assert!(c.pointer_move(1, Point::new(120.0, 100.0)));
    assert_eq!(c.view().translate(), Vec2::new(20.0, 0.0));

    // Second finger 100px away, then spread to 200px.
    c.pointer_down(2, Point::new(220.0, 100.0));
    assert!(c.pointer_move(2, Point::new(320.0, 100.0)));
    assert!(close(c.view().scale(), 2.0));

    // Lifting the second finger re-anchors the pan on the first.
    assert!(c.pointer_up(2));
    let before = c.view().translate();
    assert!(c.pointer_move(1, Point::new(130.0, 110.0)));
    assert_eq!(c.view().translate() - before, Vec2::new(10.0, 10.0));
    assert!(close(c.view().scale(), 2.0));

    assert!(c.pointer_up(1));
    assert!(!c.is_dragging());
    assert!(!c.pointer_move(1, Point::new(0.0, 0.0)));
}

#[test]
fn captured_leave_keeps_the_pan_alive() {
    let mut c = configured(&[]);
    c.pointer_down(3, Point::new(50.0, 50.0));

    assert!(!c.pointer_left(3, true));
    assert!(c.pointer_move(3, Point::new(60.0, 50.0)));

    assert!(c.pointer_left(3, false));
    assert!(!c.is_dragging());
}

#[test]
fn secondary_mouse_buttons_are_filtered_before_the_controller() {
    assert!(accepts_pointer("mouse", 0));
    assert!(!accepts_pointer("mouse", 2));
    assert!(accepts_pointer("touch", -1));
}

#[test]
fn client_coordinates_become_viewport_local() {
    let origin = Point::new(40.0, 100.0);
    assert_eq!(local_point(440.0, 400.0, origin), Point::new(400.0, 300.0));
}
