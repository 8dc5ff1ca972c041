// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small conversions from DOM event fields.

use kurbo::Point;

/// Returns `true` if a pointer press should start a carousel drag.
///
/// Mouse presses with anything but the primary button are ignored; touch and
/// pen presses are always accepted.
#[must_use]
pub fn accepts_pointer(pointer_type: &str, button: i16) -> bool {
    pointer_type != "mouse" || button == 0
}

/// Parses the target index carried by a `data-slider-dot` attribute.
///
/// Only the leading integer counts, so `"2px"` and `"1.5"` read as `2` and
/// `1`. Negative values select the first slide; values past the end are
/// clamped later by the carousel. Returns `None` when no digits lead the
/// value.
#[must_use]
pub fn parse_dot_index(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(0);
    }
    // All-digit input only fails to parse on overflow.
    Some(digits.parse().unwrap_or(usize::MAX))
}

/// Converts client coordinates into coordinates local to an element whose
/// bounding box starts at `origin`.
#[must_use]
pub fn local_point(client_x: f64, client_y: f64, origin: Point) -> Point {
    Point::new(client_x - origin.x, client_y - origin.y)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{accepts_pointer, local_point, parse_dot_index};

    #[test]
    fn only_primary_mouse_button_drags() {
        assert!(accepts_pointer("mouse", 0));
        assert!(!accepts_pointer("mouse", 1));
        assert!(!accepts_pointer("mouse", 2));
        assert!(accepts_pointer("touch", 0));
        assert!(accepts_pointer("pen", -1));
    }

    #[test]
    fn dot_indices() {
        assert_eq!(parse_dot_index("0"), Some(0));
        assert_eq!(parse_dot_index(" 3 "), Some(3));
        assert_eq!(parse_dot_index("-2"), Some(0));
        assert_eq!(parse_dot_index(""), None);
        assert_eq!(parse_dot_index("two"), None);
        assert_eq!(parse_dot_index("-"), None);
    }

    #[test]
    fn dot_indices_use_the_leading_integer() {
        assert_eq!(parse_dot_index("1.5"), Some(1));
        assert_eq!(parse_dot_index("2px"), Some(2));
        assert_eq!(parse_dot_index("+4"), Some(4));
        assert_eq!(parse_dot_index("-0.5"), Some(0));
        assert_eq!(parse_dot_index("99999999999999999999999"), Some(usize::MAX));
    }

    #[test]
    fn local_points_subtract_origin() {
        let p = local_point(150.0, 90.0, Point::new(100.0, 40.0));
        assert_eq!(p, Point::new(50.0, 50.0));
    }
}
