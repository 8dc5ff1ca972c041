// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vellum_carousel::{Carousel, NavKey};

fn bench_swipe_cycle(c: &mut Criterion) {
    c.bench_function("carousel/swipe_cycle", |b| {
        let mut carousel = Carousel::new(12, 640.0).unwrap();
        b.iter(|| {
            // Drag left past the threshold in small steps, then release.
            carousel.begin_drag(1, 600.0, 640.0);
            for x in (300..600).rev().step_by(10) {
                black_box(carousel.drag_to(1, f64::from(x)));
            }
            black_box(carousel.end_drag(1, 640.0));
            if carousel.index() == carousel.len() - 1 {
                carousel.navigate(NavKey::First, 640.0);
            }
        });
    });
}

fn bench_keyboard_navigation(c: &mut Criterion) {
    c.bench_function("carousel/keyboard", |b| {
        let mut carousel = Carousel::new(64, 800.0).unwrap();
        let keys = ["ArrowRight", "ArrowRight", "PageUp", "End", "Home", "Tab"];
        b.iter(|| {
            for key in keys {
                if let Some(nav) = NavKey::from_key(black_box(key)) {
                    black_box(carousel.navigate(nav, 800.0));
                }
            }
        });
    });
}

criterion_group!(benches, bench_swipe_cycle, bench_keyboard_navigation);
criterion_main!(benches);
