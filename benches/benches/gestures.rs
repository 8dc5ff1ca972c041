// Copyright 2026 the Vellum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use vellum_event_state::gesture::PanZoomGesture;
use vellum_web::{BlueprintConfig, BlueprintController};

/// A wobbling path so consecutive moves are never identical.
fn path(steps: usize) -> Vec<Point> {
    (0..steps)
        .map(|i| {
            let t = i as f64 * 0.05;
            Point::new(300.0 + 120.0 * t.sin(), 200.0 + 80.0 * (t * 1.3).cos())
        })
        .collect()
}

fn bench_single_pointer_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/pan");
    for steps in [64_usize, 512, 4_096] {
        let moves = path(steps);
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &moves, |b, moves| {
            b.iter_batched(
                || {
                    let mut g = PanZoomGesture::new();
                    g.pointer_down(1, moves[0]);
                    g
                },
                |mut g| {
                    for pos in moves {
                        black_box(g.pointer_move(1, *pos));
                    }
                    g
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_pinch_through_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/pinch");
    for steps in [64_usize, 512, 4_096] {
        let moves = path(steps);
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &moves, |b, moves| {
            b.iter_batched(
                || {
                    let mut ctl = BlueprintController::new(
                        Size::new(600.0, 400.0),
                        BlueprintConfig::default(),
                    );
                    ctl.pointer_down(1, Point::new(300.0, 200.0));
                    ctl.pointer_down(2, moves[0]);
                    ctl
                },
                |mut ctl| {
                    for pos in moves {
                        black_box(ctl.pointer_move(2, *pos));
                    }
                    black_box(ctl.css_transform());
                    ctl
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_pointer_pan, bench_pinch_through_controller);
criterion_main!(benches);
