// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use spacepan_view2d::{ViewConfig, ViewportState};

fn viewport() -> ViewportState {
    ViewportState::new(
        Rect::new(0.0, 0.0, 1_280.0, 800.0),
        Size::new(1_000.0, 700.0),
        ViewConfig::default(),
    )
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/pinch");

    // One pinch: 120 frames of fingers spreading apart while drifting.
    group.bench_function("manipulate_120_frames", |b| {
        let mut view = viewport();
        let start = view.snapshot();
        let anchor = Point::new(600.0, 400.0);
        b.iter(|| {
            for i in 0..120 {
                let t = f64::from(i) / 120.0;
                let now = anchor + Vec2::new(40.0 * t, -25.0 * t);
                view.manipulate(&start, anchor, 1.0 + t, now);
            }
            black_box(view.transform())
        });
    });

    group.bench_function("pan_clamped", |b| {
        let mut view = viewport();
        view.zoom_by(1.7);
        b.iter(|| {
            for i in 0..120 {
                let d = if i % 2 == 0 { 250.0 } else { -260.0 };
                view.pan(Vec2::new(d, -d));
            }
            black_box(view.translate())
        });
    });

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    c.bench_function("viewport/zoom_to_cursor", |b| {
        let mut view = viewport();
        b.iter(|| {
            for i in 0..64 {
                let factor = if i % 2 == 0 { 1.15 } else { 1.0 / 1.15 };
                view.zoom_to(factor, Point::new(300.0 + f64::from(i), 200.0));
            }
            black_box(view.zoom())
        });
    });
}

criterion_group!(benches, bench_pinch, bench_zoom);
criterion_main!(benches);
