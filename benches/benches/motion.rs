// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use spacepan_motion::{Animator, Ease, EaseConfig, Tick};
use spacepan_view2d::ViewTransform;

fn bench_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion/converge");
    let target = ViewTransform::new(1.8, Vec2::new(-240.0, 130.0));

    for ease in [Ease::Least, Ease::Fast, Ease::Smooth, Ease::Slow] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{ease:?}")),
            &ease,
            |b, &ease| {
                b.iter(|| {
                    let mut anim = Animator::new(EaseConfig::default(), ViewTransform::IDENTITY);
                    anim.animate(0.0, target, ease);
                    let mut now = 0.0;
                    while anim.tick(now) == Tick::Running {
                        now += 16.0;
                    }
                    black_box(anim.shown())
                });
            },
        );
    }

    group.finish();
}

fn bench_retarget(c: &mut Criterion) {
    // Wheel bursts retarget every frame; each retarget starts from the
    // displayed value.
    c.bench_function("motion/retarget_every_frame", |b| {
        b.iter(|| {
            let mut anim = Animator::new(EaseConfig::default(), ViewTransform::IDENTITY);
            let mut target = ViewTransform::IDENTITY;
            for i in 0..60 {
                let now = f64::from(i) * 16.0;
                target.translate.y -= 50.0;
                anim.animate(now, target, Ease::Fast);
                anim.tick(now + 8.0);
            }
            black_box(anim.shown())
        });
    });
}

criterion_group!(benches, bench_convergence, bench_retarget);
criterion_main!(benches);
