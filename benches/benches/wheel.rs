// Copyright 2025 the Spacepan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use spacepan_input::{WheelClassifier, WheelConfig, WheelDelta};

/// Notched wheel: bursts of identical 120 px deltas with pauses in between.
fn notched(len: usize) -> Vec<(WheelDelta, f64)> {
    (0..len)
        .map(|i| {
            let burst = (i / 8) as f64;
            let t = burst * 400.0 + (i % 8) as f64 * 30.0;
            (WheelDelta::pixels(0.0, 120.0), t)
        })
        .collect()
}

/// Trackpad: a continuous stream of small, varied deltas at 60 Hz.
fn trackpad(len: usize) -> Vec<(WheelDelta, f64)> {
    (0..len)
        .map(|i| {
            let dx = ((i * 7) % 5) as f64 - 2.0;
            let dy = ((i * 13) % 11) as f64 + 1.0;
            (WheelDelta::pixels(dx, dy), i as f64 * 16.0)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel/classify");

    for len in [64usize, 1_024, 16_384] {
        group.throughput(Throughput::Elements(len as u64));
        for (name, events) in [("notched", notched(len)), ("trackpad", trackpad(len))] {
            group.bench_with_input(BenchmarkId::new(name, len), &events, |b, events| {
                b.iter_batched(
                    || WheelClassifier::new(WheelConfig::default()),
                    |mut wheel| {
                        for &(delta, t) in events {
                            black_box(wheel.classify(delta, t));
                        }
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
