// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use petdock_geometry::{BubbleMetrics, CenterPoint, Layout, SafeArea, VisualState};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn layouts() -> Vec<Layout> {
    let mut out = Vec::new();
    for &(w, h) in &[(390.0, 844.0), (844.0, 390.0), (1024.0, 1366.0)] {
        for stage in 1..=3 {
            out.push(
                Layout::new(Size::new(w, h), SafeArea::new(47.0, 34.0, 0.0, 0.0))
                    .with_scale(1.0 + f64::from(stage) * 0.1)
                    .with_visual(VisualState::new(stage, stage == 2)),
            );
        }
    }
    out
}

fn bench_geometry(c: &mut Criterion) {
    let metrics = BubbleMetrics::default();
    let layouts = layouts();
    let mut rng = Lcg(0xB0B_0000_0000_0001);
    let points: Vec<CenterPoint> = (0..1_024)
        .map(|_| CenterPoint::new(rng.next_f64() * 1_200.0 - 100.0, rng.next_f64() * 1_500.0 - 100.0))
        .collect();

    let mut group = c.benchmark_group("petdock_geometry");

    group.bench_function("bounds", |b| {
        b.iter(|| {
            for layout in &layouts {
                black_box(metrics.bounds(black_box(layout)));
            }
        });
    });

    group.bench_function(format!("clamp(n={})", points.len()), |b| {
        let bounds = metrics.bounds(&layouts[0]);
        b.iter(|| {
            for &p in &points {
                black_box(bounds.clamp(p));
            }
        });
    });

    group.bench_function(format!("edge_snap(n={})", points.len()), |b| {
        b.iter(|| {
            for &p in &points {
                black_box(metrics.edge_snap_target(p.x(), &layouts[1]));
            }
        });
    });

    group.bench_function("edge_offset_lookup", |b| {
        b.iter(|| {
            for stage in 0..8 {
                black_box(metrics.edge_offsets.lookup(stage, stage % 2 == 0));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_geometry);
criterion_main!(benches);
