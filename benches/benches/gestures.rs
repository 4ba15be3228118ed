// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use petdock_bubble::{BubbleController, GestureConfig};
use petdock_geometry::{BubbleMetrics, Layout, SafeArea};
use petdock_sheet::{Region, SheetConfig, SheetGesture};

fn bubble() -> BubbleController {
    let layout = Layout::new(Size::new(390.0, 844.0), SafeArea::new(47.0, 34.0, 0.0, 0.0));
    let mut bubble = BubbleController::new(BubbleMetrics::default(), GestureConfig::default(), layout)
        .expect("default layout is valid");
    bubble.mount(0);
    bubble
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("petdock_gestures");
    group.sample_size(50);

    for &moves in &[16_u32, 256] {
        group.bench_function(format!("bubble_drag_release(moves={moves})"), |b| {
            b.iter_batched(
                bubble,
                |mut bubble| {
                    let from = Point::new(344.0, 384.6);
                    bubble.pointer_down(from, 0);
                    for i in 1..=moves {
                        let t = f64::from(i) / f64::from(moves);
                        bubble.pointer_move(from + (-250.0 * t, 120.0 * t), u64::from(i));
                    }
                    black_box(bubble.pointer_up(from + (-250.0, 120.0), u64::from(moves) + 1));
                    bubble
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("bubble_settle_frames", |b| {
        b.iter_batched(
            || {
                let mut bubble = bubble();
                let from = Point::new(344.0, 384.6);
                bubble.pointer_down(from, 0);
                bubble.pointer_move(from + (-120.0, 60.0), 16);
                bubble.pointer_up(from + (-120.0, 60.0), 32);
                bubble
            },
            |mut bubble| {
                let mut now = 32;
                for _ in 0..120 {
                    now += 16;
                    black_box(bubble.tick(now));
                }
                bubble
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("sheet_drag_dismiss", |b| {
        b.iter_batched(
            || SheetGesture::new(SheetConfig::default(), 700.0),
            |mut sheet| {
                let start = Point::new(200.0, 40.0);
                sheet.grant(Region::Handle, start, 0);
                for i in 1..=32_u32 {
                    sheet.pointer_move(start + (0.0, f64::from(i) * 6.0), u64::from(i) * 8);
                }
                black_box(sheet.release(start + (0.0, 200.0), 264));
                let mut now = 264;
                while black_box(sheet.tick(now)).is_none() && now < 2_000 {
                    now += 16;
                }
                sheet
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
