// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bubble walkthrough.
//!
//! Drive the floating widget through a drag, a rotation and a tap without a
//! renderer, printing where the host would draw it.
//!
//! Run:
//! - `cargo run -p petdock_demos --example bubble_walkthrough`

use kurbo::{Point, Size};
use petdock_bubble::{BubbleController, GestureConfig};
use petdock_geometry::{BubbleMetrics, GeometryError, Layout, SafeArea, VisualState};

fn frames(bubble: &mut BubbleController, from: u64, to: u64) -> u64 {
    let mut now = from;
    while now < to {
        now += 16;
        for event in bubble.tick(now) {
            println!("  t={now}ms event: {event:?}");
        }
    }
    now
}

fn report(label: &str, bubble: &BubbleController) {
    let drawn = bubble.driver().rendered_top_left();
    println!(
        "{label}: center=({:.1}, {:.1}) drawn at ({:.1}, {:.1}) scale={:.3}",
        bubble.position().x(),
        bubble.position().y(),
        drawn.left(),
        drawn.top(),
        bubble.driver().scale(),
    );
}

fn main() -> Result<(), GeometryError> {
    let portrait = Layout::new(Size::new(390.0, 844.0), SafeArea::new(47.0, 34.0, 0.0, 0.0));
    let mut bubble =
        BubbleController::new(BubbleMetrics::default(), GestureConfig::default(), portrait)?;
    bubble.mount(0);
    report("mounted", &bubble);

    // Drag toward the lower left and release.
    let from = bubble.rendered_center().0;
    bubble.pointer_down(from, 1_000);
    for step in 1..=10_u32 {
        let t = f64::from(step) / 10.0;
        bubble.pointer_move(from + (-260.0 * t, 200.0 * t), 1_000 + u64::from(step) * 16);
    }
    let resolution = bubble.pointer_up(from + (-260.0, 200.0), 1_180);
    println!("released: {resolution:?}");
    let now = frames(&mut bubble, 1_180, 2_200);
    report("settled", &bubble);

    // Rotate, then switch artwork.
    let landscape = Layout::new(Size::new(844.0, 390.0), SafeArea::new(0.0, 21.0, 47.0, 47.0));
    bubble.set_layout(landscape);
    report("landscape", &bubble);
    bubble.set_layout(landscape.with_visual(VisualState::new(2, true)));
    report("stage2_dying", &bubble);

    // Tap to open the sheet.
    let at = bubble.rendered_center().0;
    bubble.pointer_down(at, now);
    let resolution = bubble.pointer_up(at + (1.0, 0.0), now + 60);
    println!("released: {resolution:?}");
    for event in bubble.take_events() {
        println!("  event: {event:?}");
    }
    frames(&mut bubble, now + 60, now + 1_000);
    report("idle again", &bubble);

    bubble.unmount();
    Ok(())
}
