// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet walkthrough.
//!
//! Present a bottom sheet, nudge it and let it spring back, then flick it
//! away.
//!
//! Run:
//! - `cargo run -p petdock_demos --example sheet_walkthrough`

use kurbo::Point;
use petdock_sheet::{Region, SheetConfig, SheetGesture};

fn run(sheet: &mut SheetGesture, from: u64, to: u64) {
    let mut now = from;
    while now < to {
        now += 16;
        if let Some(event) = sheet.tick(now) {
            println!("  t={now}ms {event:?}");
        }
    }
    println!("  offset after t={now}ms: {:.1}", sheet.offset());
}

fn main() {
    let mut sheet = SheetGesture::new(SheetConfig::default(), 700.0);
    sheet.present(0);
    run(&mut sheet, 0, 400);

    // Content scrolled down: the body leaves the gesture to the scroll view.
    sheet.set_scroll_offset(80.0);
    println!("body may drag while scrolled: {}", sheet.should_start(Region::Body));
    sheet.set_scroll_offset(0.0);

    let start = Point::new(180.0, 300.0);
    sheet.grant(Region::Body, start, 500);
    sheet.pointer_move(start + (0.0, 60.0), 600);
    println!("nudge: {:?}", sheet.release(start + (0.0, 80.0), 700));
    run(&mut sheet, 700, 1_500);

    let start = Point::new(180.0, 20.0);
    sheet.grant(Region::Handle, start, 2_000);
    sheet.pointer_move(start + (0.0, 30.0), 2_016);
    println!("flick: {:?}", sheet.release(start + (0.0, 70.0), 2_032));
    run(&mut sheet, 2_032, 2_400);
}
