// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petdock Sheet: the drag-to-dismiss gesture of a bottom sheet.
//!
//! A sheet has two draggable regions sharing one vertical offset:
//! - [`Region::Handle`] always drags. Pulling up past the rest position is
//!   damped by [`SheetConfig::rubber_band`].
//! - [`Region::Body`] holds scrollable content and only drags the sheet when
//!   that content is scrolled to the top and the pointer moves down.
//!
//! A release either dismisses (far enough or fast enough downward) or springs
//! back to rest. [`SheetGesture::tick`] reports [`SheetEvent::Dismissed`] once
//! the off-screen slide lands.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use petdock_sheet::{Region, ReleaseOutcome, SheetConfig, SheetEvent, SheetGesture};
//!
//! let mut sheet = SheetGesture::new(SheetConfig::default(), 700.0);
//! assert!(sheet.should_start(Region::Handle));
//!
//! sheet.grant(Region::Handle, Point::new(200.0, 40.0), 0);
//! sheet.pointer_move(Point::new(200.0, 236.0), 480);
//! let outcome = sheet.release(Point::new(200.0, 240.0), 500);
//! assert_eq!(outcome, Some(ReleaseOutcome::Dismissing));
//!
//! assert_eq!(sheet.tick(750), Some(SheetEvent::Dismissed));
//! assert_eq!(sheet.offset(), 700.0);
//! ```

mod config;
mod gesture;

pub use config::SheetConfig;
pub use gesture::{Region, ReleaseOutcome, SheetEvent, SheetGesture};
