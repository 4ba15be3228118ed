// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petdock Bubble: a draggable, edge-docking floating widget.
//!
//! The crate is split along the widget's three concerns:
//! - [`PositionState`]: the authoritative logical center and the layout it
//!   was fitted to, refitted (not reset) when the layout changes.
//! - [`AnimationDriver`]: scale, pan and the committed box corner as animated
//!   channels, plus the choreography on them (idle breathing, grab feedback,
//!   sliding to an edge).
//! - [`BubbleController`]: the pointer state machine that ties both together
//!   and decides whether a gesture was a tap or a drag.
//!
//! Rendering is the host's job. Each frame it calls
//! [`BubbleController::tick`] and draws the widget at
//! [`AnimationDriver::rendered_top_left`] with [`AnimationDriver::scale`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use petdock_bubble::{BubbleController, GestureConfig, Resolution};
//! use petdock_geometry::{BubbleMetrics, CenterPoint, Layout, SafeArea};
//!
//! let layout = Layout::new(Size::new(390.0, 844.0), SafeArea::new(47.0, 34.0, 0.0, 0.0));
//! let mut bubble =
//!     BubbleController::new(BubbleMetrics::default(), GestureConfig::default(), layout)?;
//! bubble.mount(0);
//! assert_eq!(bubble.position(), CenterPoint::new(344.0, 384.6));
//!
//! // Drag 300 points to the left and let go.
//! bubble.pointer_down(Point::new(344.0, 384.6), 100);
//! bubble.pointer_move(Point::new(144.0, 384.6), 150);
//! let resolution = bubble.pointer_up(Point::new(44.0, 384.6), 200);
//!
//! let Some(Resolution::Drag { target, .. }) = resolution else {
//!     unreachable!();
//! };
//! assert_eq!(target.x(), 76.0);
//! # Ok::<(), petdock_geometry::GeometryError>(())
//! ```

mod config;
mod controller;
mod driver;
mod position;

pub use config::GestureConfig;
pub use controller::{BubbleController, BubbleEvent, Resolution, TapOutcome};
pub use driver::{AnimationDriver, Axes, Channel};
pub use position::PositionState;
