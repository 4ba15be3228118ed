// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petdock Geometry: where a floating, edge-docked widget is allowed to sit.
//!
//! This crate is the pure math layer under the pet bubble. Given the live
//! screen size, safe-area insets, a widget scale and the artwork currently
//! shown, it answers:
//! - Which center positions are valid ([`BubbleMetrics::bounds`]) and which
//!   top-left corners are valid ([`BubbleMetrics::top_left_bounds`]).
//! - Where a newly mounted widget goes ([`BubbleMetrics::initial_position`]).
//! - Which horizontal edge a released widget docks to
//!   ([`BubbleMetrics::edge_snap_target`]).
//! - How to move between the center frame and the top-left frame.
//!
//! Every query takes the [`Layout`] explicitly. Nothing is cached, so a
//! rotation between two calls is always observed by the second one.
//!
//! The two coordinate frames are distinct types, [`CenterPoint`] and
//! [`TopLeftPoint`], and the conversion methods on [`BubbleMetrics`] are the
//! only bridge between them.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use petdock_geometry::{BubbleMetrics, Layout, SafeArea};
//!
//! let metrics = BubbleMetrics::default();
//! let layout = Layout::new(Size::new(390.0, 844.0), SafeArea::new(47.0, 34.0, 0.0, 0.0));
//!
//! let start = metrics.initial_position(&layout);
//! assert_eq!(start.x(), 344.0);
//!
//! // Released left of the midpoint: dock on the left edge.
//! assert_eq!(metrics.edge_snap_target(120.0, &layout), 76.0);
//! ```
//!
//! ## Degenerate screens
//!
//! When the widget is larger than the space between insets and paddings, the
//! affected axis collapses to the midpoint of the computed range, so clamping
//! always yields a single well-defined position instead of an inverted range.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod bounds;
mod error;
mod metrics;
mod types;

pub use bounds::{CenterBounds, TopLeftBounds};
pub use error::GeometryError;
pub use metrics::{
    BASE_SIZE, BOTTOM_PADDING, BubbleMetrics, EDGE_PADDING, EdgeOffsets, INITIAL_TOP_FRACTION,
    TOP_PADDING,
};
pub use types::{CenterPoint, Layout, SafeArea, TopLeftPoint, VisualState};
