// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: movement deltas, total offsets and release velocity.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the pointer position and
//!    a millisecond timestamp.
//! 2) On each move event, call [`DragState::update`] to get the delta since the
//!    previous event. The velocity estimate is refreshed at the same time.
//! 3) Use [`DragState::total_offset`] for the cumulative gesture delta (the
//!    `dx`/`dy` a pan responder reports) and [`DragState::velocity`] for the
//!    release velocity in pixels per millisecond.
//! 4) End the drag with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use petdock_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.start(Point::new(10.0, 20.0), 1_000);
//! assert!(drag.is_dragging());
//!
//! let delta = drag.update(Point::new(15.0, 40.0), 1_010).unwrap();
//! assert_eq!(delta.y, 20.0);
//!
//! // 20px in 10ms.
//! assert_eq!(drag.velocity().y, 2.0);
//!
//! let total = drag.total_offset(Point::new(15.0, 40.0)).unwrap();
//! assert_eq!((total.x, total.y), (5.0, 20.0));
//! ```

use kurbo::{Point, Vec2};

/// How long a pointer may rest on one spot before its velocity reads as zero.
pub const VELOCITY_STALE_MS: u64 = 100;

/// Tracks one pointer drag from press to release.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position where the drag started.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    pub last_pos: Option<Point>,
    last_time: Option<u64>,
    velocity: Vec2,
}

impl DragState {
    /// Start tracking a new drag from `pos` at time `now_ms`.
    pub fn start(&mut self, pos: Point, now_ms: u64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.last_time = Some(now_ms);
        self.velocity = Vec2::ZERO;
    }

    /// Records a new pointer position, returning the delta since the previous one.
    ///
    /// Events that arrive with the same timestamp as the previous one keep the
    /// last velocity estimate. So does an event repeating the last position
    /// (typically the release of a flick), unless the pointer has rested for
    /// longer than [`VELOCITY_STALE_MS`], in which case the velocity drops to
    /// zero.
    pub fn update(&mut self, pos: Point, now_ms: u64) -> Option<Vec2> {
        self.start_pos?;
        let Some(last_pos) = self.last_pos else {
            self.last_pos = Some(pos);
            self.last_time = Some(now_ms);
            return None;
        };
        let delta = pos - last_pos;
        if delta == Vec2::ZERO {
            // `last_time` keeps marking the last movement.
            let rested = self
                .last_time
                .is_some_and(|last| now_ms.saturating_sub(last) > VELOCITY_STALE_MS);
            if rested {
                self.velocity = Vec2::ZERO;
            }
            return Some(delta);
        }
        if let Some(last_time) = self.last_time {
            let elapsed = now_ms.saturating_sub(last_time);
            if elapsed > 0 {
                self.velocity = delta / elapsed as f64;
            }
        }
        self.last_pos = Some(pos);
        self.last_time = Some(now_ms);
        Some(delta)
    }

    /// Total offset from the drag start to `current_pos`.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Most recent velocity estimate, in pixels per millisecond.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.velocity(), Vec2::ZERO);
    }

    #[test]
    fn start_sets_dragging_state() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        drag.start(start, 5);

        assert_eq!(drag.start_pos, Some(start));
        assert_eq!(drag.start_pos, drag.last_pos);
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();

        assert_eq!(drag.update(Point::new(15.0, 25.0), 10), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);

        assert_eq!(drag.update(Point::new(5.0, 3.0), 16), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0), 32), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            drag.total_offset(Point::new(8.0, 7.0)),
            Some(Vec2::new(8.0, 7.0))
        );
    }

    #[test]
    fn velocity_follows_latest_segment() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 100);

        drag.update(Point::new(0.0, 10.0), 110);
        assert_eq!(drag.velocity(), Vec2::new(0.0, 1.0));

        drag.update(Point::new(0.0, 12.0), 120);
        assert_eq!(drag.velocity(), Vec2::new(0.0, 0.2));
    }

    #[test]
    fn same_timestamp_keeps_previous_velocity() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(0.0, 8.0), 8);
        drag.update(Point::new(0.0, 30.0), 8);
        assert_eq!(drag.velocity(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn end_resets_drag_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), 0);
        drag.update(Point::new(15.0, 25.0), 10);

        drag.end();

        assert!(drag.start_pos.is_none());
        assert!(drag.last_pos.is_none());
        assert_eq!(drag.velocity(), Vec2::ZERO);
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(10.0, 10.0), 10);

        drag.start(Point::new(50.0, 60.0), 20);

        assert_eq!(drag.velocity(), Vec2::ZERO);
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }

    #[test]
    fn repeated_release_point_keeps_flick_velocity() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(0.0, 20.0), 16);
        drag.update(Point::new(0.0, 40.0), 32);

        assert_eq!(drag.update(Point::new(0.0, 40.0), 48), Some(Vec2::ZERO));
        assert_eq!(drag.velocity(), Vec2::new(0.0, 1.25));
    }

    #[test]
    fn resting_pointer_loses_velocity() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(0.0, 20.0), 16);

        drag.update(Point::new(0.0, 20.0), 16 + VELOCITY_STALE_MS);
        assert_eq!(drag.velocity(), Vec2::new(0.0, 1.25));
        drag.update(Point::new(0.0, 20.0), 17 + VELOCITY_STALE_MS);
        assert_eq!(drag.velocity(), Vec2::ZERO);
    }
}
