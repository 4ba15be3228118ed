// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use petdock_animation::{Animator, CompletionToken, Motion};
use petdock_event_state::drag::DragState;

use crate::SheetConfig;

/// Part of the sheet a pointer went down on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// The grab handle; always drags the sheet.
    Handle,
    /// The scrollable body; drags the sheet only from the top of its content.
    Body,
}

/// How a release was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Barely moved. The sheet springs back to rest.
    Tap,
    /// Under both thresholds. The sheet springs back to rest.
    SpringBack,
    /// Past a threshold. The sheet slides off and dismisses when it lands.
    Dismissing,
}

/// Outbound notifications for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetEvent {
    /// The dismiss slide finished. Reported once per dismissal.
    Dismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Offset;

#[derive(Clone, Copy, Debug)]
struct Grab {
    region: Region,
    drag: DragState,
    baseline: f64,
}

/// Vertical drag-to-dismiss state for a bottom sheet.
///
/// The sheet's translation is one animated offset: `0` at rest and the
/// container height when fully off screen. Both regions drive it.
#[derive(Debug)]
pub struct SheetGesture {
    config: SheetConfig,
    animator: Animator<Offset>,
    container_height: f64,
    scroll_offset: f64,
    grab: Option<Grab>,
    dismissing: Option<CompletionToken>,
    dismissed: bool,
}

impl SheetGesture {
    /// Creates a sheet resting on screen inside a container `container_height` tall.
    #[must_use]
    pub fn new(config: SheetConfig, container_height: f64) -> Self {
        let mut animator = Animator::new();
        animator.set(Offset, 0.0);
        Self {
            config,
            animator,
            container_height,
            scroll_offset: 0.0,
            grab: None,
            dismissing: None,
            dismissed: false,
        }
    }

    /// Current downward translation of the sheet.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.animator.get(Offset)
    }

    /// Returns `true` between a grant and its release.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Returns `true` once a dismissal has been reported, until the next
    /// [`SheetGesture::present`].
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Updates the height the sheet slides through when dismissed.
    pub fn set_container_height(&mut self, height: f64) {
        self.container_height = height;
    }

    /// Records the body's scroll position, as reported by its scroll view.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    /// Slides the sheet in from below the container.
    pub fn present(&mut self, now_ms: u64) {
        self.grab = None;
        self.dismissing = None;
        self.dismissed = false;
        self.animator.set(Offset, self.container_height);
        self.animator
            .animate([(Offset, Motion::timing(0.0, self.config.present))], now_ms);
    }

    /// Whether a press in `region` may start dragging the sheet.
    #[must_use]
    pub fn should_start(&self, region: Region) -> bool {
        if self.dismissed {
            return false;
        }
        match region {
            Region::Handle => true,
            Region::Body => self.scroll_offset <= self.config.scroll_top_epsilon,
        }
    }

    /// Whether a move of `delta` in `region` should take over from the
    /// content.
    ///
    /// Body drags must be downward and mostly vertical, so upward scrolls and
    /// horizontal swipes stay with the content.
    #[must_use]
    pub fn should_move(&self, region: Region, delta: Vec2) -> bool {
        if !self.should_start(region) {
            return false;
        }
        match region {
            Region::Handle => true,
            Region::Body => delta.y > 0.0 && delta.y.abs() > delta.x.abs(),
        }
    }

    /// Hands the gesture to the sheet.
    ///
    /// Any running slide stops first so the drag starts where the sheet is
    /// drawn.
    pub fn grant(&mut self, region: Region, point: Point, now_ms: u64) {
        if self.dismissed {
            return;
        }
        self.animator.stop(Offset);
        self.dismissing = None;
        let mut drag = DragState::default();
        drag.start(point, now_ms);
        self.grab = Some(Grab {
            region,
            drag,
            baseline: self.offset(),
        });
    }

    /// Tracks the pointer.
    pub fn pointer_move(&mut self, point: Point, now_ms: u64) {
        let Some(grab) = self.grab.as_mut() else {
            return;
        };
        grab.drag.update(point, now_ms);
        let Some(total) = grab.drag.total_offset(point) else {
            return;
        };
        let offset = match grab.region {
            Region::Handle => {
                let raw = grab.baseline + total.y;
                if raw < 0.0 {
                    raw * self.config.rubber_band
                } else {
                    raw
                }
            }
            // Upward motion belongs to the scroll view.
            Region::Body => grab.baseline + total.y.max(0.0),
        };
        self.animator.set(Offset, offset);
    }

    /// Ends the gesture. Returns `None` if nothing was granted.
    pub fn release(&mut self, point: Point, now_ms: u64) -> Option<ReleaseOutcome> {
        let mut grab = self.grab.take()?;
        grab.drag.update(point, now_ms);
        let total = grab.drag.total_offset(point).unwrap_or(Vec2::ZERO);
        let velocity = grab.drag.velocity();
        grab.drag.end();

        let outcome = if total.hypot() < self.config.tap_slop {
            ReleaseOutcome::Tap
        } else if total.y > self.config.dismiss_distance || velocity.y > self.config.dismiss_velocity {
            ReleaseOutcome::Dismissing
        } else {
            ReleaseOutcome::SpringBack
        };
        log::debug!(
            "sheet release dy={:.1} vy={:.3}: {outcome:?}",
            total.y,
            velocity.y
        );

        if outcome == ReleaseOutcome::Dismissing {
            let motion = Motion::timing(self.container_height, self.config.dismiss);
            self.dismissing = Some(self.animator.animate([(Offset, motion)], now_ms));
        } else {
            self.animator
                .animate([(Offset, Motion::spring(0.0, self.config.spring))], now_ms);
        }
        Some(outcome)
    }

    /// Advances the offset to `now_ms`. Returns [`SheetEvent::Dismissed`] on
    /// the frame the dismiss slide lands.
    pub fn tick(&mut self, now_ms: u64) -> Option<SheetEvent> {
        let mut event = None;
        for completion in self.animator.tick(now_ms) {
            if self.dismissing != Some(completion.token) {
                continue;
            }
            self.dismissing = None;
            if completion.finished && !self.dismissed {
                self.dismissed = true;
                event = Some(SheetEvent::Dismissed);
            }
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Region, ReleaseOutcome, SheetEvent, SheetGesture};
    use crate::SheetConfig;

    fn sheet() -> SheetGesture {
        SheetGesture::new(SheetConfig::default(), 600.0)
    }

    #[test]
    fn body_waits_for_scroll_top() {
        let mut s = sheet();
        s.set_scroll_offset(40.0);
        assert!(!s.should_start(Region::Body));
        assert!(s.should_start(Region::Handle));
        s.set_scroll_offset(0.5);
        assert!(s.should_start(Region::Body));
    }

    #[test]
    fn body_only_claims_downward_vertical_moves() {
        let s = sheet();
        assert!(s.should_move(Region::Body, Vec2::new(2.0, 10.0)));
        assert!(!s.should_move(Region::Body, Vec2::new(0.0, -10.0)));
        assert!(!s.should_move(Region::Body, Vec2::new(12.0, 10.0)));
        assert!(s.should_move(Region::Handle, Vec2::new(12.0, -10.0)));
    }

    #[test]
    fn handle_rubber_bands_above_rest() {
        let mut s = sheet();
        s.grant(Region::Handle, Point::new(0.0, 100.0), 0);
        s.pointer_move(Point::new(0.0, 140.0), 16);
        assert_eq!(s.offset(), 40.0);
        s.pointer_move(Point::new(0.0, 50.0), 32);
        assert_eq!(s.offset(), -50.0 * 0.3);
    }

    #[test]
    fn body_ignores_upward_motion() {
        let mut s = sheet();
        s.grant(Region::Body, Point::new(0.0, 100.0), 0);
        s.pointer_move(Point::new(0.0, 60.0), 16);
        assert_eq!(s.offset(), 0.0);
        s.pointer_move(Point::new(0.0, 130.0), 32);
        assert_eq!(s.offset(), 30.0);
    }

    #[test]
    fn tap_springs_back() {
        let mut s = sheet();
        s.grant(Region::Handle, Point::new(0.0, 100.0), 0);
        assert_eq!(
            s.release(Point::new(2.0, 101.0), 50),
            Some(ReleaseOutcome::Tap)
        );
        assert_eq!(s.release(Point::new(2.0, 101.0), 60), None);
    }

    #[test]
    fn regrant_mid_slide_starts_from_drawn_offset() {
        let mut s = sheet();
        s.grant(Region::Handle, Point::new(0.0, 0.0), 0);
        s.pointer_move(Point::new(0.0, 100.0), 100);
        // Held still before letting go, so no flick velocity is left.
        assert_eq!(
            s.release(Point::new(0.0, 100.0), 250),
            Some(ReleaseOutcome::SpringBack)
        );
        s.tick(300);
        let drawn = s.offset();
        assert!(drawn > 0.0 && drawn < 100.0);

        s.grant(Region::Handle, Point::new(0.0, 10.0), 300);
        s.tick(400);
        assert_eq!(s.offset(), drawn);
        s.pointer_move(Point::new(0.0, 30.0), 416);
        assert!((s.offset() - (drawn + 20.0)).abs() < 1e-9);
    }

    #[test]
    fn interrupted_dismiss_does_not_report() {
        let mut s = sheet();
        s.grant(Region::Handle, Point::new(0.0, 0.0), 0);
        s.pointer_move(Point::new(0.0, 200.0), 100);
        assert_eq!(
            s.release(Point::new(0.0, 200.0), 200),
            Some(ReleaseOutcome::Dismissing)
        );
        s.tick(300);
        s.grant(Region::Handle, Point::new(0.0, 0.0), 300);
        assert_eq!(s.tick(1_000), None);
        assert!(!s.is_dismissed());
    }

    #[test]
    fn present_slides_in_and_rearms() {
        let mut s = sheet();
        s.grant(Region::Handle, Point::new(0.0, 0.0), 0);
        s.release(Point::new(0.0, 300.0), 100);
        assert_eq!(s.tick(400), Some(SheetEvent::Dismissed));
        assert!(!s.should_start(Region::Handle));

        s.present(1_000);
        assert_eq!(s.offset(), 600.0);
        s.tick(1_300);
        assert_eq!(s.offset(), 0.0);
        assert!(s.should_start(Region::Handle));
    }
}
