// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use kurbo::Vec2;
use petdock_animation::{Animator, CompletionToken, Completions, Motion};
use petdock_geometry::TopLeftPoint;
use smallvec::SmallVec;

use crate::GestureConfig;

/// Animated signals behind the widget's rendered box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Uniform scale about the widget center.
    Scale,
    /// Transient horizontal offset on top of `Left`.
    PanX,
    /// Transient vertical offset on top of `Top`.
    PanY,
    /// Committed left edge of the box.
    Left,
    /// Committed top edge of the box.
    Top,
}

bitflags! {
    /// Set of axes an operation applies to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// Horizontal axis.
        const X = 0b01;
        /// Vertical axis.
        const Y = 0b10;
    }
}

impl Axes {
    /// Axes on which `offset` is at least `epsilon` in magnitude.
    #[must_use]
    pub fn significant(offset: Vec2, epsilon: f64) -> Self {
        let mut axes = Self::empty();
        axes.set(Self::X, offset.x.abs() >= epsilon);
        axes.set(Self::Y, offset.y.abs() >= epsilon);
        axes
    }
}

/// Owns the widget's animated values and the choreography on them.
///
/// The rendered top-left corner is always `(left + pan_x, top + pan_y)`.
/// Every synchronous setter here writes its channels in one call, so a
/// caller that sets the baseline before committing logical state never
/// exposes an intermediate frame.
#[derive(Debug)]
pub struct AnimationDriver {
    animator: Animator<Channel>,
    config: GestureConfig,
    is_dragging: bool,
    idle: Option<CompletionToken>,
}

impl AnimationDriver {
    /// Creates a driver with its box at `top_left`, no pan and unit scale.
    #[must_use]
    pub fn new(config: GestureConfig, top_left: TopLeftPoint) -> Self {
        let mut animator = Animator::new();
        animator.set(Channel::Scale, 1.0);
        animator.set(Channel::PanX, 0.0);
        animator.set(Channel::PanY, 0.0);
        animator.set(Channel::Left, top_left.left());
        animator.set(Channel::Top, top_left.top());
        Self {
            animator,
            config,
            is_dragging: false,
            idle: None,
        }
    }

    /// Marks whether a pointer currently holds the widget.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    /// Returns `true` while a pointer holds the widget.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Returns `true` while the breathing loop runs.
    #[must_use]
    pub fn is_idling(&self) -> bool {
        self.idle.is_some() && self.animator.is_animating(Channel::Scale)
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.animator.get(Channel::Scale)
    }

    /// Current pan offset.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        Vec2::new(
            self.animator.get(Channel::PanX),
            self.animator.get(Channel::PanY),
        )
    }

    /// Committed box corner, without pan.
    #[must_use]
    pub fn base_top_left(&self) -> TopLeftPoint {
        TopLeftPoint::new(
            self.animator.get(Channel::Left),
            self.animator.get(Channel::Top),
        )
    }

    /// Where the box is drawn right now.
    #[must_use]
    pub fn rendered_top_left(&self) -> TopLeftPoint {
        self.base_top_left().offset(self.pan())
    }

    /// Starts the breathing loop, restarting it if already running.
    ///
    /// Does nothing while the widget is held.
    pub fn start_idle(&mut self, now_ms: u64) {
        if self.is_dragging {
            return;
        }
        self.stop_idle();
        let motion = Motion::pulse(self.config.idle_peak_scale, 1.0, self.config.idle_leg);
        self.idle = Some(self.animator.animate([(Channel::Scale, motion)], now_ms));
    }

    /// Halts the breathing loop and any other scale animation where it stands.
    pub fn stop_idle(&mut self) {
        self.idle = None;
        self.animator.stop(Channel::Scale);
    }

    /// Springs toward the held scale.
    pub fn scale_up(&mut self, now_ms: u64) -> CompletionToken {
        self.spring_scale(self.config.grab_scale, now_ms)
    }

    /// Springs back to unit scale.
    pub fn scale_down(&mut self, now_ms: u64) -> CompletionToken {
        self.spring_scale(1.0, now_ms)
    }

    /// Settles leftover pan after a tap, together with the scale.
    ///
    /// Axes in `needs` with a residual below the settle epsilon are zeroed
    /// directly instead of sprung.
    pub fn reset_pan(&mut self, needs: Axes, now_ms: u64) -> CompletionToken {
        let pan = self.pan();
        let residual = Axes::significant(pan, self.config.settle_epsilon);
        let mut motions = self.scale_motion(1.0);
        for (axis, channel) in [(Axes::X, Channel::PanX), (Axes::Y, Channel::PanY)] {
            if !needs.contains(axis) {
                continue;
            }
            if residual.contains(axis) {
                motions.push((channel, Motion::spring(0.0, self.config.pan_spring)));
            } else {
                self.animator.set(channel, 0.0);
            }
        }
        self.animator.animate(motions, now_ms)
    }

    /// Slides the pan offset to zero after a drag commit.
    ///
    /// Axes outside `needs` are set to zero directly so an axis that is
    /// already in place never wobbles.
    pub fn animate_edge_snap(&mut self, needs: Axes, now_ms: u64) -> CompletionToken {
        let mut motions = self.scale_motion(1.0);
        for (axis, channel) in [(Axes::X, Channel::PanX), (Axes::Y, Channel::PanY)] {
            if needs.contains(axis) {
                motions.push((channel, Motion::spring(0.0, self.config.pan_spring)));
            } else {
                self.animator.set(channel, 0.0);
            }
        }
        self.animator.animate(motions, now_ms)
    }

    /// Freezes both pan channels where they are.
    pub fn stop_pan(&mut self) {
        self.animator.stop(Channel::PanX);
        self.animator.stop(Channel::PanY);
    }

    /// Sets the pan offset without animation.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.animator.set(Channel::PanX, pan.x);
        self.animator.set(Channel::PanY, pan.y);
    }

    /// Sets the committed box corner and the pan offset without animation.
    pub fn set_all(&mut self, top_left: TopLeftPoint, pan: Vec2) {
        self.animator.set(Channel::Left, top_left.left());
        self.animator.set(Channel::Top, top_left.top());
        self.set_pan(pan);
    }

    /// Moves the committed box corner without touching pan.
    pub fn update_position(&mut self, top_left: TopLeftPoint) {
        self.animator.set(Channel::Left, top_left.left());
        self.animator.set(Channel::Top, top_left.top());
    }

    /// Advances all channels to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Completions {
        self.animator.tick(now_ms)
    }

    /// Stops every channel and forgets the breathing loop.
    pub fn shutdown(&mut self) {
        self.idle = None;
        self.is_dragging = false;
        self.animator.stop_all();
    }

    fn spring_scale(&mut self, to: f64, now_ms: u64) -> CompletionToken {
        self.idle = None;
        let motions = self.scale_motion(to);
        self.animator.animate(motions, now_ms)
    }

    fn scale_motion(&self, to: f64) -> SmallVec<[(Channel, Motion); 3]> {
        let mut motions = SmallVec::new();
        motions.push((Channel::Scale, Motion::spring(to, self.config.scale_spring)));
        motions
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use petdock_geometry::TopLeftPoint;

    use super::{AnimationDriver, Axes};
    use crate::GestureConfig;

    fn driver() -> AnimationDriver {
        AnimationDriver::new(GestureConfig::default(), TopLeftPoint::new(289.0, 329.6))
    }

    fn settle(driver: &mut AnimationDriver, mut now: u64) -> (u64, bool) {
        for _ in 0..1_000 {
            now += 16;
            if let Some(done) = driver.tick(now).first() {
                return (now, done.finished);
            }
        }
        panic!("driver never settled");
    }

    #[test]
    fn significant_axes_respect_epsilon() {
        assert_eq!(Axes::significant(Vec2::new(0.05, 3.0), 0.1), Axes::Y);
        assert_eq!(Axes::significant(Vec2::new(-0.2, 0.0), 0.1), Axes::X);
        assert!(Axes::significant(Vec2::ZERO, 0.1).is_empty());
    }

    #[test]
    fn idle_is_blocked_while_dragging() {
        let mut d = driver();
        d.set_dragging(true);
        d.start_idle(0);
        assert!(!d.is_idling());

        d.set_dragging(false);
        d.start_idle(0);
        assert!(d.is_idling());
        d.tick(1_500);
        assert!((d.scale() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn restarting_idle_is_clean() {
        let mut d = driver();
        d.start_idle(0);
        d.tick(700);
        d.start_idle(700);
        assert!(d.is_idling());
        // The interrupted loop reports once and is not finished.
        let done = d.tick(716);
        assert_eq!(done.len(), 1);
        assert!(!done[0].finished);
    }

    #[test]
    fn stop_idle_freezes_scale() {
        let mut d = driver();
        d.start_idle(0);
        d.tick(750);
        let frozen = d.scale();
        d.stop_idle();
        d.tick(1_000);
        assert_eq!(d.scale(), frozen);
        assert!(!d.is_idling());
    }

    #[test]
    fn scale_down_reports_completion() {
        let mut d = driver();
        d.scale_up(0);
        d.tick(1_000);
        d.scale_down(1_000);
        let (_, finished) = settle(&mut d, 1_000);
        assert!(finished);
        assert_eq!(d.scale(), 1.0);
    }

    #[test]
    fn reset_pan_skips_negligible_axis() {
        let mut d = driver();
        d.set_pan(Vec2::new(0.05, 8.0));
        d.reset_pan(Axes::X | Axes::Y, 0);
        assert_eq!(d.pan().x, 0.0);
        let (_, finished) = settle(&mut d, 0);
        assert!(finished);
        assert_eq!(d.pan(), Vec2::ZERO);
        assert_eq!(d.scale(), 1.0);
    }

    #[test]
    fn edge_snap_sets_unneeded_axis_directly() {
        let mut d = driver();
        d.set_all(TopLeftPoint::new(21.0, 300.0), Vec2::new(-40.0, 0.0));
        d.animate_edge_snap(Axes::X, 0);
        assert_eq!(d.pan().y, 0.0);
        let (_, finished) = settle(&mut d, 0);
        assert!(finished);
        assert_eq!(d.rendered_top_left(), TopLeftPoint::new(21.0, 300.0));
    }

    #[test]
    fn set_all_is_unanimated() {
        let mut d = driver();
        d.set_all(TopLeftPoint::new(10.0, 20.0), Vec2::new(1.0, 2.0));
        assert_eq!(d.rendered_top_left(), TopLeftPoint::new(11.0, 22.0));
        d.update_position(TopLeftPoint::new(0.0, 0.0));
        assert_eq!(d.rendered_top_left(), TopLeftPoint::new(1.0, 2.0));
    }
}
