// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use petdock_animation::CompletionToken;
use petdock_event_state::cooldown::Cooldown;
use petdock_event_state::drag::DragState;
use petdock_geometry::{BubbleMetrics, CenterPoint, GeometryError, Layout, TopLeftPoint};
use smallvec::SmallVec;

use crate::driver::{AnimationDriver, Axes};
use crate::position::PositionState;
use crate::GestureConfig;

/// Outbound notifications for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleEvent {
    /// The widget was tapped; the host should open the pet sheet.
    OpenModal,
}

/// What a tap did at release time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// [`BubbleEvent::OpenModal`] was queued immediately.
    Opened,
    /// Residual pan is settling first; the open is queued when it finishes.
    Deferred,
    /// A modal opened less than a cooldown ago; nothing was queued.
    Suppressed,
}

/// How a gesture ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// The pointer barely moved.
    Tap(TapOutcome),
    /// The widget was moved and committed to `target`.
    Drag {
        /// Committed logical position, docked to an edge.
        target: CenterPoint,
        /// Whether a slide from the release point to `target` is running.
        animated: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Continuation {
    OpenModalThenIdle,
    ResumeIdle,
}

#[derive(Clone, Copy, Debug)]
struct Tracking {
    drag: DragState,
    has_moved: bool,
    // Pan frozen at the grab, when it landed on a running slide.
    start_pan: Vec2,
}

/// Gesture state machine for the floating widget.
///
/// The controller owns the position state and the animation driver. Hosts
/// feed it pointer events, layout changes and frame ticks in order; nothing
/// is captured at registration time, so every handler sees the live layout.
///
/// `Idle -> pointer_down -> Tracking -> pointer_up -> Idle`, where
/// `pointer_up` resolves to a [`Resolution::Tap`] or a [`Resolution::Drag`].
#[derive(Debug)]
pub struct BubbleController {
    metrics: BubbleMetrics,
    config: GestureConfig,
    position: PositionState,
    driver: AnimationDriver,
    tracking: Option<Tracking>,
    cooldown: Cooldown,
    pending: SmallVec<[(CompletionToken, Continuation); 2]>,
    events: Vec<BubbleEvent>,
    mounted: bool,
}

impl BubbleController {
    /// Creates a controller with the widget at its initial position.
    pub fn new(
        metrics: BubbleMetrics,
        config: GestureConfig,
        layout: Layout,
    ) -> Result<Self, GeometryError> {
        metrics.validate()?;
        layout.validate()?;
        let position = PositionState::new(&metrics, layout);
        let top_left = metrics.center_to_top_left(position.position(), layout.scale);
        Ok(Self {
            driver: AnimationDriver::new(config, top_left),
            cooldown: Cooldown::new(config.open_cooldown_ms),
            metrics,
            config,
            position,
            tracking: None,
            pending: SmallVec::new(),
            events: Vec::new(),
            mounted: false,
        })
    }

    /// Starts the breathing loop. Call once the widget is on screen.
    pub fn mount(&mut self, now_ms: u64) {
        self.mounted = true;
        self.driver.start_idle(now_ms);
    }

    /// Stops all animation and forgets queued work and timers.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.tracking = None;
        self.driver.shutdown();
        self.pending.clear();
        self.events.clear();
        self.cooldown.reset();
    }

    /// Logical center of the widget.
    #[must_use]
    pub fn position(&self) -> CenterPoint {
        self.position.position()
    }

    /// Layout currently applied.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.position.layout()
    }

    /// Geometry configuration.
    #[must_use]
    pub fn metrics(&self) -> &BubbleMetrics {
        &self.metrics
    }

    /// Animated values behind the rendered widget.
    #[must_use]
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    /// Returns `true` between `pointer_down` and `pointer_up`.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Where the widget's center is drawn right now.
    #[must_use]
    pub fn rendered_center(&self) -> CenterPoint {
        self.metrics
            .top_left_to_center(self.driver.rendered_top_left(), self.layout().scale)
    }

    /// Applies new screen dimensions, insets, scale or artwork.
    ///
    /// Safe to call mid-drag: the next move is clamped against this layout.
    pub fn set_layout(&mut self, layout: Layout) {
        self.position
            .apply_layout(&self.metrics, layout, self.config.edge_snap_tolerance);
        let top_left = self.top_left_of(self.position.position());
        self.driver.update_position(top_left);
    }

    /// Pointer pressed on the widget. Ignored while unmounted.
    ///
    /// A running slide freezes where it is drawn. The logical position keeps
    /// its docked value, so a tap settles the frozen pan back to the dock and
    /// a drag continues from the drawn position.
    pub fn pointer_down(&mut self, point: Point, now_ms: u64) {
        if !self.mounted {
            return;
        }
        self.driver.set_dragging(true);
        self.driver.stop_idle();
        self.driver.stop_pan();

        self.driver.scale_up(now_ms);
        let mut drag = DragState::default();
        drag.start(point, now_ms);
        self.tracking = Some(Tracking {
            drag,
            has_moved: false,
            start_pan: self.driver.pan(),
        });
    }

    /// Pointer moved while pressed.
    ///
    /// Only the pan signal changes; the logical position is left alone until
    /// release.
    pub fn pointer_move(&mut self, point: Point, now_ms: u64) {
        if !self.mounted {
            return;
        }
        let Some(tracking) = self.tracking.as_mut() else {
            return;
        };
        tracking.drag.update(point, now_ms);
        let Some(total) = tracking.drag.total_offset(point) else {
            return;
        };
        if total.x.abs() > self.config.move_activation || total.y.abs() > self.config.move_activation
        {
            tracking.has_moved = true;
        }
        let target = tracking.start_pan + total;
        let pan = self.clamped_pan(target);
        log::trace!("drag delta {total:?} clamped to pan {pan:?}");
        self.driver.set_pan(pan);
    }

    /// Pointer released. Returns `None` if no gesture was being tracked or
    /// the widget is unmounted.
    pub fn pointer_up(&mut self, point: Point, now_ms: u64) -> Option<Resolution> {
        if !self.mounted {
            return None;
        }
        let mut tracking = self.tracking.take()?;
        tracking.drag.update(point, now_ms);
        let total = tracking.drag.total_offset(point).unwrap_or(Vec2::ZERO);
        self.driver.set_dragging(false);

        let resolution = if !tracking.has_moved && total.hypot() < self.config.tap_distance {
            Resolution::Tap(self.resolve_tap(now_ms))
        } else {
            self.resolve_drag(tracking.start_pan + total, now_ms)
        };
        log::debug!("bubble gesture resolved: {resolution:?}");
        Some(resolution)
    }

    /// Advances animations to `now_ms`, runs the follow-ups of any that
    /// settled, and drains queued events.
    pub fn tick(&mut self, now_ms: u64) -> Vec<BubbleEvent> {
        if !self.mounted {
            return Vec::new();
        }
        for completion in self.driver.tick(now_ms) {
            let Some(index) = self
                .pending
                .iter()
                .position(|(token, _)| *token == completion.token)
            else {
                continue;
            };
            let (_, continuation) = self.pending.remove(index);
            // A new grab interrupted the chain; the new gesture owns what
            // happens next.
            if !completion.finished {
                continue;
            }
            match continuation {
                Continuation::OpenModalThenIdle => {
                    self.open_modal(now_ms);
                    self.driver.start_idle(now_ms);
                }
                Continuation::ResumeIdle => self.driver.start_idle(now_ms),
            }
        }
        self.take_events()
    }

    /// Drains events queued since the last drain.
    pub fn take_events(&mut self) -> Vec<BubbleEvent> {
        core::mem::take(&mut self.events)
    }

    fn resolve_tap(&mut self, now_ms: u64) -> TapOutcome {
        let residual = Axes::significant(self.driver.pan(), self.config.settle_epsilon);
        if !residual.is_empty() {
            let token = self.driver.reset_pan(residual, now_ms);
            self.pending.push((token, Continuation::OpenModalThenIdle));
            return TapOutcome::Deferred;
        }
        // Clear any sub-epsilon leftover so the drawn box matches the dock.
        self.driver.set_pan(Vec2::ZERO);
        let outcome = if self.open_modal(now_ms) {
            TapOutcome::Opened
        } else {
            TapOutcome::Suppressed
        };
        let token = self.driver.scale_down(now_ms);
        self.pending.push((token, Continuation::ResumeIdle));
        outcome
    }

    fn resolve_drag(&mut self, total: Vec2, now_ms: u64) -> Resolution {
        let layout = self.layout();
        let pan = self.clamped_pan(total);
        self.driver.set_pan(pan);

        let base = self.top_left_of(self.position.position());
        let released = self
            .metrics
            .top_left_to_center(base.offset(pan), layout.scale);
        // Both clamps must agree on Y; re-check against the center frame.
        let y = self.metrics.bounds(&layout).clamp_y(released.y());
        let x = self.metrics.edge_snap_target(released.x(), &layout);
        let target = CenterPoint::new(x, y);

        let visual = self.position.position().offset(self.driver.pan());
        let offset = visual.0 - target.0;
        let needs = Axes::significant(offset, self.config.settle_epsilon);

        let (token, animated) = if needs.is_empty() {
            self.commit(target, Vec2::ZERO);
            (self.driver.scale_down(now_ms), false)
        } else {
            self.commit(target, offset);
            (self.driver.animate_edge_snap(needs, now_ms), true)
        };
        self.pending.push((token, Continuation::ResumeIdle));
        Resolution::Drag { target, animated }
    }

    // Sets the animated baseline first and the logical position second, so
    // the drawn widget does not move when the position changes.
    fn commit(&mut self, position: CenterPoint, pan: Vec2) {
        let top_left = self.top_left_of(position);
        self.driver.set_all(top_left, pan);
        self.position.set(position);
    }

    fn open_modal(&mut self, now_ms: u64) -> bool {
        if !self.cooldown.try_fire(now_ms) {
            log::debug!("modal open suppressed by cooldown");
            return false;
        }
        self.events.push(BubbleEvent::OpenModal);
        true
    }

    // Pan that moves the box by `total`, stopped at the top-left bounds.
    fn clamped_pan(&self, total: Vec2) -> Vec2 {
        let layout = self.layout();
        let base = self.top_left_of(self.position.position());
        let clamped = self
            .metrics
            .top_left_bounds(&layout)
            .clamp(base.offset(total));
        clamped.0 - base.0
    }

    fn top_left_of(&self, position: CenterPoint) -> TopLeftPoint {
        self.metrics
            .center_to_top_left(position, self.layout().scale)
    }
}
