// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::spec::{LoopLeg, Motion, SpringSpec, TimingSpec};

/// Integration step for springs, in seconds.
const SPRING_STEP: f64 = 0.001;

/// Result of advancing an [`AnimatedValue`] to a new frame time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing is driving the value.
    Idle,
    /// The value is still moving.
    Running,
    /// The driving animation reached its target on this frame.
    Finished,
}

#[derive(Debug, Clone)]
enum Active {
    Timing {
        from: f64,
        to: f64,
        spec: TimingSpec,
        started_at: u64,
    },
    Spring {
        to: f64,
        spec: SpringSpec,
        last_tick: u64,
    },
    Loop {
        legs: SmallVec<[LoopLeg; 2]>,
        leg: usize,
        from: f64,
        started_at: u64,
    },
}

/// A scalar that can be set directly or driven by a [`Motion`].
///
/// Time is supplied by the caller in milliseconds; the value never reads a
/// clock. Setting or stopping the value cancels whatever drives it.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f64,
    velocity: f64,
    active: Option<Active>,
}

impl AnimatedValue {
    /// Creates a value at rest.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            active: None,
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Current velocity in units per second. Only springs track velocity.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns `true` while a motion drives the value.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Jumps to `value`, cancelling any motion. Returns whether a motion was
    /// cancelled.
    pub fn set(&mut self, value: f64) -> bool {
        let cancelled = self.stop();
        self.value = value;
        cancelled
    }

    /// Freezes the value where it is. Returns whether a motion was cancelled.
    pub fn stop(&mut self) -> bool {
        self.velocity = 0.0;
        self.active.take().is_some()
    }

    /// Starts `motion` from the current value at time `now_ms`.
    ///
    /// A spring keeps the current velocity so re-targeting mid-flight stays
    /// smooth; tweens and loops start from rest.
    pub fn start(&mut self, motion: Motion, now_ms: u64) {
        self.active = Some(match motion {
            Motion::Timing { to, spec } => {
                self.velocity = 0.0;
                Active::Timing {
                    from: self.value,
                    to,
                    spec,
                    started_at: now_ms,
                }
            }
            Motion::Spring { to, spec } => Active::Spring {
                to,
                spec,
                last_tick: now_ms,
            },
            Motion::Loop { legs } => {
                self.velocity = 0.0;
                if legs.is_empty() {
                    self.active = None;
                    return;
                }
                Active::Loop {
                    legs,
                    leg: 0,
                    from: self.value,
                    started_at: now_ms,
                }
            }
        });
    }

    /// Advances the driving motion to `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Step {
        let Some(active) = self.active.as_mut() else {
            return Step::Idle;
        };
        let finished = match active {
            Active::Timing {
                from,
                to,
                spec,
                started_at,
            } => {
                let elapsed = now_ms.saturating_sub(*started_at);
                if elapsed >= spec.duration_ms {
                    self.value = *to;
                    true
                } else {
                    let progress = spec.easing.transform(elapsed as f64 / spec.duration_ms as f64);
                    self.value = *from + (*to - *from) * progress;
                    false
                }
            }
            Active::Spring {
                to,
                spec,
                last_tick,
            } => {
                let dt = now_ms.saturating_sub(*last_tick) as f64 / 1000.0;
                *last_tick = now_ms;
                let (value, velocity, at_rest) =
                    integrate_spring(self.value, self.velocity, *to, spec, dt);
                self.value = value;
                self.velocity = velocity;
                at_rest
            }
            Active::Loop {
                legs,
                leg,
                from,
                started_at,
            } => {
                // Roll over every leg that completed since the last frame so
                // the loop keeps its phase even with sparse ticks.
                loop {
                    let current = legs[*leg];
                    let duration = current.spec.duration_ms.max(1);
                    let elapsed = now_ms.saturating_sub(*started_at);
                    if elapsed < duration {
                        let progress = current.spec.easing.transform(elapsed as f64 / duration as f64);
                        self.value = *from + (current.to - *from) * progress;
                        break;
                    }
                    *from = current.to;
                    *started_at += duration;
                    *leg = (*leg + 1) % legs.len();
                    self.value = current.to;
                }
                false
            }
        };
        if finished {
            self.active = None;
            self.velocity = 0.0;
            Step::Finished
        } else {
            Step::Running
        }
    }
}

// Semi-implicit Euler over fixed sub-steps; returns the new value, velocity
// and whether the spring came to rest (in which case the value is the target).
fn integrate_spring(
    mut value: f64,
    mut velocity: f64,
    to: f64,
    spec: &SpringSpec,
    dt: f64,
) -> (f64, f64, bool) {
    let damping = spec.damping();
    let is_rest =
        |v: f64, vel: f64| (v - to).abs() < spec.rest_displacement && vel.abs() < spec.rest_velocity;
    if is_rest(value, velocity) {
        return (to, 0.0, true);
    }
    let mut remaining = dt;
    while remaining > 0.0 {
        let step = SPRING_STEP.min(remaining);
        let force = -spec.stiffness * (value - to) - damping * velocity;
        velocity += force * step;
        value += velocity * step;
        remaining -= step;
        if is_rest(value, velocity) {
            return (to, 0.0, true);
        }
    }
    (value, velocity, false)
}

#[cfg(test)]
mod tests {
    use super::{AnimatedValue, Step};
    use crate::{Easing, Motion, SpringSpec, TimingSpec};

    fn run_until_done(value: &mut AnimatedValue, mut now: u64, frame: u64) -> u64 {
        for _ in 0..10_000 {
            now += frame;
            if value.advance(now) == Step::Finished {
                return now;
            }
        }
        panic!("animation did not finish");
    }

    #[test]
    fn idle_value_reports_idle() {
        let mut v = AnimatedValue::new(3.0);
        assert_eq!(v.advance(100), Step::Idle);
        assert_eq!(v.get(), 3.0);
    }

    #[test]
    fn timing_reaches_target_exactly_at_duration() {
        let mut v = AnimatedValue::new(0.0);
        v.start(Motion::timing(10.0, TimingSpec::linear(100)), 1_000);
        assert_eq!(v.advance(1_050), Step::Running);
        assert!((v.get() - 5.0).abs() < 1e-12);
        assert_eq!(v.advance(1_100), Step::Finished);
        assert_eq!(v.get(), 10.0);
        assert!(!v.is_animating());
    }

    #[test]
    fn zero_duration_timing_finishes_on_first_frame() {
        let mut v = AnimatedValue::new(1.0);
        v.start(Motion::timing(2.0, TimingSpec::linear(0)), 0);
        assert_eq!(v.advance(0), Step::Finished);
        assert_eq!(v.get(), 2.0);
    }

    #[test]
    fn spring_settles_on_target() {
        let mut v = AnimatedValue::new(1.15);
        v.start(Motion::spring(1.0, SpringSpec::gentle()), 0);
        let done_at = run_until_done(&mut v, 0, 16);
        assert_eq!(v.get(), 1.0);
        assert_eq!(v.velocity(), 0.0);
        assert!(done_at < 3_000, "spring took {done_at}ms");
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let mut v = AnimatedValue::new(0.0);
        v.start(Motion::spring(100.0, SpringSpec::gentle()), 0);
        let mut max: f64 = 0.0;
        let mut now = 0;
        while v.advance(now) != Step::Finished {
            max = max.max(v.get());
            now += 8;
        }
        assert!(max > 100.0);
    }

    #[test]
    fn spring_already_at_rest_finishes_immediately() {
        let mut v = AnimatedValue::new(0.0);
        v.start(Motion::spring(0.0, SpringSpec::stiff()), 10);
        assert_eq!(v.advance(10), Step::Finished);
    }

    #[test]
    fn set_cancels_motion() {
        let mut v = AnimatedValue::new(0.0);
        v.start(Motion::timing(10.0, TimingSpec::linear(100)), 0);
        assert!(v.set(4.0));
        assert_eq!(v.advance(50), Step::Idle);
        assert_eq!(v.get(), 4.0);
        assert!(!v.set(5.0));
    }

    #[test]
    fn loop_alternates_and_never_finishes() {
        let mut v = AnimatedValue::new(1.0);
        v.start(
            Motion::pulse(1.1, 1.0, TimingSpec::new(1_500, Easing::Linear)),
            0,
        );
        assert_eq!(v.advance(750), Step::Running);
        assert!((v.get() - 1.05).abs() < 1e-9);
        assert_eq!(v.advance(1_500), Step::Running);
        assert!((v.get() - 1.1).abs() < 1e-9);
        assert_eq!(v.advance(2_250), Step::Running);
        assert!((v.get() - 1.05).abs() < 1e-9);
        // Sparse tick skipping several legs keeps phase.
        assert_eq!(v.advance(6_000 + 750), Step::Running);
        assert!((v.get() - 1.05).abs() < 1e-9);
        assert!(v.is_animating());
        assert!(v.stop());
        assert!(!v.is_animating());
    }

    #[test]
    fn empty_loop_does_nothing() {
        let mut v = AnimatedValue::new(1.0);
        v.start(Motion::Loop { legs: Default::default() }, 0);
        assert!(!v.is_animating());
    }
}
