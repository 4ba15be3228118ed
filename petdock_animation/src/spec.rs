// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::Easing;

/// Duration plus timing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSpec {
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Timing curve applied to linear progress.
    pub easing: Easing,
}

impl TimingSpec {
    /// Creates a timing spec.
    #[must_use]
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// Constant-speed timing.
    #[must_use]
    pub const fn linear(duration_ms: u64) -> Self {
        Self::new(duration_ms, Easing::Linear)
    }
}

impl Default for TimingSpec {
    fn default() -> Self {
        Self::new(300, Easing::EaseInOut)
    }
}

/// Damped harmonic oscillator with unit mass.
///
/// A spring is at rest once it is within `rest_displacement` of its target and
/// slower than `rest_velocity` (units per second); it then snaps exactly onto
/// the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Spring constant. Higher settles faster.
    pub stiffness: f64,
    /// `1.0` is critically damped, below overshoots, above creeps.
    pub damping_ratio: f64,
    /// Displacement under which the spring may rest.
    pub rest_displacement: f64,
    /// Speed under which the spring may rest.
    pub rest_velocity: f64,
}

impl SpringSpec {
    /// Slightly bouncy spring for feedback on grab and release.
    #[must_use]
    pub const fn gentle() -> Self {
        Self {
            stiffness: 170.0,
            damping_ratio: 0.7,
            rest_displacement: 0.001,
            rest_velocity: 0.01,
        }
    }

    /// Fast spring without overshoot, for positional settling.
    #[must_use]
    pub const fn stiff() -> Self {
        Self {
            stiffness: 400.0,
            damping_ratio: 1.0,
            rest_displacement: 0.01,
            rest_velocity: 0.05,
        }
    }

    pub(crate) fn damping(&self) -> f64 {
        2.0 * self.damping_ratio * self.stiffness.sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::gentle()
    }
}

/// One leg of a looping animation: tween to `to` using `spec`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopLeg {
    /// Leg target.
    pub to: f64,
    /// Leg timing.
    pub spec: TimingSpec,
}

/// How an animated value should move.
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// Tween from the current value to `to`.
    Timing {
        /// Target value.
        to: f64,
        /// Duration and curve.
        spec: TimingSpec,
    },
    /// Spring from the current value (and velocity) to `to`.
    Spring {
        /// Target value.
        to: f64,
        /// Spring parameters.
        spec: SpringSpec,
    },
    /// Play the legs in order forever. Never finishes on its own.
    Loop {
        /// Legs played in sequence, restarting after the last.
        legs: SmallVec<[LoopLeg; 2]>,
    },
}

impl Motion {
    /// Tween to `to`.
    #[must_use]
    pub fn timing(to: f64, spec: TimingSpec) -> Self {
        Self::Timing { to, spec }
    }

    /// Spring to `to`.
    #[must_use]
    pub fn spring(to: f64, spec: SpringSpec) -> Self {
        Self::Spring { to, spec }
    }

    /// Alternate between `peak` and `rest`, each leg using `leg`.
    #[must_use]
    pub fn pulse(peak: f64, rest: f64, leg: TimingSpec) -> Self {
        let mut legs = SmallVec::new();
        legs.push(LoopLeg { to: peak, spec: leg });
        legs.push(LoopLeg { to: rest, spec: leg });
        Self::Loop { legs }
    }
}
