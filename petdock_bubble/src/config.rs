// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use petdock_animation::{Easing, SpringSpec, TimingSpec};

/// Tuning for the widget's gesture recognition and feedback animations.
///
/// Distances are in points, times in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Movement along either axis that marks a gesture as a drag.
    pub move_activation: f64,
    /// Total displacement under which an unmoved gesture counts as a tap.
    pub tap_distance: f64,
    /// Minimum time between two modal opens.
    pub open_cooldown_ms: u64,
    /// Residual offsets below this are treated as already settled.
    pub settle_epsilon: f64,
    /// How close to an edge a docked widget must be to follow that edge when
    /// the layout changes.
    pub edge_snap_tolerance: f64,
    /// Scale while held.
    pub grab_scale: f64,
    /// Peak scale of the idle breathing loop.
    pub idle_peak_scale: f64,
    /// Timing of one breathing leg (half a period).
    pub idle_leg: TimingSpec,
    /// Spring used for scale feedback.
    pub scale_spring: SpringSpec,
    /// Spring used to settle pan offsets.
    pub pan_spring: SpringSpec,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            move_activation: 5.0,
            tap_distance: 10.0,
            open_cooldown_ms: 300,
            settle_epsilon: 0.1,
            edge_snap_tolerance: 20.0,
            grab_scale: 1.15,
            idle_peak_scale: 1.1,
            idle_leg: TimingSpec::new(1_500, Easing::EaseInOut),
            scale_spring: SpringSpec::gentle(),
            pan_spring: SpringSpec::stiff(),
        }
    }
}
