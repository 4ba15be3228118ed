// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use petdock_animation::{Easing, SpringSpec, TimingSpec};

/// Thresholds and animations for the sheet gesture.
///
/// Distances are in points, velocities in points per millisecond.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetConfig {
    /// Downward travel past which a release dismisses.
    pub dismiss_distance: f64,
    /// Downward release velocity past which a release dismisses.
    pub dismiss_velocity: f64,
    /// Factor applied to handle drags above the rest position.
    pub rubber_band: f64,
    /// Scroll offsets at or below this count as "at the top".
    pub scroll_top_epsilon: f64,
    /// Total movement under which a release is a tap.
    pub tap_slop: f64,
    /// Slide off screen after a dismissing release.
    pub dismiss: TimingSpec,
    /// Slide in when presented.
    pub present: TimingSpec,
    /// Return to rest after a release that did not dismiss.
    pub spring: SpringSpec,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            dismiss_distance: 150.0,
            dismiss_velocity: 0.7,
            rubber_band: 0.3,
            scroll_top_epsilon: 1.0,
            tap_slop: 5.0,
            dismiss: TimingSpec::new(250, Easing::EaseInOut),
            present: TimingSpec::new(300, Easing::EaseOut),
            spring: SpringSpec::gentle(),
        }
    }
}

impl SheetConfig {
    /// Returns this configuration with different dismiss thresholds.
    #[must_use]
    pub fn with_dismiss_thresholds(mut self, distance: f64, velocity: f64) -> Self {
        self.dismiss_distance = distance;
        self.dismiss_velocity = velocity;
        self
    }
}
