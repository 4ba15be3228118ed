// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::types::{CenterPoint, TopLeftPoint};

/// Valid range for the widget's center, per axis.
///
/// Constructed through [`CenterBounds::new`], which guarantees
/// `min <= max` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterBounds {
    /// Smallest allowed center X.
    pub min_x: f64,
    /// Largest allowed center X.
    pub max_x: f64,
    /// Smallest allowed center Y.
    pub min_y: f64,
    /// Largest allowed center Y.
    pub max_y: f64,
}

impl CenterBounds {
    /// Creates bounds, collapsing any inverted axis to its midpoint.
    #[must_use]
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        let (min_x, max_x) = normalize_range(min_x, max_x);
        let (min_y, max_y) = normalize_range(min_y, max_y);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Clamps each axis of `pos` into range.
    #[must_use]
    pub fn clamp(&self, pos: CenterPoint) -> CenterPoint {
        CenterPoint::new(self.clamp_x(pos.x()), self.clamp_y(pos.y()))
    }

    /// Clamps a center X into range.
    #[must_use]
    pub fn clamp_x(&self, x: f64) -> f64 {
        clamp_axis(x, self.min_x, self.max_x)
    }

    /// Clamps a center Y into range.
    #[must_use]
    pub fn clamp_y(&self, y: f64) -> f64 {
        clamp_axis(y, self.min_y, self.max_y)
    }

    /// Returns `true` if `pos` lies inside the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, pos: CenterPoint) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x()) && (self.min_y..=self.max_y).contains(&pos.y())
    }

    /// Horizontal extent of the valid range.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent of the valid range.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Valid range for the widget's top-left corner, per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopLeftBounds {
    /// Smallest allowed `left`.
    pub min_left: f64,
    /// Largest allowed `left`.
    pub max_left: f64,
    /// Smallest allowed `top`.
    pub min_top: f64,
    /// Largest allowed `top`.
    pub max_top: f64,
}

impl TopLeftBounds {
    /// Creates bounds, collapsing any inverted axis to its midpoint.
    #[must_use]
    pub fn new(min_left: f64, max_left: f64, min_top: f64, max_top: f64) -> Self {
        let (min_left, max_left) = normalize_range(min_left, max_left);
        let (min_top, max_top) = normalize_range(min_top, max_top);
        Self {
            min_left,
            max_left,
            min_top,
            max_top,
        }
    }

    /// Clamps each axis of `pos` into range.
    #[must_use]
    pub fn clamp(&self, pos: TopLeftPoint) -> TopLeftPoint {
        TopLeftPoint::new(
            clamp_axis(pos.left(), self.min_left, self.max_left),
            clamp_axis(pos.top(), self.min_top, self.max_top),
        )
    }
}

// An inverted range happens when the widget is larger than the space left
// between insets and paddings.
fn normalize_range(min: f64, max: f64) -> (f64, f64) {
    if min > max {
        let mid = (min + max) / 2.0;
        (mid, mid)
    } else {
        (min, max)
    }
}

// `f64::clamp` panics on NaN bounds; this keeps NaN input contained instead.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
