// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Insets, Point, Size, Vec2};

use crate::GeometryError;

/// Logical center of the widget, in screen coordinates.
///
/// This is the frame the position state stores and the edge-snap rule
/// reasons about. Convert to [`TopLeftPoint`] only through
/// [`BubbleMetrics::center_to_top_left`](crate::BubbleMetrics::center_to_top_left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CenterPoint(pub Point);

impl CenterPoint {
    /// Creates a center point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self(Point::new(x, y))
    }

    /// Horizontal coordinate.
    #[must_use]
    pub const fn x(self) -> f64 {
        self.0.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub const fn y(self) -> f64 {
        self.0.y
    }

    /// Returns this point moved by `delta`.
    #[must_use]
    pub fn offset(self, delta: Vec2) -> Self {
        Self(self.0 + delta)
    }
}

/// Top-left corner of the widget's box, in screen coordinates.
///
/// This is the frame layout props (`left`/`top`) and the live drag clamp use.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TopLeftPoint(pub Point);

impl TopLeftPoint {
    /// Creates a top-left point from its coordinates.
    #[must_use]
    pub const fn new(left: f64, top: f64) -> Self {
        Self(Point::new(left, top))
    }

    /// Distance from the left edge of the screen.
    #[must_use]
    pub const fn left(self) -> f64 {
        self.0.x
    }

    /// Distance from the top edge of the screen.
    #[must_use]
    pub const fn top(self) -> f64 {
        self.0.y
    }

    /// Returns this point moved by `delta`.
    #[must_use]
    pub fn offset(self, delta: Vec2) -> Self {
        Self(self.0 + delta)
    }
}

/// Safe-area insets reported by the platform (notch, home indicator, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SafeArea {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the right edge.
    pub right: f64,
}

impl SafeArea {
    /// No insets on any side.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates insets in `top, bottom, left, right` order.
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

impl From<Insets> for SafeArea {
    fn from(insets: Insets) -> Self {
        Self {
            top: insets.y0,
            bottom: insets.y1,
            left: insets.x0,
            right: insets.x1,
        }
    }
}

impl From<SafeArea> for Insets {
    fn from(area: SafeArea) -> Self {
        Self::new(area.left, area.top, area.right, area.bottom)
    }
}

/// Which artwork the widget is currently showing.
///
/// Different sprites carry different amounts of transparent padding, so the
/// clamp boundary is shifted per visual state (see
/// [`EdgeOffsets`](crate::EdgeOffsets)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisualState {
    /// Growth stage of the pet, starting at 1.
    pub stage: u8,
    /// Whether the "urgent" artwork is shown.
    pub dying: bool,
}

impl VisualState {
    /// Creates a visual state.
    #[must_use]
    pub const fn new(stage: u8, dying: bool) -> Self {
        Self { stage, dying }
    }

    /// Parses a textual key of the form `stage{N}_{normal|dying}`.
    #[must_use]
    pub fn parse_key(key: &str) -> Option<Self> {
        let rest = key.strip_prefix("stage")?;
        let (stage, variant) = rest.split_once('_')?;
        let stage = stage.parse().ok()?;
        let dying = match variant {
            "normal" => false,
            "dying" => true,
            _ => return None,
        };
        Some(Self { stage, dying })
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::new(1, false)
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = if self.dying { "dying" } else { "normal" };
        write!(f, "stage{}_{}", self.stage, variant)
    }
}

/// Live context for a geometry query.
///
/// Screen size and insets come from the host and may change at any moment
/// (rotation, keyboard). `scale` and `visual` default to their neutral values
/// so callers that only know about the screen keep working.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Screen dimensions.
    pub screen: Size,
    /// Safe-area insets.
    pub insets: SafeArea,
    /// Widget scale multiplier applied to the base size.
    pub scale: f64,
    /// Artwork discriminator used for the edge-offset lookup.
    pub visual: VisualState,
}

impl Layout {
    /// Creates a layout with `scale = 1.0` and the default visual state.
    #[must_use]
    pub fn new(screen: Size, insets: SafeArea) -> Self {
        Self {
            screen,
            insets,
            scale: 1.0,
            visual: VisualState::default(),
        }
    }

    /// Returns this layout with a different scale.
    ///
    /// The scale is trusted; use [`Layout::try_with_scale`] for host input.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns this layout with a different scale, rejecting non-finite or
    /// non-positive values.
    pub fn try_with_scale(self, scale: f64) -> Result<Self, GeometryError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GeometryError::InvalidScale(scale));
        }
        Ok(self.with_scale(scale))
    }

    /// Returns this layout showing different artwork.
    #[must_use]
    pub fn with_visual(mut self, visual: VisualState) -> Self {
        self.visual = visual;
        self
    }

    /// Checks that the screen size is finite and non-negative.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let Size { width, height } = self.screen;
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(GeometryError::InvalidScreen { width, height });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(GeometryError::InvalidScale(self.scale));
        }
        Ok(())
    }

    /// Horizontal midpoint of the screen.
    #[must_use]
    pub fn midpoint_x(&self) -> f64 {
        self.screen.width / 2.0
    }
}
