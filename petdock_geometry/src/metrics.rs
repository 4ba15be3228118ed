// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;

use hashbrown::HashMap;
use kurbo::Vec2;

use crate::GeometryError;
use crate::bounds::{CenterBounds, TopLeftBounds};
use crate::types::{CenterPoint, Layout, TopLeftPoint, VisualState};

/// Unscaled widget edge length, in points.
pub const BASE_SIZE: f64 = 110.0;
/// Gap kept between the widget and the left/right safe-area edges.
pub const EDGE_PADDING: f64 = 6.0;
/// Gap kept below the top safe-area edge (clears the screen header).
pub const TOP_PADDING: f64 = 60.0;
/// Gap kept above the bottom safe-area edge (clears the tab bar).
pub const BOTTOM_PADDING: f64 = 100.0;
/// Initial center Y as a fraction of the screen height, below the top inset.
pub const INITIAL_TOP_FRACTION: f64 = 0.4;

/// Per-artwork horizontal edge compensation.
///
/// Each sprite bakes a different amount of transparent padding into its
/// canvas. The offset shifts the horizontal clamp boundary so the visible
/// pixels, not the canvas, sit a constant distance from the screen edge.
/// Unknown visual states resolve to `0.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeOffsets {
    table: HashMap<VisualState, f64>,
}

impl EdgeOffsets {
    /// Creates an empty table; every lookup yields `0.0`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Builds a table from textual `stage{N}_{normal|dying}` keys.
    pub fn from_keys<'a>(
        entries: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self, GeometryError> {
        let mut table = HashMap::new();
        for (key, offset) in entries {
            let visual = VisualState::parse_key(key)
                .ok_or_else(|| GeometryError::MalformedOffsetKey(key.to_string()))?;
            table.insert(visual, offset);
        }
        Ok(Self { table })
    }

    /// Returns this table with `visual` mapped to `offset`.
    #[must_use]
    pub fn with(mut self, visual: VisualState, offset: f64) -> Self {
        self.insert(visual, offset);
        self
    }

    /// Sets the offset for `visual`, returning the previous one if any.
    pub fn insert(&mut self, visual: VisualState, offset: f64) -> Option<f64> {
        self.table.insert(visual, offset)
    }

    /// Offset for `visual`, or `0.0` when the table has no entry.
    #[must_use]
    pub fn get(&self, visual: VisualState) -> f64 {
        self.table.get(&visual).copied().unwrap_or(0.0)
    }

    /// Offset for a `(stage, dying)` pair, or `0.0` when absent.
    #[must_use]
    pub fn lookup(&self, stage: u8, dying: bool) -> f64 {
        self.get(VisualState::new(stage, dying))
    }

    /// Number of configured entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no entries are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for EdgeOffsets {
    fn default() -> Self {
        Self::empty()
            .with(VisualState::new(1, false), -15.0)
            .with(VisualState::new(1, true), -12.0)
            .with(VisualState::new(2, false), -10.0)
            .with(VisualState::new(2, true), -8.0)
            .with(VisualState::new(3, false), -6.0)
            .with(VisualState::new(3, true), -4.0)
    }
}

/// Sizes and paddings that define where the widget may sit.
///
/// All geometry queries are methods on this type and take the live
/// [`Layout`] as an argument; nothing here caches screen state.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleMetrics {
    /// Unscaled widget edge length.
    pub base_size: f64,
    /// Horizontal gap to the safe-area edges.
    pub edge_padding: f64,
    /// Gap below the top safe-area edge.
    pub top_padding: f64,
    /// Gap above the bottom safe-area edge.
    pub bottom_padding: f64,
    /// Initial center Y as a fraction of the screen height.
    pub initial_top_fraction: f64,
    /// Per-artwork horizontal compensation.
    pub edge_offsets: EdgeOffsets,
}

impl Default for BubbleMetrics {
    fn default() -> Self {
        Self {
            base_size: BASE_SIZE,
            edge_padding: EDGE_PADDING,
            top_padding: TOP_PADDING,
            bottom_padding: BOTTOM_PADDING,
            initial_top_fraction: INITIAL_TOP_FRACTION,
            edge_offsets: EdgeOffsets::default(),
        }
    }
}

impl BubbleMetrics {
    /// Replaces the edge-offset table.
    #[must_use]
    pub fn with_edge_offsets(mut self, edge_offsets: EdgeOffsets) -> Self {
        self.edge_offsets = edge_offsets;
        self
    }

    /// Checks that every metric is finite and in range.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let checks = [
            ("base_size", self.base_size, self.base_size > 0.0),
            ("edge_padding", self.edge_padding, self.edge_padding >= 0.0),
            ("top_padding", self.top_padding, self.top_padding >= 0.0),
            ("bottom_padding", self.bottom_padding, self.bottom_padding >= 0.0),
            (
                "initial_top_fraction",
                self.initial_top_fraction,
                (0.0..=1.0).contains(&self.initial_top_fraction),
            ),
        ];
        for (field, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(GeometryError::InvalidMetric { field, value });
            }
        }
        Ok(())
    }

    /// Rendered edge length at `scale`.
    #[must_use]
    pub fn size(&self, scale: f64) -> f64 {
        self.base_size * scale
    }

    /// Half the rendered edge length at `scale`.
    #[must_use]
    pub fn half_size(&self, scale: f64) -> f64 {
        self.size(scale) / 2.0
    }

    /// Edge offset for `visual`, `0.0` when unknown.
    #[must_use]
    pub fn edge_offset(&self, visual: VisualState) -> f64 {
        self.edge_offsets.get(visual)
    }

    /// Valid range for the widget center.
    ///
    /// Top and bottom paddings are larger than the side padding so the
    /// widget never covers the header or the tab bar.
    #[must_use]
    pub fn bounds(&self, layout: &Layout) -> CenterBounds {
        let half = self.half_size(layout.scale);
        let offset = self.edge_offset(layout.visual);
        let insets = layout.insets;
        CenterBounds::new(
            insets.left + half + self.edge_padding - offset,
            layout.screen.width - insets.right - half - self.edge_padding - offset,
            insets.top + half + self.top_padding,
            layout.screen.height - insets.bottom - half - self.bottom_padding,
        )
    }

    /// Valid range for the widget's top-left corner.
    #[must_use]
    pub fn top_left_bounds(&self, layout: &Layout) -> TopLeftBounds {
        let size = self.size(layout.scale);
        let offset = self.edge_offset(layout.visual);
        let insets = layout.insets;
        TopLeftBounds::new(
            insets.left + self.edge_padding - offset,
            layout.screen.width - insets.right - size - self.edge_padding - offset,
            insets.top + self.top_padding,
            layout.screen.height - insets.bottom - size - self.bottom_padding,
        )
    }

    /// Where a freshly mounted widget sits: docked on the right edge, a
    /// fixed fraction of the way down the screen.
    #[must_use]
    pub fn initial_position(&self, layout: &Layout) -> CenterPoint {
        let bounds = self.bounds(layout);
        let y = layout.insets.top + layout.screen.height * self.initial_top_fraction;
        CenterPoint::new(bounds.max_x, bounds.clamp_y(y))
    }

    /// Converts a center to the top-left corner of the widget box.
    #[must_use]
    pub fn center_to_top_left(&self, center: CenterPoint, scale: f64) -> TopLeftPoint {
        let half = self.half_size(scale);
        TopLeftPoint(center.0 - Vec2::new(half, half))
    }

    /// Converts a top-left corner back to the widget center.
    #[must_use]
    pub fn top_left_to_center(&self, top_left: TopLeftPoint, scale: f64) -> CenterPoint {
        let half = self.half_size(scale);
        CenterPoint(top_left.0 + Vec2::new(half, half))
    }

    /// Center X of the nearer horizontal edge.
    ///
    /// `current_x` strictly left of the screen midpoint docks left; the
    /// midpoint itself docks right.
    #[must_use]
    pub fn edge_snap_target(&self, current_x: f64, layout: &Layout) -> f64 {
        let bounds = self.bounds(layout);
        if current_x < layout.midpoint_x() {
            bounds.min_x
        } else {
            bounds.max_x
        }
    }
}
