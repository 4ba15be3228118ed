// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use petdock_geometry::{BubbleMetrics, CenterBounds, CenterPoint, Layout};

/// Authoritative logical position of the widget.
///
/// The state owns the center point and the layout it was last fitted to.
/// Geometry is always recomputed from the metrics passed in, so there is no
/// cached bounds value to go stale.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionState {
    position: CenterPoint,
    layout: Layout,
}

impl PositionState {
    /// Places a freshly mounted widget at its initial position.
    #[must_use]
    pub fn new(metrics: &BubbleMetrics, layout: Layout) -> Self {
        Self {
            position: metrics.initial_position(&layout),
            layout,
        }
    }

    /// Current center.
    #[must_use]
    pub fn position(&self) -> CenterPoint {
        self.position
    }

    /// Layout the position was last fitted to.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Valid center range under the current layout.
    #[must_use]
    pub fn bounds(&self, metrics: &BubbleMetrics) -> CenterBounds {
        metrics.bounds(&self.layout)
    }

    /// Replaces the position.
    pub fn set(&mut self, position: CenterPoint) {
        self.position = position;
    }

    /// Replaces the position with `f(current)`.
    pub fn update(&mut self, f: impl FnOnce(CenterPoint) -> CenterPoint) {
        self.position = f(self.position);
    }

    /// Refits the position after the screen, insets, scale or artwork changed.
    ///
    /// The current position is clamped into the new bounds rather than reset,
    /// so the user's chosen side and height survive. A widget docked against
    /// an edge of the previous layout (within `edge_tolerance`) moves to the
    /// same edge of the new layout, which follows edge-offset changes when the
    /// artwork switches. Returns whether the position changed.
    pub fn apply_layout(
        &mut self,
        metrics: &BubbleMetrics,
        layout: Layout,
        edge_tolerance: f64,
    ) -> bool {
        let previous = metrics.bounds(&self.layout);
        let next = metrics.bounds(&layout);
        self.layout = layout;

        let mut fitted = next.clamp(self.position);
        if (fitted.x() - previous.min_x).abs() <= edge_tolerance {
            fitted = CenterPoint::new(next.min_x, fitted.y());
        } else if (fitted.x() - previous.max_x).abs() <= edge_tolerance {
            fitted = CenterPoint::new(next.max_x, fitted.y());
        }

        let changed = fitted != self.position;
        self.position = fitted;
        changed
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use petdock_geometry::{BubbleMetrics, CenterPoint, Layout, SafeArea, VisualState};

    use super::PositionState;

    fn portrait() -> Layout {
        Layout::new(Size::new(390.0, 844.0), SafeArea::new(47.0, 34.0, 0.0, 0.0))
    }

    fn landscape() -> Layout {
        Layout::new(Size::new(844.0, 390.0), SafeArea::new(0.0, 21.0, 47.0, 47.0))
    }

    #[test]
    fn starts_at_initial_position() {
        let metrics = BubbleMetrics::default();
        let state = PositionState::new(&metrics, portrait());
        assert_eq!(state.position(), metrics.initial_position(&portrait()));
    }

    #[test]
    fn functional_update_sees_current_value() {
        let metrics = BubbleMetrics::default();
        let mut state = PositionState::new(&metrics, portrait());
        state.set(CenterPoint::new(100.0, 200.0));
        state.update(|p| CenterPoint::new(p.x() + 1.0, p.y()));
        assert_eq!(state.position(), CenterPoint::new(101.0, 200.0));
    }

    #[test]
    fn rotation_clamps_instead_of_resetting() {
        let metrics = BubbleMetrics::default();
        let mut state = PositionState::new(&metrics, portrait());
        state.set(CenterPoint::new(200.0, 600.0));

        assert!(state.apply_layout(&metrics, landscape(), 20.0));
        let bounds = metrics.bounds(&landscape());
        // X was mid-screen and stays put; Y is pulled into the shorter screen.
        assert_eq!(state.position().x(), 200.0);
        assert_eq!(state.position().y(), bounds.max_y);
    }

    #[test]
    fn docked_widget_follows_its_edge_on_rotation() {
        let metrics = BubbleMetrics::default();
        let mut state = PositionState::new(&metrics, portrait());
        assert_eq!(state.position().x(), 344.0);

        state.apply_layout(&metrics, landscape(), 20.0);
        assert_eq!(state.position().x(), metrics.bounds(&landscape()).max_x);
    }

    #[test]
    fn artwork_change_moves_docked_widget_to_new_offset() {
        let metrics = BubbleMetrics::default();
        let mut state = PositionState::new(&metrics, portrait());
        state.set(CenterPoint::new(76.0, 300.0));

        let dying = portrait().with_visual(VisualState::new(1, true));
        assert!(state.apply_layout(&metrics, dying, 20.0));
        // stage1_dying has offset -12: left edge is 0 + 55 + 6 + 12.
        assert_eq!(state.position(), CenterPoint::new(73.0, 300.0));
    }

    #[test]
    fn undocked_widget_ignores_offset_change() {
        let metrics = BubbleMetrics::default();
        let mut state = PositionState::new(&metrics, portrait());
        state.set(CenterPoint::new(180.0, 300.0));

        let stage2 = portrait().with_visual(VisualState::new(2, false));
        assert!(!state.apply_layout(&metrics, stage2, 20.0));
        assert_eq!(state.position(), CenterPoint::new(180.0, 300.0));
        assert_eq!(state.layout(), stage2);
    }
}
