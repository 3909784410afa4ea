// SPDX-License-Identifier: GPL-3.0-only

//! Geometry derivation for the shutter button
//!
//! Every radius and position is a pure function of the control's layout size.
//! The top `extra_height` strip is reserved for the timer label; all circles
//! are centered in the remaining square area.

use crate::constants::shape;

/// Derived measurements for one layout size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Control width
    pub width: f32,
    /// Control height, including the label strip
    pub height: f32,
    /// Height reserved for the timer label
    pub extra_height: f32,
    /// Inner circle radius at rest
    pub inner_radius: f32,
    /// Outer circle radius at rest
    pub outer_radius: f32,
    /// Stroke width of the progress arc
    pub progress_bar_width: f32,
    /// Side length of the centered stop-cue square
    pub inner_square_size: f32,
}

impl Geometry {
    /// Derive all measurements from a layout size.
    ///
    /// Recomputed whenever the control's bounds change; the result is an
    /// immutable snapshot consumed by the renderer and the hit tests.
    pub fn from_size(width: f32, height: f32, extra_height: f32) -> Self {
        let half = (height - extra_height) / 2.0;
        let outer_radius = half * shape::OUTER_RADIUS_RATIO;
        let inner_radius = half * shape::INNER_RADIUS_RATIO;

        Self {
            width,
            height,
            extra_height,
            inner_radius,
            outer_radius,
            progress_bar_width: (outer_radius - inner_radius) / 2.0,
            inner_square_size: inner_radius * shape::INNER_SQUARE_RATIO,
        }
    }

    /// Center of the button circles
    pub fn center(&self) -> (f32, f32) {
        (
            self.width / 2.0,
            (self.height - self.extra_height) / 2.0 + self.extra_height,
        )
    }

    /// How far the outer radius grows during the press-scale animation
    pub fn scale_growth(&self) -> f32 {
        (self.height - self.extra_height) / 2.0 * shape::OUTER_GROWTH_RATIO
    }

    /// Bounding-box hit test against the outer circle.
    ///
    /// Kept as an axis-aligned approximation rather than a true circular
    /// distance test.
    pub fn hits_button(&self, x: f32, y: f32) -> bool {
        let (cx, cy) = self.center();
        (x - cx).abs() <= self.outer_radius && (y - cy).abs() <= self.outer_radius
    }

    /// Whether a point lies inside the full control bounds
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radii_follow_ratios() {
        let geo = Geometry::from_size(300.0, 321.0, 21.0);
        let half = (321.0 - 21.0) / 2.0;

        assert_eq!(geo.outer_radius, half * 0.7);
        assert_eq!(geo.inner_radius, half * 0.55);
        assert_eq!(
            geo.progress_bar_width,
            (geo.outer_radius - geo.inner_radius) / 2.0
        );
        assert_eq!(geo.inner_square_size, geo.inner_radius * 0.55);
    }

    #[test]
    fn test_center_accounts_for_label_strip() {
        let geo = Geometry::from_size(300.0, 321.0, 21.0);
        let (cx, cy) = geo.center();

        assert_eq!(cx, 150.0);
        assert_eq!(cy, 150.0 + 21.0);
    }

    #[test]
    fn test_hit_test_is_bounding_box() {
        let geo = Geometry::from_size(300.0, 321.0, 21.0);
        let (cx, cy) = geo.center();
        let r = geo.outer_radius;

        // A corner of the bounding box is outside the true circle but
        // still counts as a hit.
        assert!(geo.hits_button(cx + r, cy + r));
        assert!(!geo.hits_button(cx + r + 1.0, cy));
    }
}
