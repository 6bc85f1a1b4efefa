//! Chart coordinate space shared by rendering and pointer mapping.
//!
//! Domain space is (competence, confidence) with confidence growing upwards.
//! Chart space is the 800x300 logical box the curve is drawn into, with y
//! growing downwards from the top edge.

use kurbo::{Affine, Point, Rect};
use serde::{Deserialize, Serialize};

/// Largest competence value on the horizontal axis.
pub const MAX_COMPETENCE: u8 = 100;

/// Chart units per competence unit.
pub const X_SCALE: f64 = 8.0;

/// Chart units per confidence unit.
pub const Y_SCALE: f64 = 2.5;

/// Width of the chart box. One competence step is exactly `X_SCALE` wide.
pub const CHART_WIDTH: f64 = MAX_COMPETENCE as f64 * X_SCALE;

/// Height of the chart box; also the baseline (confidence 0) offset.
pub const CHART_HEIGHT: f64 = 300.0;

/// Scale and offset between the domain and the chart box.
///
/// Both the renderer and the pointer mapper read their constants from here,
/// so a marker drawn at competence `c` sits exactly where a pointer mapped to
/// `c` lands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    /// Chart units per competence unit.
    pub x_scale: f64,
    /// Chart units per confidence unit.
    pub y_scale: f64,
    /// Baseline offset and chart height.
    pub height: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            x_scale: X_SCALE,
            y_scale: Y_SCALE,
            height: CHART_HEIGHT,
        }
    }
}

impl ChartGeometry {
    /// Create the standard 800x300 geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the chart box in chart units.
    pub fn width(&self) -> f64 {
        MAX_COMPETENCE as f64 * self.x_scale
    }

    /// The chart box, anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height)
    }

    /// Transform from domain coordinates to chart coordinates.
    pub fn transform(&self) -> Affine {
        Affine::new([self.x_scale, 0.0, 0.0, -self.y_scale, 0.0, self.height])
    }

    /// Transform from chart coordinates back to domain coordinates.
    pub fn inverse_transform(&self) -> Affine {
        self.transform().inverse()
    }

    /// Convert a (competence, confidence) pair to a chart point.
    pub fn to_chart(&self, competence: f64, confidence: f64) -> Point {
        Point::new(competence * self.x_scale, self.height - confidence * self.y_scale)
    }

    /// Convert a chart point to a (competence, confidence) domain point.
    pub fn to_domain(&self, chart_point: Point) -> Point {
        Point::new(
            chart_point.x / self.x_scale,
            (self.height - chart_point.y) / self.y_scale,
        )
    }

    /// Marker position for a competence value.
    pub fn marker_position(&self, competence: u8) -> Point {
        let x = f64::from(competence);
        self.to_chart(x, crate::curve::confidence(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_is_800_by_300() {
        let geometry = ChartGeometry::new();
        assert!((geometry.width() - 800.0).abs() < f64::EPSILON);
        assert!((geometry.height - 300.0).abs() < f64::EPSILON);
        assert_eq!(geometry.bounds(), Rect::new(0.0, 0.0, 800.0, 300.0));
        assert!((CHART_WIDTH - geometry.width()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_to_chart_scaling() {
        let geometry = ChartGeometry::new();
        let p = geometry.to_chart(20.0, 100.0);
        assert!((p.x - 160.0).abs() < f64::EPSILON);
        assert!((p.y - 50.0).abs() < f64::EPSILON);

        let origin = geometry.to_chart(0.0, 0.0);
        assert!((origin.x).abs() < f64::EPSILON);
        assert!((origin.y - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transform_matches_to_chart() {
        let geometry = ChartGeometry::new();
        let via_affine = geometry.transform() * Point::new(45.0, 25.0);
        let direct = geometry.to_chart(45.0, 25.0);
        assert!((via_affine.x - direct.x).abs() < 1e-10);
        assert!((via_affine.y - direct.y).abs() < 1e-10);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let geometry = ChartGeometry::new();
        let original = Point::new(37.0, 61.5);
        let back = geometry.to_domain(geometry.to_chart(original.x, original.y));
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);

        let inv = geometry.inverse_transform() * geometry.to_chart(original.x, original.y);
        assert!((inv.x - original.x).abs() < 1e-10);
        assert!((inv.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_marker_position() {
        let geometry = ChartGeometry::new();
        let start = geometry.marker_position(0);
        assert!((start.x).abs() < f64::EPSILON);
        assert!((start.y - 175.0).abs() < f64::EPSILON);

        let end = geometry.marker_position(100);
        assert!((end.x - 800.0).abs() < f64::EPSILON);
        assert!((end.y - (300.0 - 91.0 * 2.5)).abs() < 1e-9);
    }
}
