//! Confidence curve model and its polyline geometry.

use kurbo::{BezPath, Point};

use crate::geometry::{ChartGeometry, MAX_COMPETENCE};

/// Competence where the initial rise peaks.
pub const PEAK_COMPETENCE: f64 = 20.0;

/// Competence at the bottom of the valley.
pub const VALLEY_COMPETENCE: f64 = 45.0;

/// Number of integer samples from competence 0 to 100 inclusive.
pub const SAMPLE_COUNT: usize = MAX_COMPETENCE as usize + 1;

/// Perceived confidence for a competence value.
///
/// Three linear segments: a steep rise to the peak at 20, a steep fall to
/// the valley at 45, then a gradual rise that is unbounded above. Continuous
/// at both breakpoints (100 at 20, 25 at 45).
pub fn confidence(competence: f64) -> f64 {
    if competence < PEAK_COMPETENCE {
        50.0 + competence * 2.5
    } else if competence < VALLEY_COMPETENCE {
        100.0 - (competence - PEAK_COMPETENCE) * 3.0
    } else {
        25.0 + (competence - VALLEY_COMPETENCE) * 1.2
    }
}

/// The 101 curve samples in chart coordinates, ordered by competence.
pub fn curve_points(geometry: &ChartGeometry) -> impl Iterator<Item = Point> + '_ {
    (0..=MAX_COMPETENCE).map(move |i| {
        let x = f64::from(i);
        geometry.to_chart(x, confidence(x))
    })
}

/// Open polyline through every curve sample.
pub fn curve_path(geometry: &ChartGeometry) -> BezPath {
    let mut path = BezPath::new();
    for (i, point) in curve_points(geometry).enumerate() {
        if i == 0 {
            path.move_to(point);
        } else {
            path.line_to(point);
        }
    }
    path
}

/// Closed area under the curve, down to the baseline and back to the origin.
pub fn area_path(geometry: &ChartGeometry) -> BezPath {
    let mut path = curve_path(geometry);
    path.line_to(Point::new(geometry.width(), geometry.height));
    path.line_to(Point::new(0.0, geometry.height));
    path.close_path();
    path
}
