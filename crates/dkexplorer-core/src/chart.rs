//! Chart state: the competence value and the interaction that drives it.

use kurbo::{Line, Point, Rect};

use crate::curve::confidence;
use crate::geometry::{ChartGeometry, MAX_COMPETENCE};
use crate::interaction::{Interaction, PointerEvent};
use crate::stage::Stage;

/// Mutable state owned by one chart view.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    competence: u8,
    interaction: Interaction,
    geometry: ChartGeometry,
}

impl ChartState {
    /// Create a chart at competence 0 with the standard geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chart with a custom geometry.
    pub fn with_geometry(geometry: ChartGeometry) -> Self {
        Self {
            competence: 0,
            interaction: Interaction::new(geometry),
            geometry,
        }
    }

    pub fn competence(&self) -> u8 {
        self.competence
    }

    /// Set competence directly, clamped to `0..=100`.
    pub fn set_competence(&mut self, competence: u8) {
        self.competence = competence.min(MAX_COMPETENCE);
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    /// Record where the chart surface was laid out, in pointer coordinates.
    pub fn set_surface(&mut self, rect: Rect) {
        self.interaction.set_surface(rect);
    }

    pub fn clear_surface(&mut self) {
        self.interaction.clear_surface();
    }

    pub fn surface(&self) -> Option<Rect> {
        self.interaction.surface()
    }

    /// Whether a pointer position lies on the chart surface.
    pub fn is_on_surface(&self, position: Point) -> bool {
        self.interaction.is_on_surface(position)
    }

    /// Process a pointer event. Returns true if competence changed.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        let Some(competence) = self.interaction.handle_pointer_event(event) else {
            return false;
        };
        if competence == self.competence {
            return false;
        }

        let previous_stage = Stage::for_competence(self.competence);
        self.competence = competence;
        let stage = Stage::for_competence(competence);
        if stage != previous_stage {
            log::debug!("Stage changed: {} -> {}", previous_stage.name(), stage.name());
        }
        true
    }

    /// Derived values for the current competence.
    pub fn view(&self) -> ChartView {
        ChartView::new(self.competence, &self.geometry)
    }
}

/// Everything a frame needs, derived from competence alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartView {
    pub competence: u8,
    pub confidence: f64,
    /// Marker position in chart coordinates.
    pub marker: Point,
    pub stage: Stage,
    /// Baseline y in chart coordinates.
    baseline: f64,
}

impl ChartView {
    /// Compute the view for a competence value.
    pub fn new(competence: u8, geometry: &ChartGeometry) -> Self {
        let competence = competence.min(MAX_COMPETENCE);
        Self {
            competence,
            confidence: confidence(f64::from(competence)),
            marker: geometry.marker_position(competence),
            stage: Stage::for_competence(competence),
            baseline: geometry.height,
        }
    }

    /// Confidence rounded for display.
    pub fn confidence_percent(&self) -> i32 {
        self.confidence.round() as i32
    }

    /// Dashed guide from the marker straight down to the baseline.
    pub fn vertical_guide(&self) -> Line {
        Line::new(self.marker, Point::new(self.marker.x, self.baseline))
    }

    /// Dashed guide from the vertical axis across to the marker.
    pub fn horizontal_guide(&self) -> Line {
        Line::new(Point::new(0.0, self.marker.y), self.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_at(left: f64, top: f64) -> ChartState {
        let mut chart = ChartState::new();
        chart.set_surface(Rect::new(left, top, left + 800.0, top + 300.0));
        chart
    }

    fn press_at_local(chart: &mut ChartState, local_x: f64) -> ChartView {
        let surface = chart.surface().unwrap();
        chart.handle_pointer_event(PointerEvent::Press {
            position: Point::new(surface.x0 + local_x, surface.y0 + 10.0),
        });
        chart.view()
    }

    #[test]
    fn test_default_state() {
        let chart = ChartState::new();
        assert_eq!(chart.competence(), 0);
        assert!(!chart.is_dragging());
        let view = chart.view();
        assert!((view.confidence - 50.0).abs() < f64::EPSILON);
        assert_eq!(view.stage, Stage::MountStupid);
    }

    #[test]
    fn test_scenario_origin() {
        let mut chart = chart_at(40.0, 120.0);
        let view = press_at_local(&mut chart, 0.0);
        assert_eq!(view.competence, 0);
        assert!((view.confidence - 50.0).abs() < f64::EPSILON);
        assert_eq!(view.stage, Stage::MountStupid);
    }

    #[test]
    fn test_scenario_peak() {
        let mut chart = chart_at(40.0, 120.0);
        let view = press_at_local(&mut chart, 160.0);
        assert_eq!(view.competence, 20);
        assert!((view.confidence - 100.0).abs() < f64::EPSILON);
        assert_eq!(view.stage, Stage::MountStupid);
        assert_eq!(view.confidence_percent(), 100);
    }

    #[test]
    fn test_scenario_valley_floor() {
        let mut chart = chart_at(40.0, 120.0);
        let view = press_at_local(&mut chart, 360.0);
        assert_eq!(view.competence, 45);
        assert!((view.confidence - 25.0).abs() < f64::EPSILON);
        assert_eq!(view.stage, Stage::SlopeOfEnlightenment);
    }

    #[test]
    fn test_scenario_clamped_max() {
        let mut chart = chart_at(40.0, 120.0);
        let view = press_at_local(&mut chart, 800.0);
        assert_eq!(view.competence, 100);
        assert!((view.confidence - 91.0).abs() < 1e-9);
        assert_eq!(view.stage, Stage::PlateauOfSustainability);
        assert_eq!(view.confidence_percent(), 91);
    }

    #[test]
    fn test_drag_release_outside_scenario() {
        let mut chart = chart_at(0.0, 0.0);
        assert!(chart.handle_pointer_event(PointerEvent::Press {
            position: Point::new(80.0, 150.0),
        }));
        assert_eq!(chart.competence(), 10);
        assert!(chart.is_dragging());

        assert!(chart.handle_pointer_event(PointerEvent::Move {
            position: Point::new(1500.0, 150.0),
        }));
        assert_eq!(chart.competence(), 100);

        assert!(!chart.handle_pointer_event(PointerEvent::Release));
        assert!(!chart.is_dragging());

        assert!(!chart.handle_pointer_event(PointerEvent::Move {
            position: Point::new(200.0, 150.0),
        }));
        assert_eq!(chart.competence(), 100);
    }

    #[test]
    fn test_unchanged_competence_reports_no_change() {
        let mut chart = chart_at(0.0, 0.0);
        let position = Point::new(240.0, 100.0);
        assert!(chart.handle_pointer_event(PointerEvent::Press { position }));
        let before = chart.view();
        assert!(!chart.handle_pointer_event(PointerEvent::Move { position }));
        assert_eq!(chart.view(), before);
    }

    #[test]
    fn test_marker_tracks_competence() {
        let mut chart = ChartState::new();
        for competence in [0, 20, 45, 77, 100] {
            chart.set_competence(competence);
            let view = chart.view();
            let expected = chart.geometry().marker_position(competence);
            assert_eq!(view.marker, expected);
        }
    }

    #[test]
    fn test_set_competence_clamps() {
        let mut chart = ChartState::new();
        chart.set_competence(250);
        assert_eq!(chart.competence(), 100);
    }

    #[test]
    fn test_guides() {
        let view = ChartView::new(20, &ChartGeometry::new());
        let vertical = view.vertical_guide();
        assert_eq!(vertical.p0, Point::new(160.0, 50.0));
        assert_eq!(vertical.p1, Point::new(160.0, 300.0));

        let horizontal = view.horizontal_guide();
        assert_eq!(horizontal.p0, Point::new(0.0, 50.0));
        assert_eq!(horizontal.p1, Point::new(160.0, 50.0));
    }

    #[test]
    fn test_independent_instances() {
        let mut a = chart_at(0.0, 0.0);
        let b = chart_at(0.0, 0.0);
        a.handle_pointer_event(PointerEvent::Press {
            position: Point::new(400.0, 10.0),
        });
        assert_eq!(a.competence(), 50);
        assert_eq!(b.competence(), 0);
        assert!(!b.is_dragging());
    }
}
