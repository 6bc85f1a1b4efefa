//! Pointer and touch interaction on the chart surface.
//!
//! Maps raw pointer coordinates to competence values and tracks the
//! press-drag-release lifecycle.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::geometry::ChartGeometry;

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are in the same coordinate space as the surface rectangle
/// handed to [`Interaction::set_surface`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Mouse button or touch went down.
    Press { position: Point },
    /// Pointer moved.
    Move { position: Point },
    /// Mouse button or touch went up, wherever it is.
    Release,
    /// The platform abandoned the interaction (touch cancel, focus loss).
    Cancel,
}

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Map a horizontal pointer coordinate to a competence value.
///
/// The local offset is clamped to the chart width before dividing, so the
/// result is always within `0..=100`.
pub fn map_pointer_to_competence(pointer_x: f64, surface_left: f64, geometry: &ChartGeometry) -> u8 {
    let local_x = (pointer_x - surface_left).clamp(0.0, geometry.width());
    // Saturating cast; NaN maps to 0
    (local_x / geometry.x_scale).round() as u8
}

/// Tracks the drag state and the surface the pointer is mapped against.
#[derive(Debug, Clone)]
pub struct Interaction {
    state: DragState,
    /// Surface bounds in pointer coordinates; `None` until laid out.
    surface: Option<Rect>,
    geometry: ChartGeometry,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new(ChartGeometry::default())
    }
}

impl Interaction {
    /// Create an idle interaction with no surface yet.
    pub fn new(geometry: ChartGeometry) -> Self {
        Self {
            state: DragState::Idle,
            surface: None,
            geometry,
        }
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a press-and-hold is active.
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Record the surface bounds. A zero-area rectangle counts as no surface.
    pub fn set_surface(&mut self, rect: Rect) {
        self.surface = if rect.is_zero_area() { None } else { Some(rect) };
    }

    /// Forget the surface bounds (e.g. the surface was not laid out this frame).
    pub fn clear_surface(&mut self) {
        self.surface = None;
    }

    /// The surface bounds, if known.
    pub fn surface(&self) -> Option<Rect> {
        self.surface
    }

    /// Whether `position` lies on the surface, edges included.
    pub fn is_on_surface(&self, position: Point) -> bool {
        self.surface.is_some_and(|rect| {
            position.x >= rect.x0
                && position.x <= rect.x1
                && position.y >= rect.y0
                && position.y <= rect.y1
        })
    }

    /// Process a pointer event.
    ///
    /// Returns the competence the event maps to when it should update the
    /// stored value, `None` otherwise.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<u8> {
        match event {
            PointerEvent::Press { position } => {
                if !self.is_on_surface(position) {
                    return None;
                }
                if self.state == DragState::Idle {
                    log::debug!("Drag started at {:?}", position);
                }
                self.state = DragState::Dragging;
                self.map(position)
            }
            PointerEvent::Move { position } => {
                if self.state == DragState::Dragging {
                    self.map(position)
                } else {
                    None
                }
            }
            PointerEvent::Release | PointerEvent::Cancel => {
                if self.state == DragState::Dragging {
                    log::debug!("Drag ended ({:?})", event);
                }
                self.state = DragState::Idle;
                None
            }
        }
    }

    fn map(&self, position: Point) -> Option<u8> {
        let surface = self.surface?;
        let competence = map_pointer_to_competence(position.x, surface.x0, &self.geometry);
        log::trace!("Pointer x {} -> competence {}", position.x, competence);
        Some(competence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface_at(left: f64, top: f64) -> Rect {
        Rect::new(left, top, left + 800.0, top + 300.0)
    }

    fn interaction() -> Interaction {
        let mut interaction = Interaction::default();
        interaction.set_surface(surface_at(100.0, 50.0));
        interaction
    }

    #[test]
    fn test_mapping_exact_points() {
        let geometry = ChartGeometry::new();
        assert_eq!(map_pointer_to_competence(0.0, 0.0, &geometry), 0);
        assert_eq!(map_pointer_to_competence(160.0, 0.0, &geometry), 20);
        assert_eq!(map_pointer_to_competence(360.0, 0.0, &geometry), 45);
        assert_eq!(map_pointer_to_competence(800.0, 0.0, &geometry), 100);
        assert_eq!(map_pointer_to_competence(364.0, 0.0, &geometry), 46);
        assert_eq!(map_pointer_to_competence(363.9, 0.0, &geometry), 45);
    }

    #[test]
    fn test_mapping_clamps() {
        let geometry = ChartGeometry::new();
        assert_eq!(map_pointer_to_competence(-5000.0, 0.0, &geometry), 0);
        assert_eq!(map_pointer_to_competence(5000.0, 0.0, &geometry), 100);
        assert_eq!(map_pointer_to_competence(f64::NAN, 0.0, &geometry), 0);
        assert_eq!(map_pointer_to_competence(130.0, 150.0, &geometry), 0);
    }

    #[test]
    fn test_mapping_in_range_and_monotonic() {
        let geometry = ChartGeometry::new();
        let mut previous = 0;
        let mut x = -200.0;
        while x <= 1200.0 {
            let competence = map_pointer_to_competence(x, 37.0, &geometry);
            assert!(competence <= 100);
            assert!(competence >= previous);
            previous = competence;
            x += 0.75;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_press_starts_drag_and_jumps() {
        let mut interaction = interaction();
        let result = interaction.handle_pointer_event(PointerEvent::Press {
            position: Point::new(100.0 + 160.0, 120.0),
        });
        assert_eq!(result, Some(20));
        assert!(interaction.is_dragging());
    }

    #[test]
    fn test_press_off_surface_is_ignored() {
        let mut interaction = interaction();
        let result = interaction.handle_pointer_event(PointerEvent::Press {
            position: Point::new(50.0, 120.0),
        });
        assert_eq!(result, None);
        assert_eq!(interaction.state(), DragState::Idle);
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut interaction = interaction();
        let result = interaction.handle_pointer_event(PointerEvent::Move {
            position: Point::new(500.0, 120.0),
        });
        assert_eq!(result, None);
        assert!(!interaction.is_dragging());
    }

    #[test]
    fn test_drag_release_outside() {
        let mut interaction = interaction();
        interaction.handle_pointer_event(PointerEvent::Press {
            position: Point::new(200.0, 100.0),
        });

        // Moves beyond the surface still update, clamped
        let right = interaction.handle_pointer_event(PointerEvent::Move {
            position: Point::new(2000.0, -400.0),
        });
        assert_eq!(right, Some(100));
        let left = interaction.handle_pointer_event(PointerEvent::Move {
            position: Point::new(-300.0, 900.0),
        });
        assert_eq!(left, Some(0));

        assert_eq!(interaction.handle_pointer_event(PointerEvent::Release), None);
        assert_eq!(interaction.state(), DragState::Idle);

        let after = interaction.handle_pointer_event(PointerEvent::Move {
            position: Point::new(400.0, 100.0),
        });
        assert_eq!(after, None);
    }

    #[test]
    fn test_cancel_ends_drag() {
        let mut interaction = interaction();
        interaction.handle_pointer_event(PointerEvent::Press {
            position: Point::new(300.0, 100.0),
        });
        interaction.handle_pointer_event(PointerEvent::Cancel);
        assert!(!interaction.is_dragging());
    }

    #[test]
    fn test_no_surface_is_noop() {
        let mut interaction = Interaction::default();
        let result = interaction.handle_pointer_event(PointerEvent::Press {
            position: Point::new(10.0, 10.0),
        });
        assert_eq!(result, None);
        assert!(!interaction.is_dragging());

        interaction.set_surface(Rect::new(0.0, 0.0, 0.0, 0.0));
        assert!(interaction.surface().is_none());
    }

    #[test]
    fn test_surface_lost_mid_drag() {
        let mut interaction = interaction();
        interaction.handle_pointer_event(PointerEvent::Press {
            position: Point::new(300.0, 100.0),
        });
        interaction.clear_surface();
        let result = interaction.handle_pointer_event(PointerEvent::Move {
            position: Point::new(400.0, 100.0),
        });
        assert_eq!(result, None);
        assert!(interaction.is_dragging());
    }

    #[test]
    fn test_press_on_edges() {
        let mut interaction = interaction();
        let right_edge = interaction.handle_pointer_event(PointerEvent::Press {
            position: Point::new(900.0, 350.0),
        });
        assert_eq!(right_edge, Some(100));
    }

    #[test]
    fn test_repeated_input_is_idempotent() {
        let mut interaction = interaction();
        let position = Point::new(100.0 + 333.0, 200.0);
        let first = interaction.handle_pointer_event(PointerEvent::Press { position });
        let second = interaction.handle_pointer_event(PointerEvent::Move { position });
        let third = interaction.handle_pointer_event(PointerEvent::Move { position });
        assert_eq!(first, second);
        assert_eq!(second, third);
    }
}
