//! Translation of window events into chart pointer events.

use dkexplorer_core::PointerEvent;
use kurbo::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

/// DOM events on the browser window that end a drag wherever the pointer
/// is released. These are the pointer events winit's web backend consumes;
/// it cancels their default action, so the mouse compatibility events may
/// never fire.
pub const GLOBAL_RELEASE_EVENTS: [&str; 2] = ["pointerup", "pointercancel"];

/// Turns raw winit input into [`PointerEvent`]s in logical points.
///
/// Mouse and touch share one pointer. Only the first active touch drives
/// the chart; additional fingers are ignored until it lifts or its press
/// is rejected with [`EventHandler::reject_press`].
#[derive(Debug, Default)]
pub struct EventHandler {
    /// Last known mouse position in logical points.
    cursor: Option<Point>,
    /// Id of the touch currently driving the pointer.
    primary_touch: Option<u64>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known mouse position in logical points.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Translate a window event. `pixels_per_point` converts physical
    /// positions into the logical points the chart layout uses.
    pub fn translate(&mut self, event: &WindowEvent, pixels_per_point: f64) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.on_cursor_moved(*position, pixels_per_point))
            }
            WindowEvent::CursorLeft { .. } => {
                // The drag keeps going; the release still arrives
                self.cursor = None;
                None
            }
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse_input(*state, *button),
            WindowEvent::Touch(touch) => {
                self.on_touch(touch.phase, touch.id, touch.location, pixels_per_point)
            }
            WindowEvent::Focused(focused) => self.on_focus(*focused),
            _ => None,
        }
    }

    /// The chart did not accept the last press. A touch that started off
    /// the chart gives up the primary slot so another finger can drive it.
    pub fn reject_press(&mut self) {
        if let Some(id) = self.primary_touch.take() {
            log::trace!("Touch {} pressed off the chart", id);
        }
    }

    fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>, pixels_per_point: f64) -> PointerEvent {
        let position = to_logical(position, pixels_per_point);
        self.cursor = Some(position);
        PointerEvent::Move { position }
    }

    fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }
        match state {
            ElementState::Pressed => self.cursor.map(|position| PointerEvent::Press { position }),
            ElementState::Released => Some(PointerEvent::Release),
        }
    }

    fn on_touch(
        &mut self,
        phase: TouchPhase,
        id: u64,
        location: PhysicalPosition<f64>,
        pixels_per_point: f64,
    ) -> Option<PointerEvent> {
        let position = to_logical(location, pixels_per_point);
        match phase {
            TouchPhase::Started => {
                if self.primary_touch.is_some() {
                    return None;
                }
                log::trace!("Primary touch {} started", id);
                self.primary_touch = Some(id);
                Some(PointerEvent::Press { position })
            }
            TouchPhase::Moved if self.primary_touch == Some(id) => {
                Some(PointerEvent::Move { position })
            }
            TouchPhase::Ended if self.primary_touch == Some(id) => {
                self.primary_touch = None;
                Some(PointerEvent::Release)
            }
            TouchPhase::Cancelled if self.primary_touch == Some(id) => {
                self.primary_touch = None;
                Some(PointerEvent::Cancel)
            }
            _ => None,
        }
    }

    fn on_focus(&mut self, focused: bool) -> Option<PointerEvent> {
        if focused {
            return None;
        }
        log::debug!("Window lost focus, cancelling pointer interaction");
        self.primary_touch = None;
        Some(PointerEvent::Cancel)
    }
}

fn to_logical(position: PhysicalPosition<f64>, pixels_per_point: f64) -> Point {
    let scale = if pixels_per_point > 0.0 { pixels_per_point } else { 1.0 };
    Point::new(position.x / scale, position.y / scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physical(x: f64, y: f64) -> PhysicalPosition<f64> {
        PhysicalPosition::new(x, y)
    }

    #[test]
    fn test_cursor_converted_to_logical_points() {
        let mut handler = EventHandler::new();
        let event = handler.on_cursor_moved(physical(200.0, 100.0), 2.0);
        assert_eq!(
            event,
            PointerEvent::Move {
                position: Point::new(100.0, 50.0)
            }
        );
        assert_eq!(handler.cursor(), Some(Point::new(100.0, 50.0)));
    }

    #[test]
    fn test_press_uses_last_cursor() {
        let mut handler = EventHandler::new();
        // No position yet
        assert_eq!(handler.on_mouse_input(ElementState::Pressed, MouseButton::Left), None);

        handler.on_cursor_moved(physical(40.0, 60.0), 1.0);
        assert_eq!(
            handler.on_mouse_input(ElementState::Pressed, MouseButton::Left),
            Some(PointerEvent::Press {
                position: Point::new(40.0, 60.0)
            })
        );
        assert_eq!(
            handler.on_mouse_input(ElementState::Released, MouseButton::Left),
            Some(PointerEvent::Release)
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut handler = EventHandler::new();
        handler.on_cursor_moved(physical(10.0, 10.0), 1.0);
        assert_eq!(handler.on_mouse_input(ElementState::Pressed, MouseButton::Right), None);
        assert_eq!(handler.on_mouse_input(ElementState::Released, MouseButton::Middle), None);
    }

    #[test]
    fn test_primary_touch_only() {
        let mut handler = EventHandler::new();
        assert_eq!(
            handler.on_touch(TouchPhase::Started, 7, physical(10.0, 20.0), 1.0),
            Some(PointerEvent::Press {
                position: Point::new(10.0, 20.0)
            })
        );

        // A second finger is ignored entirely
        assert_eq!(handler.on_touch(TouchPhase::Started, 8, physical(300.0, 20.0), 1.0), None);
        assert_eq!(handler.on_touch(TouchPhase::Moved, 8, physical(310.0, 20.0), 1.0), None);
        assert_eq!(handler.on_touch(TouchPhase::Ended, 8, physical(310.0, 20.0), 1.0), None);

        assert_eq!(
            handler.on_touch(TouchPhase::Moved, 7, physical(50.0, 20.0), 1.0),
            Some(PointerEvent::Move {
                position: Point::new(50.0, 20.0)
            })
        );
        assert_eq!(
            handler.on_touch(TouchPhase::Ended, 7, physical(50.0, 20.0), 1.0),
            Some(PointerEvent::Release)
        );

        // The next touch becomes primary
        assert!(matches!(
            handler.on_touch(TouchPhase::Started, 8, physical(60.0, 20.0), 1.0),
            Some(PointerEvent::Press { .. })
        ));
    }

    #[test]
    fn test_rejected_touch_frees_primary_slot() {
        let mut handler = EventHandler::new();
        assert!(handler.on_touch(TouchPhase::Started, 1, physical(900.0, 20.0), 1.0).is_some());
        handler.reject_press();

        // The rejected finger no longer drives anything
        assert_eq!(handler.on_touch(TouchPhase::Moved, 1, physical(910.0, 20.0), 1.0), None);
        assert_eq!(handler.on_touch(TouchPhase::Ended, 1, physical(910.0, 20.0), 1.0), None);

        // A second finger on the chart takes over
        assert_eq!(
            handler.on_touch(TouchPhase::Started, 2, physical(40.0, 20.0), 1.0),
            Some(PointerEvent::Press {
                position: Point::new(40.0, 20.0)
            })
        );
        assert_eq!(
            handler.on_touch(TouchPhase::Moved, 2, physical(60.0, 20.0), 1.0),
            Some(PointerEvent::Move {
                position: Point::new(60.0, 20.0)
            })
        );
    }

    #[test]
    fn test_rejected_mouse_press_keeps_touch() {
        let mut handler = EventHandler::new();
        handler.reject_press();
        handler.on_cursor_moved(physical(10.0, 10.0), 1.0);
        assert!(handler.on_mouse_input(ElementState::Pressed, MouseButton::Left).is_some());
    }

    #[test]
    fn test_touch_cancel() {
        let mut handler = EventHandler::new();
        handler.on_touch(TouchPhase::Started, 1, physical(0.0, 0.0), 1.0);
        assert_eq!(
            handler.on_touch(TouchPhase::Cancelled, 1, physical(0.0, 0.0), 1.0),
            Some(PointerEvent::Cancel)
        );
        assert_eq!(handler.on_touch(TouchPhase::Moved, 1, physical(5.0, 0.0), 1.0), None);
    }

    #[test]
    fn test_focus_loss_cancels() {
        let mut handler = EventHandler::new();
        handler.on_touch(TouchPhase::Started, 3, physical(0.0, 0.0), 1.0);
        assert_eq!(handler.on_focus(true), None);
        assert_eq!(handler.on_focus(false), Some(PointerEvent::Cancel));
        // Touch tracking was reset
        assert!(handler.on_touch(TouchPhase::Started, 4, physical(0.0, 0.0), 1.0).is_some());
    }

    #[test]
    fn test_global_release_uses_pointer_events() {
        assert!(GLOBAL_RELEASE_EVENTS.contains(&"pointerup"));
        assert!(GLOBAL_RELEASE_EVENTS.contains(&"pointercancel"));
        assert!(!GLOBAL_RELEASE_EVENTS.iter().any(|name| name.starts_with("mouse")));
    }

    #[test]
    fn test_invalid_scale_treated_as_one() {
        assert_eq!(to_logical(physical(12.0, 8.0), 0.0), Point::new(12.0, 8.0));
    }
}
