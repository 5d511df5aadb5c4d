use winit::event::{ElementState, MouseButton, WindowEvent};

/// Whether the left button is currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Left button held since the press at `(start_x, start_y)`.
    Dragging { start_x: i32, start_y: i32 },
}

/// Turns left-button drags into the tilt accumulator.
///
/// While dragging, every cursor move overwrites the accumulator with
/// `(y - start_y) * (x - start_x)`. Releasing the button stops updates but
/// keeps the last value, so the tilt carries on after the drag ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragRotation {
    state: DragState,
    cursor: (i32, i32),
    accumulator: i32,
}

impl DragRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a window event and update drag state.
    ///
    /// Cursor positions are taken in physical pixels, truncated.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_moved(position.x as i32, position.y as i32);
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            _ => {}
        }
    }

    /// A mouse button changed state.
    ///
    /// Only the left button drags. Button events carry no position, so a
    /// press starts at the last reported cursor position.
    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                let (x, y) = self.cursor;
                self.press(x, y);
            }
            ElementState::Released => self.release(),
        }
    }

    /// Left button pressed at `(x, y)`.
    pub fn press(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
        self.state = DragState::Dragging {
            start_x: x,
            start_y: y,
        };
    }

    /// Cursor moved to `(x, y)`.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
        if let DragState::Dragging { start_x, start_y } = self.state {
            self.accumulator = (y - start_y).wrapping_mul(x - start_x);
        }
    }

    /// Left button released.
    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }

    /// The current accumulator value.
    pub fn accumulator(&self) -> i32 {
        self.accumulator
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::DeviceId;

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: unsafe { DeviceId::dummy() },
            position: PhysicalPosition::new(x, y),
        }
    }

    #[test]
    fn starts_idle_at_zero() {
        let drag = DragRotation::new();
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.accumulator(), 0);
    }

    #[test]
    fn drag_stores_signed_cross_term() {
        let mut drag = DragRotation::new();
        drag.press(100, 100);
        drag.pointer_moved(150, 80);
        assert_eq!(drag.accumulator(), -1000);
    }

    #[test]
    fn each_move_overwrites_from_press_point() {
        let mut drag = DragRotation::new();
        drag.press(10, 20);
        drag.pointer_moved(13, 24);
        assert_eq!(drag.accumulator(), 12);
        drag.pointer_moved(5, 30);
        assert_eq!(drag.accumulator(), -50);
        drag.pointer_moved(10, 90);
        assert_eq!(drag.accumulator(), 0);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut drag = DragRotation::new();
        drag.pointer_moved(300, 400);
        assert_eq!(drag.accumulator(), 0);
    }

    #[test]
    fn release_keeps_last_value() {
        let mut drag = DragRotation::new();
        drag.press(0, 0);
        drag.pointer_moved(7, 3);
        drag.release();
        assert!(!drag.is_dragging());
        assert_eq!(drag.accumulator(), 21);

        drag.pointer_moved(200, 200);
        assert_eq!(drag.accumulator(), 21);
    }

    #[test]
    fn new_drag_measures_from_new_press() {
        let mut drag = DragRotation::new();
        drag.press(0, 0);
        drag.pointer_moved(4, 4);
        drag.release();

        drag.press(50, 50);
        assert_eq!(drag.accumulator(), 16);
        drag.pointer_moved(52, 47);
        assert_eq!(drag.accumulator(), -6);
    }

    #[test]
    fn press_records_start_point() {
        let mut drag = DragRotation::new();
        drag.press(12, 34);
        assert_eq!(
            drag.state(),
            DragState::Dragging {
                start_x: 12,
                start_y: 34
            }
        );
    }

    #[test]
    fn other_buttons_do_not_drag() {
        let mut drag = DragRotation::new();
        drag.pointer_moved(10, 10);
        drag.mouse_input(ElementState::Pressed, MouseButton::Right);
        drag.pointer_moved(30, 40);
        assert!(!drag.is_dragging());
        assert_eq!(drag.accumulator(), 0);

        drag.mouse_input(ElementState::Pressed, MouseButton::Middle);
        drag.pointer_moved(50, 60);
        assert_eq!(drag.accumulator(), 0);
    }

    #[test]
    fn left_press_starts_at_last_cursor_position() {
        let mut drag = DragRotation::new();
        drag.handle_event(&cursor_moved(100.0, 100.0));
        drag.mouse_input(ElementState::Pressed, MouseButton::Left);
        assert_eq!(
            drag.state(),
            DragState::Dragging {
                start_x: 100,
                start_y: 100
            }
        );

        drag.handle_event(&cursor_moved(150.0, 80.0));
        assert_eq!(drag.accumulator(), -1000);
    }

    #[test]
    fn left_release_stops_updates() {
        let mut drag = DragRotation::new();
        drag.handle_event(&cursor_moved(0.0, 0.0));
        drag.mouse_input(ElementState::Pressed, MouseButton::Left);
        drag.handle_event(&cursor_moved(5.0, 4.0));
        drag.mouse_input(ElementState::Released, MouseButton::Left);
        drag.handle_event(&cursor_moved(300.0, 300.0));
        assert_eq!(drag.accumulator(), 20);
    }

    #[test]
    fn right_release_keeps_left_drag() {
        let mut drag = DragRotation::new();
        drag.mouse_input(ElementState::Pressed, MouseButton::Left);
        drag.mouse_input(ElementState::Released, MouseButton::Right);
        drag.handle_event(&cursor_moved(3.0, 3.0));
        assert_eq!(drag.accumulator(), 9);
    }

    // Half of the 512 px window in each direction.
    #[test]
    fn cursor_is_measured_in_physical_pixels() {
        let mut drag = DragRotation::new();
        drag.handle_event(&cursor_moved(0.0, 0.0));
        drag.mouse_input(ElementState::Pressed, MouseButton::Left);
        drag.handle_event(&cursor_moved(256.9, 256.2));
        assert_eq!(drag.accumulator(), 65_536);
    }
}
