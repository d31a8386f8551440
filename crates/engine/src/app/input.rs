use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Abstract per-frame input. Events are delivered to the scene in arrival
/// order, each exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerMoved(i32, i32),
    PointerButtonUp(PointerButton, i32, i32),
    KeyDown(Key),
}

/// Translates winit window events into the ordered event list handed to the
/// scene once per frame.
#[derive(Debug, Default)]
pub(crate) struct InputCollector {
    cursor_x: i32,
    cursor_y: i32,
    pending: Vec<InputEvent>,
}

impl InputCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn mark_quit_requested(&mut self) {
        self.pending.push(InputEvent::Quit);
    }

    pub(crate) fn set_cursor_position_px(&mut self, x: f64, y: f64) {
        self.cursor_x = x as i32;
        self.cursor_y = y as i32;
        self.pending
            .push(InputEvent::PointerMoved(self.cursor_x, self.cursor_y));
    }

    pub(crate) fn handle_mouse_input(&mut self, button: MouseButton, state: ElementState) {
        if state != ElementState::Released {
            return;
        }
        let mapped = match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            _ => return,
        };
        self.pending.push(InputEvent::PointerButtonUp(
            mapped,
            self.cursor_x,
            self.cursor_y,
        ));
    }

    pub(crate) fn handle_keyboard_input(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let key = match event.physical_key {
            PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
            _ => Key::Other,
        };
        self.pending.push(InputEvent::KeyDown(key));
    }

    /// Hands over everything collected since the previous frame.
    pub(crate) fn drain_frame_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_drained_in_arrival_order() {
        let mut collector = InputCollector::new();
        collector.set_cursor_position_px(10.0, 20.0);
        collector.handle_mouse_input(MouseButton::Left, ElementState::Released);
        collector.mark_quit_requested();

        let events = collector.drain_frame_events();
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMoved(10, 20),
                InputEvent::PointerButtonUp(PointerButton::Left, 10, 20),
                InputEvent::Quit,
            ]
        );
        assert!(collector.drain_frame_events().is_empty());
    }

    #[test]
    fn button_release_reports_last_cursor_position() {
        let mut collector = InputCollector::new();
        collector.set_cursor_position_px(5.0, 6.0);
        collector.set_cursor_position_px(50.0, 60.0);
        collector.handle_mouse_input(MouseButton::Right, ElementState::Released);

        let events = collector.drain_frame_events();
        assert_eq!(
            events.last(),
            Some(&InputEvent::PointerButtonUp(PointerButton::Right, 50, 60))
        );
    }

    #[test]
    fn presses_and_middle_button_are_ignored() {
        let mut collector = InputCollector::new();
        collector.handle_mouse_input(MouseButton::Left, ElementState::Pressed);
        collector.handle_mouse_input(MouseButton::Middle, ElementState::Released);
        assert!(collector.drain_frame_events().is_empty());
    }
}
