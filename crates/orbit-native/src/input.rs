use glam::Vec2;
use orbit_core::{TouchEvent, TouchKind};
use winit::event::{ElementState, MouseButton, TouchPhase};

/// Translates winit touch and mouse input into drag tracker events.
///
/// Only the finger from the latest `Started` is followed; a new finger takes
/// over the drag. The left mouse button stands in for a finger only while no
/// finger is down.
#[derive(Default, Debug)]
pub struct HostInput {
    finger: Option<u64>,
    mouse_down: bool,
    cursor: Vec2,
}

impl HostInput {
    pub fn on_touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) -> Option<TouchEvent> {
        let kind = match phase {
            TouchPhase::Started => {
                if let Some(prev) = self.finger.replace(id) {
                    log::debug!("[input] finger {} replaces {}", id, prev);
                }
                self.mouse_down = false;
                TouchKind::Press
            }
            _ if self.finger != Some(id) => return None,
            TouchPhase::Moved => TouchKind::Move,
            TouchPhase::Ended => {
                self.finger = None;
                TouchKind::Release
            }
            TouchPhase::Cancelled => {
                self.finger = None;
                TouchKind::Cancel
            }
        };
        Some(TouchEvent::new(kind, x as f32, y as f32))
    }

    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> Option<TouchEvent> {
        self.cursor = Vec2::new(x as f32, y as f32);
        (self.mouse_down && self.finger.is_none())
            .then(|| TouchEvent::moved(self.cursor.x, self.cursor.y))
    }

    pub fn on_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<TouchEvent> {
        if button != MouseButton::Left || self.finger.is_some() {
            return None;
        }
        match state {
            ElementState::Pressed => {
                self.mouse_down = true;
                Some(TouchEvent::press(self.cursor.x, self.cursor.y))
            }
            ElementState::Released if self.mouse_down => {
                self.mouse_down = false;
                Some(TouchEvent::release(self.cursor.x, self.cursor.y))
            }
            ElementState::Released => None,
        }
    }

    /// Cursor left the window while the button was held.
    pub fn on_cursor_left(&mut self) -> Option<TouchEvent> {
        if !self.mouse_down || self.finger.is_some() {
            return None;
        }
        self.mouse_down = false;
        Some(TouchEvent::cancel(self.cursor.x, self.cursor.y))
    }
}
