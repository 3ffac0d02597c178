use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};
use crate::viewer::InputEvent;

/// Adapter that bridges Winit events to the Controller trait and the viewer's
/// discrete input events
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Current cursor position in logical pixels
    cursor_position: Option<(f32, f32)>,
    /// Raw mouse motion accumulated since last reset
    mouse_delta: (f32, f32),
    scale_factor: f64,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new(scale_factor: f64) -> Self {
        Self {
            pressed_keys: HashSet::new(),
            cursor_position: None,
            mouse_delta: (0.0, 0.0),
            scale_factor,
        }
    }

    /// Update held state from a window event and translate it into a viewer event
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let button = Self::keycode_to_button(keycode)?;
                self.set_button_state(button, event.state);

                if event.state != ElementState::Pressed || event.repeat {
                    return None;
                }
                match button {
                    Button::Escape => Some(InputEvent::Quit),
                    Button::KeyQ => Some(InputEvent::ToggleUiMode),
                    _ => None,
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_button_state(btn, *state);
                }
                match state {
                    ElementState::Pressed => {
                        let (x, y) = self.cursor_position.unwrap_or((0.0, 0.0));
                        Some(InputEvent::PointerPressed { x, y })
                    }
                    ElementState::Released => Some(InputEvent::PointerReleased),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor);
                self.cursor_position = Some((logical.x, logical.y));
                Some(InputEvent::PointerMoved {
                    x: logical.x,
                    y: logical.y,
                })
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                None
            }
            WindowEvent::Focused(false) => {
                // Releases are not delivered while unfocused
                self.release_all();
                None
            }
            _ => None,
        }
    }

    /// Accumulate raw pointer motion, used for mouse-look while the cursor is captured
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse_delta.0 += delta.0 as f32;
            self.mouse_delta.1 += delta.1 as f32;
        }
    }

    /// Reset per-frame state (mouse delta)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }

    /// Get current cursor position in logical pixels (if available)
    pub fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor_position
    }

    /// Get accumulated mouse delta since last reset
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn set_button_state(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed_keys.insert(button);
            }
            ElementState::Released => {
                self.pressed_keys.remove(&button);
            }
        }
    }

    fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
