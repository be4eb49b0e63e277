use std::collections::HashSet;

use glam::IVec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputSample, MovementKeys};
use crate::traits::{Button, Controller};

/// Button that latches mouse-look
pub const LOOK_BUTTON: Button = Button::MouseLeft;

/// Adapter that bridges Winit events to the Controller trait and
/// produces one [`InputSample`] per frame
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Current cursor position in whole logical pixels
    cursor: IVec2,
    /// Physical pixels per logical pixel of the window
    scale_factor: f64,
    /// Cursor position handed out by the previous sample
    last_sampled: IVec2,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            cursor: IVec2::ZERO,
            scale_factor: 1.0,
            last_sampled: IVec2::ZERO,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_button(btn, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.physical_cursor_moved(*position);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Record a cursor position in logical pixels, truncated to whole pixels
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = IVec2::new(x as i32, y as i32);
    }

    /// Record a cursor position as winit reports it, in physical pixels
    pub fn physical_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let logical = position.to_logical::<f64>(self.scale_factor);
        self.cursor_moved(logical.x, logical.y);
    }

    /// Set the window's DPI scale; non-positive or non-finite values are ignored
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 && scale_factor.is_finite() {
            self.scale_factor = scale_factor;
        }
    }

    /// Mark a button pressed or released
    pub fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    /// Drop every held button (focus loss would otherwise leave keys stuck)
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    /// Build this frame's sample.
    ///
    /// The last-seen cursor position advances whether or not the look button
    /// is held, so rotation never jumps when the button goes down again.
    pub fn sample(&mut self) -> InputSample {
        let sample = InputSample::new(
            self.last_sampled,
            self.cursor,
            self.is_down(LOOK_BUTTON),
            MovementKeys::from_controller(&*self),
        );
        self.last_sampled = self.cursor;
        sample
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            KeyCode::Home => Some(Button::Home),
            KeyCode::End => Some(Button::End),
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
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
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}
