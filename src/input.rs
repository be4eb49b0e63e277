use glam::IVec2;

use crate::traits::{Button, Controller};

/// Snapshot of the six movement keys for one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementKeys {
    /// Resolve the logical keys from physical button state.
    ///
    /// Arrow keys plus Home/End are the primary bindings; WASD with
    /// Space/Shift work as well.
    pub fn from_controller<C: Controller + ?Sized>(controller: &C) -> Self {
        let held = |a: Button, b: Button| controller.is_down(a) || controller.is_down(b);

        Self {
            forward: held(Button::ArrowUp, Button::KeyW),
            backward: held(Button::ArrowDown, Button::KeyS),
            strafe_left: held(Button::ArrowLeft, Button::KeyA),
            strafe_right: held(Button::ArrowRight, Button::KeyD),
            up: held(Button::Home, Button::Space),
            down: held(Button::End, Button::Shift),
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.strafe_left || self.strafe_right || self.up || self.down
    }
}

/// Per-frame input handed to [`crate::camera::CameraState::sample_input`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputSample {
    /// Pointer position at the previous sample, in window pixels
    pub previous: IVec2,
    /// Pointer position now
    pub current: IVec2,
    /// Rotation latch: true while the look button is held
    pub rotating: bool,
    pub keys: MovementKeys,
}

impl InputSample {
    pub fn new(previous: IVec2, current: IVec2, rotating: bool, keys: MovementKeys) -> Self {
        Self {
            previous,
            current,
            rotating,
            keys,
        }
    }

    /// A sample where nothing moved and nothing is held.
    pub fn idle(at: IVec2) -> Self {
        Self::new(at, at, false, MovementKeys::default())
    }

    pub fn pointer_delta(&self) -> IVec2 {
        self.current - self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Held(Vec<Button>);

    impl Controller for Held {
        fn is_down(&self, button: Button) -> bool {
            self.0.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.0
        }
    }

    #[test]
    fn arrow_and_letter_bindings_map_to_same_direction() {
        let arrows = MovementKeys::from_controller(&Held(vec![Button::ArrowUp, Button::ArrowRight]));
        let letters = MovementKeys::from_controller(&Held(vec![Button::KeyW, Button::KeyD]));

        assert_eq!(arrows, letters);
        assert!(arrows.forward && arrows.strafe_right);
        assert!(!arrows.backward && !arrows.strafe_left);
    }

    #[test]
    fn home_end_elevate() {
        let keys = MovementKeys::from_controller(&Held(vec![Button::Home, Button::End]));
        assert!(keys.up);
        assert!(keys.down);
        assert!(!keys.forward);
    }

    #[test]
    fn mouse_buttons_are_not_movement() {
        let keys = MovementKeys::from_controller(&Held(vec![Button::MouseLeft, Button::Escape]));
        assert!(!keys.any());
    }

    #[test]
    fn pointer_delta_is_current_minus_previous() {
        let sample = InputSample::new(
            IVec2::new(10, 20),
            IVec2::new(7, 26),
            true,
            MovementKeys::default(),
        );
        assert_eq!(sample.pointer_delta(), IVec2::new(-3, 6));
    }

    #[test]
    fn idle_sample_has_no_delta() {
        let sample = InputSample::idle(IVec2::new(320, 240));
        assert_eq!(sample.pointer_delta(), IVec2::ZERO);
        assert!(!sample.rotating);
        assert!(!sample.keys.any());
    }
}
