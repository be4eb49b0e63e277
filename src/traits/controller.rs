/// Physical input identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Shift,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - polled button state
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_hash_duplicates() {
        let mut set = HashSet::new();
        set.insert(Button::Home);
        set.insert(Button::Home);

        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_all_button_variants_unique() {
        let all_buttons = [
            Button::ArrowUp,
            Button::ArrowDown,
            Button::ArrowLeft,
            Button::ArrowRight,
            Button::Home,
            Button::End,
            Button::KeyW,
            Button::KeyA,
            Button::KeyS,
            Button::KeyD,
            Button::Space,
            Button::Shift,
            Button::Escape,
            Button::MouseLeft,
            Button::MouseRight,
        ];

        let set: HashSet<_> = all_buttons.iter().collect();
        assert_eq!(set.len(), 15);
    }

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::ArrowUp, Button::MouseLeft],
        };

        assert!(controller.is_down(Button::ArrowUp));
        assert!(controller.is_down(Button::MouseLeft));
        assert!(!controller.is_down(Button::ArrowDown));
        assert_eq!(controller.get_down_keys().len(), 2);
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController { pressed: vec![] };

        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
    }
}
