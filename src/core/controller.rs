/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    Shift,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - level-based snapshot of held buttons
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}

/// Fixed set of held buttons, handy for driving the viewer without a window
#[derive(Debug, Clone, Default)]
pub struct HeldButtons {
    pressed: Vec<Button>,
}

impl HeldButtons {
    pub fn new(buttons: &[Button]) -> Self {
        let mut pressed = Vec::with_capacity(buttons.len());
        for &button in buttons {
            if !pressed.contains(&button) {
                pressed.push(button);
            }
        }
        Self { pressed }
    }
}

impl Controller for HeldButtons {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_debug() {
        assert_eq!(format!("{:?}", Button::KeyW), "KeyW");
        assert_eq!(format!("{:?}", Button::MouseLeft), "MouseLeft");
    }

    #[test]
    fn test_all_button_variants_unique() {
        let all_buttons = [
            Button::KeyW,
            Button::KeyA,
            Button::KeyS,
            Button::KeyD,
            Button::KeyQ,
            Button::Shift,
            Button::Escape,
            Button::MouseLeft,
            Button::MouseRight,
        ];

        let set: HashSet<_> = all_buttons.iter().collect();
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn test_held_buttons_is_down() {
        let controller = HeldButtons::new(&[Button::KeyW, Button::Shift]);

        assert!(controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::Shift));
        assert!(!controller.is_down(Button::KeyA));
    }

    #[test]
    fn test_held_buttons_dedupes() {
        let controller = HeldButtons::new(&[Button::KeyW, Button::KeyW, Button::KeyD]);
        assert_eq!(controller.pressed, vec![Button::KeyW, Button::KeyD]);
    }

    #[test]
    fn test_held_buttons_empty() {
        let controller = HeldButtons::default();

        assert!(!controller.is_down(Button::MouseLeft));
        assert!(controller.pressed.is_empty());
    }
}
