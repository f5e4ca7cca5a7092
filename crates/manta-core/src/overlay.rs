//! Address bar overlay visibility

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shortcut {
    /// Ctrl+L
    ToggleOverlay,
    /// Escape
    Dismiss,
}

impl Shortcut {
    /// Map a DOM `KeyboardEvent.key` plus Ctrl state to a shortcut
    pub fn from_key(key: &str, ctrl: bool) -> Option<Self> {
        match key {
            "l" | "L" if ctrl => Some(Shortcut::ToggleOverlay),
            "Escape" => Some(Shortcut::Dismiss),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    visible: bool,
}

impl Overlay {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Apply a shortcut and return the new visibility
    pub fn apply(&mut self, shortcut: Shortcut) -> bool {
        match shortcut {
            Shortcut::ToggleOverlay => self.visible = !self.visible,
            Shortcut::Dismiss => self.visible = false,
        }
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_mapping() {
        assert_eq!(Shortcut::from_key("l", true), Some(Shortcut::ToggleOverlay));
        assert_eq!(Shortcut::from_key("L", true), Some(Shortcut::ToggleOverlay));
        assert_eq!(Shortcut::from_key("l", false), None);
        assert_eq!(Shortcut::from_key("Escape", false), Some(Shortcut::Dismiss));
        assert_eq!(Shortcut::from_key("Escape", true), Some(Shortcut::Dismiss));
        assert_eq!(Shortcut::from_key("k", true), None);
    }

    #[test]
    fn test_toggle_and_dismiss() {
        let mut overlay = Overlay::default();
        assert!(!overlay.is_visible());

        assert!(overlay.apply(Shortcut::ToggleOverlay));
        assert!(!overlay.apply(Shortcut::ToggleOverlay));

        overlay.show();
        assert!(!overlay.apply(Shortcut::Dismiss));
        // Dismiss on a hidden overlay stays hidden
        assert!(!overlay.apply(Shortcut::Dismiss));
    }
}
