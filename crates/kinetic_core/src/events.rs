//! Platform input events
//!
//! The widgets never talk to native views directly. The host forwards the few
//! events they care about: presses, layout measurements, text changes and key
//! presses from the hidden text field, and focus changes.

/// Layout reported by the platform for a measured view
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutEvent {
    pub width: f32,
    pub height: f32,
}

impl LayoutEvent {
    pub fn height(height: f32) -> Self {
        Self { width: 0.0, height }
    }
}

/// Key reported by a text field's key-press callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Enter,
    Char(char),
    Other,
}

impl Key {
    /// Map a platform key name (`"Backspace"`, `"Enter"`, `"7"`) to a key
    pub fn from_name(name: &str) -> Self {
        match name {
            "Backspace" => Key::Backspace,
            "Enter" => Key::Enter,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

/// A UI event delivered to a widget
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    Press,
    Layout(LayoutEvent),
    Focus,
    Blur,
    KeyPress(Key),
    TextChange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("Backspace"), Key::Backspace);
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("7"), Key::Char('7'));
        assert_eq!(Key::from_name("Shift"), Key::Other);
        assert_eq!(Key::from_name(""), Key::Other);
    }
}
