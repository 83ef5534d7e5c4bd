//! Abstract input key event, independent of terminal library.
//!
//! The TUI crate converts crossterm key events into `InputKey` at the
//! boundary, so the controller never depends on crossterm.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key, including shifted letters (`H`, `G`)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('c'), InputKey::Char('c'));
        assert_ne!(InputKey::Char('c'), InputKey::Char('C'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
