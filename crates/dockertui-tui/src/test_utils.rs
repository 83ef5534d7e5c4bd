//! Test utilities for TUI rendering verification
//!
//! Widgets and the full view are rendered into ratatui's TestBackend and
//! checked as plain text.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(TitleBar::new(&state.list), term.area());
//! assert!(term.buffer_contains("Docker containers (all)"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Narrow terminal for truncation tests
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Wrapper around a `Terminal<TestBackend>` with text assertions
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 40x12
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.terminal.backend().buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.terminal.backend().buffer(), line).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&Cell> {
        self.terminal.backend().buffer().cell((x, y))
    }

    /// Whole buffer as text, one line per row
    pub fn content(&self) -> String {
        buffer_to_string(self.terminal.backend().buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| get_line_content(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn get_line_content(buffer: &Buffer, y: u16) -> String {
    if y >= buffer.area.height {
        return String::new();
    }
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, 80, 24));
        assert_eq!(TestTerminal::compact().area(), Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::new();
        term.render_widget(Line::from("hello"), Rect::new(0, 2, 80, 1));
        assert!(term.line_contains(2, "hello"));
        assert!(!term.line_contains(0, "hello"));
        assert!(!term.line_contains(99, "hello"));
    }

    #[test]
    fn test_cell_at() {
        let mut term = TestTerminal::new();
        term.render_widget(Line::from("x"), term.area());
        assert_eq!(term.cell_at(0, 0).map(Cell::symbol), Some("x"));
        assert!(term.cell_at(200, 0).is_none());
    }
}
