//! Semantic style builders.
//!
//! Functions that return `Style` values for common UI patterns.

use ratatui::style::{Modifier, Style};

use super::palette;

// --- Title ---

pub fn title() -> Style {
    Style::default()
        .fg(palette::TITLE_FG)
        .bg(palette::TITLE_BG)
}

pub fn filter_prompt() -> Style {
    Style::default().fg(palette::FILTER_PROMPT)
}

pub fn filter_cursor() -> Style {
    Style::default().fg(palette::FILTER_CURSOR)
}

// --- Status ---

pub fn status_message() -> Style {
    Style::default().fg(palette::STATUS_MESSAGE)
}

pub fn status_bar() -> Style {
    Style::default().fg(palette::STATUS_BAR)
}

pub fn status_empty() -> Style {
    Style::default().fg(palette::STATUS_EMPTY)
}

// --- Rows ---

pub fn row_title(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(palette::SELECTED_TITLE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::ROW_TITLE)
    }
}

pub fn row_desc(selected: bool) -> Style {
    if selected {
        Style::default().fg(palette::SELECTED_DESC)
    } else {
        Style::default().fg(palette::ROW_DESC)
    }
}

pub fn selected_border() -> Style {
    Style::default().fg(palette::SELECTED_BORDER)
}

// --- Help ---

pub fn help_key() -> Style {
    Style::default().fg(palette::HELP_KEY)
}

pub fn help_desc() -> Style {
    Style::default().fg(palette::HELP_DESC)
}

pub fn help_separator() -> Style {
    Style::default().fg(palette::HELP_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_colors() {
        let style = title();
        assert_eq!(style.fg, Some(palette::TITLE_FG));
        assert_eq!(style.bg, Some(palette::TITLE_BG));
    }

    #[test]
    fn test_selected_row_is_bold() {
        assert!(row_title(true).add_modifier.contains(Modifier::BOLD));
        assert!(!row_title(false).add_modifier.contains(Modifier::BOLD));
    }
}
