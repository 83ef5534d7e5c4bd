//! Screen layout definitions

use dockertui_app::list::{STATUS_BAR_HEIGHT, TITLE_HEIGHT};
use dockertui_app::state::{APP_PADDING_HORIZONTAL, APP_PADDING_VERTICAL};
use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Screen areas for the list view
pub struct ScreenAreas {
    pub title: Rect,
    pub status_bar: Rect,
    pub items: Rect,
    pub help: Rect,
}

/// The drawable area inside the app padding
pub fn padded(area: Rect) -> Rect {
    area.inner(Margin {
        horizontal: APP_PADDING_HORIZONTAL,
        vertical: APP_PADDING_VERTICAL,
    })
}

/// Split the padded area into title, status bar, rows and help
pub fn create(area: Rect, help_height: u16) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Length(STATUS_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(help_height),
    ])
    .split(area);

    ScreenAreas {
        title: chunks[0],
        status_bar: chunks[1],
        items: chunks[2],
        help: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_area() {
        let inner = padded(Rect::new(0, 0, 80, 24));
        assert_eq!(inner, Rect::new(2, 1, 76, 22));
    }

    #[test]
    fn test_layout_heights() {
        let areas = create(Rect::new(2, 1, 76, 22), 2);
        assert_eq!(areas.title.height, TITLE_HEIGHT);
        assert_eq!(areas.status_bar.height, STATUS_BAR_HEIGHT);
        assert_eq!(areas.help.height, 2);
        assert_eq!(areas.items.height, 22 - TITLE_HEIGHT - STATUS_BAR_HEIGHT - 2);
    }

    #[test]
    fn test_layout_without_help() {
        let areas = create(Rect::new(0, 0, 40, 10), 0);
        assert_eq!(areas.help.height, 0);
        assert_eq!(areas.items.height, 6);
    }
}
