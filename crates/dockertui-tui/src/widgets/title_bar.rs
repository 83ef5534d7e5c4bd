//! Title row: list title and status message, or the filter prompt

use dockertui_app::ContainerList;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Title row of the list. Shows the filter prompt while a filter is typed.
pub struct TitleBar<'a> {
    list: &'a ContainerList,
}

impl<'a> TitleBar<'a> {
    pub fn new(list: &'a ContainerList) -> Self {
        Self { list }
    }

    fn filter_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled("Filter: ", styles::filter_prompt()),
            Span::raw(self.list.filter_text()),
            Span::styled("█", styles::filter_cursor()),
        ])
    }

    fn title_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            format!(" {} ", self.list.title()),
            styles::title(),
        )];
        if let Some(message) = self.list.status_message() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(message, styles::status_message()));
        }
        Line::from(spans)
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let row = Rect { height: 1, ..area };
        let line = if self.list.setting_filter() {
            self.filter_line()
        } else {
            self.title_line()
        };
        line.render(row, buf);
    }
}
