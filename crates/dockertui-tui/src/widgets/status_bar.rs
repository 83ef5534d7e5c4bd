//! Status bar: item counts, applied filter and page position

use dockertui_app::{ContainerList, FilterState};
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::theme::styles;

pub struct StatusBar<'a> {
    list: &'a ContainerList,
}

impl<'a> StatusBar<'a> {
    pub fn new(list: &'a ContainerList) -> Self {
        Self { list }
    }

    fn text(&self) -> String {
        let mut text = String::new();
        if self.list.filter_state() == FilterState::FilterApplied {
            text.push_str(&format!("“{}” ", self.list.filter_text()));
        }
        text.push_str(&self.list.status_bar_text());

        let pages = self.list.total_pages();
        if pages > 1 {
            text.push_str(&format!(" • page {}/{}", self.list.page() + 1, pages));
        }
        text
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let style = if self.list.visible_len() == 0 {
            styles::status_empty()
        } else {
            styles::status_bar()
        };
        Line::styled(self.text(), style).render(Rect { height: 1, ..area }, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use dockertui_app::ListCommand;
    use dockertui_core::{rows_from_containers, RawContainer};

    fn list_with(names: &[&str]) -> ContainerList {
        let mut list = ContainerList::new("Docker containers (all)", true);
        let containers: Vec<RawContainer> = names
            .iter()
            .enumerate()
            .map(|(i, name)| RawContainer::new(format!("{:012}", i), &[*name], "running"))
            .collect();
        list.set_items(rows_from_containers(&containers));
        list
    }

    #[test]
    fn test_empty_list_shows_no_items() {
        let list = list_with(&[]);
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&list), term.area());
        assert!(term.buffer_contains("No items"));
    }

    #[test]
    fn test_item_count() {
        let list = list_with(&["/a", "/b"]);
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&list), term.area());
        assert!(term.buffer_contains("2 items"));
    }

    #[test]
    fn test_applied_filter_is_quoted() {
        let mut list = list_with(&["/web", "/db"]);
        list.apply(ListCommand::StartFilter);
        list.apply(ListCommand::FilterInput('w'));
        list.apply(ListCommand::AcceptFilter);

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&list), term.area());
        assert!(term.buffer_contains("“w”"));
        assert!(term.buffer_contains("1 filtered"));
    }

    #[test]
    fn test_page_position_when_paginated() {
        let mut list = list_with(&["/a", "/b", "/c", "/d", "/e"]);
        // title + status bar + short help leave room for two rows
        list.set_size(40, 12);

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&list), term.area());
        assert!(term.buffer_contains("page 1/3"));
    }
}
