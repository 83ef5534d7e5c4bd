//! Container rows: two lines per container, current page only

use dockertui_app::list::{ITEM_HEIGHT, ITEM_SPACING};
use dockertui_app::ContainerList;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Renders the visible page of rows with a left bar on the selected one
pub struct ContainerRows<'a> {
    list: &'a ContainerList,
}

impl<'a> ContainerRows<'a> {
    pub fn new(list: &'a ContainerList) -> Self {
        Self { list }
    }
}

impl Widget for ContainerRows<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let (start, end) = self.list.page_bounds();
        let selected = self.list.index();
        let mut y = area.y;

        for (index, row) in self
            .list
            .visible_items()
            .into_iter()
            .enumerate()
            .skip(start)
            .take(end - start)
        {
            if y + ITEM_HEIGHT > area.bottom() {
                break;
            }

            let is_selected = index == selected;
            let gutter = if is_selected {
                Span::styled("│ ", styles::selected_border())
            } else {
                Span::raw("  ")
            };

            Line::from(vec![
                gutter.clone(),
                Span::styled(row.title.as_str(), styles::row_title(is_selected)),
            ])
            .render(Rect { y, height: 1, ..area }, buf);
            Line::from(vec![
                gutter,
                Span::styled(row.description.as_str(), styles::row_desc(is_selected)),
            ])
            .render(
                Rect {
                    y: y + 1,
                    height: 1,
                    ..area
                },
                buf,
            );

            y += ITEM_HEIGHT + ITEM_SPACING;
        }
    }
}
