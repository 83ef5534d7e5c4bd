//! Key binding help: one short line, or columns of bindings

use dockertui_app::keymap::KeyBinding;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

const SHORT_SEPARATOR: &str = " • ";
const COLUMN_SEPARATOR: &str = "    ";
const ELLIPSIS: &str = "…";

/// Help panel. The first line of `area` is left blank as a gap.
pub struct HelpView<'a> {
    short: Vec<&'a KeyBinding>,
    full: Vec<Vec<&'a KeyBinding>>,
    show_full: bool,
}

impl<'a> HelpView<'a> {
    pub fn short(bindings: Vec<&'a KeyBinding>) -> Self {
        Self {
            short: bindings,
            full: Vec::new(),
            show_full: false,
        }
    }

    pub fn full(groups: Vec<Vec<&'a KeyBinding>>) -> Self {
        Self {
            short: Vec::new(),
            full: groups,
            show_full: true,
        }
    }

    fn short_line(&self, width: usize) -> Line<'a> {
        let mut spans = Vec::new();
        let mut used = 0;

        for (i, binding) in self.short.iter().enumerate() {
            let sep = if i == 0 { "" } else { SHORT_SEPARATOR };
            let entry = sep.width() + binding.help_key().width() + 1 + binding.help_desc().width();

            if used + entry > width {
                if used + SHORT_SEPARATOR.width() + ELLIPSIS.width() <= width {
                    spans.push(Span::styled(SHORT_SEPARATOR, styles::help_separator()));
                    spans.push(Span::styled(ELLIPSIS, styles::help_separator()));
                }
                break;
            }

            if !sep.is_empty() {
                spans.push(Span::styled(sep, styles::help_separator()));
            }
            spans.push(Span::styled(binding.help_key(), styles::help_key()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(binding.help_desc(), styles::help_desc()));
            used += entry;
        }

        Line::from(spans)
    }

    fn full_lines(&self, width: usize, max_rows: usize) -> Vec<Line<'a>> {
        let rows = self
            .full
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .min(max_rows);
        let mut lines: Vec<Vec<Span<'a>>> = vec![Vec::new(); rows];
        let mut used = 0;

        for (i, group) in self.full.iter().enumerate() {
            let key_width = group.iter().map(|b| b.help_key().width()).max().unwrap_or(0);
            let desc_width = group.iter().map(|b| b.help_desc().width()).max().unwrap_or(0);
            let sep = if i == 0 { 0 } else { COLUMN_SEPARATOR.width() };
            let column = sep + key_width + 1 + desc_width;

            if used + column > width {
                break;
            }
            used += column;

            for (row, spans) in lines.iter_mut().enumerate() {
                if sep > 0 {
                    spans.push(Span::raw(COLUMN_SEPARATOR));
                }
                match group.get(row) {
                    Some(binding) => {
                        spans.push(Span::styled(
                            pad(binding.help_key(), key_width),
                            styles::help_key(),
                        ));
                        spans.push(Span::raw(" "));
                        spans.push(Span::styled(
                            pad(binding.help_desc(), desc_width),
                            styles::help_desc(),
                        ));
                    }
                    None => spans.push(Span::raw(" ".repeat(key_width + 1 + desc_width))),
                }
            }
        }

        lines.into_iter().map(Line::from).collect()
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

impl Widget for HelpView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width == 0 {
            return;
        }

        let width = usize::from(area.width);
        let max_rows = usize::from(area.height - 1);
        let lines = if self.show_full {
            self.full_lines(width, max_rows)
        } else {
            vec![self.short_line(width)]
        };

        for (offset, line) in lines.into_iter().enumerate().take(max_rows) {
            let y = area.y + 1 + offset as u16;
            line.render(Rect { y, height: 1, ..area }, buf);
        }
    }
}
