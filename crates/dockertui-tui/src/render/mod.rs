//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use dockertui_app::AppState;
use ratatui::Frame;

use crate::layout;
use crate::widgets::{ContainerRows, HelpView, StatusBar, TitleBar};

/// Render the container list screen.
///
/// Pure function of `state`; the list's page size comes from the last
/// resize, so the layout here uses the same padding and help height.
pub fn view(frame: &mut Frame, state: &AppState) {
    let list = &state.list;
    let inner = layout::padded(frame.area());
    let areas = layout::create(inner, list.help_height());

    frame.render_widget(TitleBar::new(list), areas.title);
    frame.render_widget(StatusBar::new(list), areas.status_bar);
    frame.render_widget(ContainerRows::new(list), areas.items);

    if list.show_help() {
        let help = if list.show_full_help() {
            HelpView::full(state.full_help())
        } else {
            HelpView::short(state.short_help())
        };
        frame.render_widget(help, areas.help);
    }
}
