//! Key event routing
//!
//! Order: force quit, then the filter gate (while the query is being edited
//! every key belongs to the list), then list-level bindings, then the row
//! delegate, then list navigation.

use crate::input_key::InputKey;
use crate::list::{FilterState, ListCommand};
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on current list state
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.nav_keys.force_quit.matches(&key) {
        return Some(Message::Quit);
    }

    if state.list.setting_filter() {
        return handle_key_filtering(state, key);
    }

    let keys = &state.list_keys;
    if keys.toggle_help_menu.matches(&key) {
        return Some(Message::ToggleHelp);
    }
    if keys.toggle_all_containers.matches(&key) {
        return Some(Message::ToggleAllContainers);
    }

    if let Some(msg) = handle_key_delegate(state, &key) {
        return Some(msg);
    }

    handle_key_browsing(state, key)
}

/// Bindings that act on the selected row
fn handle_key_delegate(state: &AppState, key: &InputKey) -> Option<Message> {
    if state.list.selected_item().is_none() {
        return None;
    }
    if state.delegate_keys.choose.matches(key) {
        return Some(Message::ActivateSelected);
    }
    None
}

/// Keys while the filter query is being edited
fn handle_key_filtering(state: &AppState, key: InputKey) -> Option<Message> {
    let nav = &state.nav_keys;
    if nav.cancel_while_filtering.matches(&key) {
        return Some(Message::List(ListCommand::CancelFilter));
    }
    if nav.accept_while_filtering.matches(&key) {
        return Some(Message::List(ListCommand::AcceptFilter));
    }

    match key {
        InputKey::Backspace => Some(Message::List(ListCommand::FilterBackspace)),
        InputKey::Char(c) => Some(Message::List(ListCommand::FilterInput(c))),
        _ => None,
    }
}

/// Cursor, paging, filter and quit keys
fn handle_key_browsing(state: &AppState, key: InputKey) -> Option<Message> {
    let nav = &state.nav_keys;

    // esc clears an applied filter before it quits
    if state.list.filter_state() == FilterState::FilterApplied && nav.clear_filter.matches(&key)
    {
        return Some(Message::List(ListCommand::ClearFilter));
    }

    let command = if nav.cursor_up.matches(&key) {
        ListCommand::CursorUp
    } else if nav.cursor_down.matches(&key) {
        ListCommand::CursorDown
    } else if nav.prev_page.matches(&key) {
        ListCommand::PrevPage
    } else if nav.next_page.matches(&key) {
        ListCommand::NextPage
    } else if nav.go_to_start.matches(&key) {
        ListCommand::GoToStart
    } else if nav.go_to_end.matches(&key) {
        ListCommand::GoToEnd
    } else if nav.filter.matches(&key) {
        ListCommand::StartFilter
    } else if nav.show_full_help.matches(&key) {
        ListCommand::ToggleFullHelp
    } else if nav.quit.matches(&key) {
        return Some(Message::Quit);
    } else {
        return None;
    };

    Some(Message::List(command))
}
