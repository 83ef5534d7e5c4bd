//! Full-screen rendering tests

use super::view;
use crate::test_utils::{TestTerminal, TEST_HEIGHT, TEST_WIDTH};
use dockertui_app::handler::update;
use dockertui_app::{AppState, InputKey, Message};
use dockertui_core::RawContainer;

/// Run a message and its follow-ups; actions are not executed here
fn process(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(message) = next {
        next = update(state, message).message;
    }
}

fn sized_state() -> AppState {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::Resize {
            width: TEST_WIDTH,
            height: TEST_HEIGHT,
        },
    );
    state
}

fn list_containers(state: &mut AppState, containers: Vec<RawContainer>) {
    update(state, Message::RefreshList);
    let message = Message::ContainersListed {
        all: state.all_containers,
        generation: state.refresh_generation,
        containers,
    };
    update(state, message);
}

fn sample() -> Vec<RawContainer> {
    vec![
        RawContainer::new("aaaaaaaaaaaa0001", &["/web"], "running"),
        RawContainer::new("bbbbbbbbbbbb0002", &["/db"], "exited"),
    ]
}

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_empty_screen_layout() {
    let state = sized_state();
    let term = render(&state);

    // one line of padding above the title
    assert!(!term.line_contains(0, "Docker containers"));
    assert!(term.line_contains(1, "Docker containers (all)"));
    assert!(term.line_contains(3, "No items"));
    assert!(term.buffer_contains("? more"));
}

#[test]
fn test_title_is_indented_by_padding() {
    let state = sized_state();
    let term = render(&state);
    assert_eq!(term.cell_at(0, 1).map(|c| c.symbol()), Some(" "));
    assert_eq!(term.cell_at(1, 1).map(|c| c.symbol()), Some(" "));
}

#[test]
fn test_rows_render_below_status_bar() {
    let mut state = sized_state();
    list_containers(&mut state, sample());
    let term = render(&state);

    assert!(term.line_contains(3, "2 items"));
    assert!(term.line_contains(5, "│ /db"));
    assert!(term.line_contains(6, "bbbbbbbbbbbb exited"));
    assert!(term.line_contains(8, "/web"));
    assert!(term.line_contains(9, "aaaaaaaaaaaa running"));
}

#[test]
fn test_running_mode_title() {
    let mut state = sized_state();
    process(&mut state, Message::Key(InputKey::Char('c')));
    let term = render(&state);
    assert!(term.buffer_contains("Docker containers (running)"));
}

#[test]
fn test_help_hidden_after_toggle() {
    let mut state = sized_state();
    process(&mut state, Message::Key(InputKey::Char('H')));
    let term = render(&state);
    assert!(!term.buffer_contains("? more"));
    assert!(!term.buffer_contains("Start/Stop container"));
}

#[test]
fn test_full_help_shows_list_bindings() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::Resize {
            width: 160,
            height: TEST_HEIGHT,
        },
    );
    process(&mut state, Message::Key(InputKey::Char('?')));

    let mut term = TestTerminal::with_size(160, TEST_HEIGHT);
    term.draw_with(|frame| view(frame, &state));
    assert!(term.buffer_contains("go to start"));
    assert!(term.buffer_contains("toggle help"));
    assert!(term.buffer_contains("toggle all/running containers"));
    assert!(!term.buffer_contains("? more"));
}

#[test]
fn test_full_help_narrow_keeps_navigation_column() {
    let mut state = sized_state();
    process(&mut state, Message::Key(InputKey::Char('?')));
    let term = render(&state);
    assert!(term.buffer_contains("go to start"));
    assert!(term.buffer_contains("Start/Stop container"));
}

#[test]
fn test_status_message_after_enter() {
    let mut state = sized_state();
    list_containers(&mut state, sample());
    process(&mut state, Message::Key(InputKey::Enter));
    let term = render(&state);
    assert!(term.line_contains(1, "Starting /db"));
}

#[test]
fn test_filter_prompt_replaces_title() {
    let mut state = sized_state();
    list_containers(&mut state, sample());
    process(&mut state, Message::Key(InputKey::Char('/')));
    process(&mut state, Message::Key(InputKey::Char('w')));
    let term = render(&state);

    assert!(term.line_contains(1, "Filter: w"));
    assert!(term.buffer_contains("/web"));
    assert!(!term.buffer_contains("/db"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut state = AppState::new();
    update(&mut state, Message::Resize { width: 3, height: 2 });
    list_containers(&mut state, sample());
    let mut term = TestTerminal::with_size(3, 2);
    term.draw_with(|frame| view(frame, &state));
}
