//! Application state (Model in TEA pattern)

use std::time::Duration;

use dockertui_core::{list_title, AppPhase, ContainerRow};

use crate::config::Settings;
use crate::keymap::{DelegateKeyMap, KeyBinding, KeyMap, ListKeyMap, NavigationKeyMap};
use crate::list::{ContainerList, FilterState};
use crate::message::Message;

/// Blank lines above and below the list
pub const APP_PADDING_VERTICAL: u16 = 1;
/// Blank columns left and right of the list
pub const APP_PADDING_HORIZONTAL: u16 = 2;

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// The container list and its widget state
    pub list: ContainerList,

    /// `true` lists every container, `false` only running ones
    pub all_containers: bool,

    pub list_keys: ListKeyMap,
    pub delegate_keys: DelegateKeyMap,
    pub nav_keys: NavigationKeyMap,

    /// Generation of the most recently requested refresh
    pub refresh_generation: u64,
    /// Generation of the refresh currently displayed
    pub applied_generation: u64,
    /// View mode the displayed rows were listed under
    pub displayed_all: bool,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let all_containers = true;
        let mut state = Self {
            phase: AppPhase::Running,
            list: ContainerList::new("", settings.ui.show_help),
            all_containers,
            list_keys: ListKeyMap::default(),
            delegate_keys: DelegateKeyMap::default(),
            nav_keys: NavigationKeyMap::default(),
            refresh_generation: 0,
            applied_generation: 0,
            displayed_all: all_containers,
            settings,
        };
        state.set_title_for_mode(all_containers);
        state
    }

    pub fn set_title_for_mode(&mut self, all: bool) {
        self.list.set_title(list_title(all));
    }

    /// Flip the view mode and ask for a refresh in the new mode
    pub fn toggle_all_containers(&mut self) -> Message {
        self.all_containers = !self.all_containers;
        self.set_title_for_mode(self.all_containers);
        Message::RefreshList
    }

    /// Replace the displayed rows wholesale
    pub fn rebuild_items(&mut self, rows: Vec<ContainerRow>) {
        self.list.set_items(rows);
    }

    /// Allocate the generation for a new refresh request
    pub fn next_refresh_generation(&mut self) -> u64 {
        self.refresh_generation += 1;
        self.refresh_generation
    }

    /// Whether a refresh result should replace the displayed list.
    ///
    /// Results for the other view mode, or older than the displayed one,
    /// are dropped.
    pub fn accepts_refresh(&self, all: bool, generation: u64) -> bool {
        all == self.all_containers && generation > self.applied_generation
    }

    /// Drop rows that were listed under the other view mode, so the title
    /// never describes rows it does not match.
    pub fn discard_rows_from_other_mode(&mut self) {
        if self.displayed_all != self.all_containers {
            self.rebuild_items(Vec::new());
            self.displayed_all = self.all_containers;
        }
    }

    pub fn status_message_lifetime(&self) -> Duration {
        Duration::from_millis(self.settings.ui.status_message_lifetime_ms)
    }

    /// Resize the list to the terminal size minus the app padding
    pub fn resize(&mut self, width: u16, height: u16) {
        self.list.set_size(
            width.saturating_sub(2 * APP_PADDING_HORIZONTAL),
            height.saturating_sub(2 * APP_PADDING_VERTICAL),
        );
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Help
    // ─────────────────────────────────────────────────────────

    /// Bindings for the single help line
    pub fn short_help(&self) -> Vec<&KeyBinding> {
        let nav = &self.nav_keys;
        if self.list.setting_filter() {
            return vec![&nav.accept_while_filtering, &nav.cancel_while_filtering];
        }

        let mut help = vec![&nav.cursor_up, &nav.cursor_down, &nav.filter];
        if self.list.filter_state() == FilterState::FilterApplied {
            help.push(&nav.clear_filter);
        }
        help.extend(self.delegate_keys.short_help());
        help.extend(self.list_keys.short_help());
        help.push(&nav.quit);
        help.push(&nav.show_full_help);
        help
    }

    /// Binding groups for the expanded help
    pub fn full_help(&self) -> Vec<Vec<&KeyBinding>> {
        let nav = &self.nav_keys;
        if self.list.setting_filter() {
            return vec![vec![
                &nav.accept_while_filtering,
                &nav.cancel_while_filtering,
            ]];
        }

        let mut groups = vec![vec![
            &nav.cursor_up,
            &nav.cursor_down,
            &nav.next_page,
            &nav.prev_page,
            &nav.go_to_start,
            &nav.go_to_end,
        ]];

        let mut filter_group = vec![&nav.filter];
        if self.list.filter_state() == FilterState::FilterApplied {
            filter_group.push(&nav.clear_filter);
        }
        groups.push(filter_group);

        groups.extend(self.delegate_keys.full_help());
        groups.extend(self.list_keys.full_help());
        groups.push(vec![&nav.quit, &nav.close_full_help]);
        groups
    }
}
