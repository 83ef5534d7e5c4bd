//! Filterable, paginated container list model
//!
//! Holds the list state the renderer draws: items, cursor, filter, help
//! visibility and the transient status message. No terminal types.

use std::time::{Duration, Instant};

use dockertui_core::ContainerRow;

use crate::fuzzy;

/// Lines used by the title row and the gap below it
pub const TITLE_HEIGHT: u16 = 2;
/// Lines used by the status bar and the gap below it
pub const STATUS_BAR_HEIGHT: u16 = 2;
/// Lines per row: title line plus description line
pub const ITEM_HEIGHT: u16 = 2;
/// Blank lines between rows
pub const ITEM_SPACING: u16 = 1;
/// Maximum lines the expanded help occupies
pub const FULL_HELP_ROWS: u16 = 6;

/// Filter axis of the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterState {
    #[default]
    Unfiltered,
    /// The query is being edited
    Filtering,
    /// A query is applied and the list shows only matches
    FilterApplied,
}

/// Operations on the list model, produced from key presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    CursorUp,
    CursorDown,
    PrevPage,
    NextPage,
    GoToStart,
    GoToEnd,
    StartFilter,
    FilterInput(char),
    FilterBackspace,
    AcceptFilter,
    CancelFilter,
    ClearFilter,
    ToggleFullHelp,
}

/// A transient line shown next to the title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ContainerList {
    items: Vec<ContainerRow>,
    title: String,

    filter_state: FilterState,
    filter_text: String,
    /// Indices into `items` matching `filter_text`
    matches: Vec<usize>,

    /// Index into the visible items
    cursor: usize,

    width: u16,
    height: u16,

    show_help: bool,
    show_full_help: bool,
    status: Option<StatusMessage>,
}

impl ContainerList {
    pub fn new(title: impl Into<String>, show_help: bool) -> Self {
        Self {
            items: Vec::new(),
            title: title.into(),
            filter_state: FilterState::Unfiltered,
            filter_text: String::new(),
            matches: Vec::new(),
            cursor: 0,
            width: 0,
            height: 0,
            show_help,
            show_full_help: false,
            status: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Items
    // ─────────────────────────────────────────────────────────

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// All items, ignoring the filter
    pub fn items(&self) -> &[ContainerRow] {
        &self.items
    }

    /// Replace every item at once. The cursor is clamped to the new list.
    pub fn set_items(&mut self, items: Vec<ContainerRow>) {
        self.items = items;
        self.update_matches();
        self.clamp_cursor();
    }

    /// Items currently shown, after filtering
    pub fn visible_items(&self) -> Vec<&ContainerRow> {
        match self.filter_state {
            FilterState::Unfiltered => self.items.iter().collect(),
            _ => self.matches.iter().map(|&i| &self.items[i]).collect(),
        }
    }

    pub fn visible_len(&self) -> usize {
        match self.filter_state {
            FilterState::Unfiltered => self.items.len(),
            _ => self.matches.len(),
        }
    }

    /// The row under the cursor, if any
    pub fn selected_item(&self) -> Option<&ContainerRow> {
        match self.filter_state {
            FilterState::Unfiltered => self.items.get(self.cursor),
            _ => self
                .matches
                .get(self.cursor)
                .and_then(|&i| self.items.get(i)),
        }
    }

    /// Cursor position within the visible items
    pub fn index(&self) -> usize {
        self.cursor
    }

    // ─────────────────────────────────────────────────────────
    // Filter
    // ─────────────────────────────────────────────────────────

    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn setting_filter(&self) -> bool {
        self.filter_state == FilterState::Filtering
    }

    pub fn is_filtered(&self) -> bool {
        self.filter_state == FilterState::FilterApplied
    }

    fn update_matches(&mut self) {
        self.matches = fuzzy::filter_indices(
            &self.filter_text,
            self.items.iter().map(ContainerRow::filter_value),
        );
    }

    fn reset_filter(&mut self) {
        self.filter_state = FilterState::Unfiltered;
        self.filter_text.clear();
        self.update_matches();
        self.clamp_cursor();
    }

    // ─────────────────────────────────────────────────────────
    // Size and pagination
    // ─────────────────────────────────────────────────────────

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Lines taken by the help panel, including the gap above it
    pub fn help_height(&self) -> u16 {
        match (self.show_help, self.show_full_help) {
            (false, _) => 0,
            (true, false) => 2,
            (true, true) => 1 + FULL_HELP_ROWS,
        }
    }

    /// Number of rows that fit on one page, at least one
    pub fn per_page(&self) -> usize {
        let chrome = TITLE_HEIGHT + STATUS_BAR_HEIGHT + self.help_height();
        let available = self.height.saturating_sub(chrome);
        usize::from(available / (ITEM_HEIGHT + ITEM_SPACING)).max(1)
    }

    pub fn page(&self) -> usize {
        self.cursor / self.per_page()
    }

    pub fn total_pages(&self) -> usize {
        self.visible_len().div_ceil(self.per_page()).max(1)
    }

    /// Range of visible item indices on the current page
    pub fn page_bounds(&self) -> (usize, usize) {
        let per_page = self.per_page();
        let start = self.page() * per_page;
        let end = (start + per_page).min(self.visible_len());
        (start.min(end), end)
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Help and status
    // ─────────────────────────────────────────────────────────

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    pub fn show_full_help(&self) -> bool {
        self.show_full_help
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    /// Show `text` until `now + lifetime`, replacing any current message
    pub fn new_status_message(&mut self, text: impl Into<String>, lifetime: Duration, now: Instant) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires_at: now + lifetime,
        });
    }

    /// Drop the status message once it has expired
    pub fn expire_status_message(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| now >= status.expires_at)
        {
            self.status = None;
        }
    }

    /// Status bar text: item count, or match counts while filtered
    pub fn status_bar_text(&self) -> String {
        let total = self.items.len();
        let visible = self.visible_len();
        let noun = |n: usize| if n == 1 { "item" } else { "items" };

        if self.filter_state == FilterState::Unfiltered || self.filter_text.is_empty() {
            if total == 0 {
                return "No items".to_string();
            }
            return format!("{} {}", total, noun(total));
        }

        if visible == 0 {
            return "Nothing matched".to_string();
        }

        let hidden = total - visible;
        if hidden > 0 {
            format!("{} {} • {} filtered", visible, noun(visible), hidden)
        } else {
            format!("{} {}", visible, noun(visible))
        }
    }

    // ─────────────────────────────────────────────────────────
    // Update
    // ─────────────────────────────────────────────────────────

    pub fn apply(&mut self, command: ListCommand) {
        match command {
            ListCommand::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            ListCommand::CursorDown => {
                if self.cursor + 1 < self.visible_len() {
                    self.cursor += 1;
                }
            }
            ListCommand::PrevPage => {
                self.cursor = self.cursor.saturating_sub(self.per_page());
            }
            ListCommand::NextPage => {
                let last = self.visible_len().saturating_sub(1);
                self.cursor = (self.cursor + self.per_page()).min(last);
            }
            ListCommand::GoToStart => {
                self.cursor = 0;
            }
            ListCommand::GoToEnd => {
                self.cursor = self.visible_len().saturating_sub(1);
            }
            ListCommand::StartFilter => {
                self.filter_state = FilterState::Filtering;
                self.update_matches();
                self.cursor = 0;
            }
            ListCommand::FilterInput(c) => {
                self.filter_text.push(c);
                self.update_matches();
                self.cursor = 0;
            }
            ListCommand::FilterBackspace => {
                self.filter_text.pop();
                self.update_matches();
                self.cursor = 0;
            }
            ListCommand::AcceptFilter => {
                if self.filter_text.is_empty() || self.matches.is_empty() {
                    self.reset_filter();
                } else {
                    self.filter_state = FilterState::FilterApplied;
                    self.clamp_cursor();
                }
            }
            ListCommand::CancelFilter | ListCommand::ClearFilter => {
                self.reset_filter();
            }
            ListCommand::ToggleFullHelp => {
                self.show_full_help = !self.show_full_help;
            }
        }
    }
}
