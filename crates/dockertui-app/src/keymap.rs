//! Key bindings with help text
//!
//! Three immutable registries:
//! - [`ListKeyMap`]: application-level bindings (`H`, `c`)
//! - [`DelegateKeyMap`]: bindings scoped to the selected row (`enter`)
//! - [`NavigationKeyMap`]: the list's own cursor, filter and quit bindings

use crate::input_key::InputKey;

/// A set of keys sharing one help entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    keys: Vec<InputKey>,
    help_key: &'static str,
    help_desc: &'static str,
}

impl KeyBinding {
    pub fn new(keys: Vec<InputKey>, help_key: &'static str, help_desc: &'static str) -> Self {
        Self {
            keys,
            help_key,
            help_desc,
        }
    }

    pub fn matches(&self, key: &InputKey) -> bool {
        self.keys.contains(key)
    }

    pub fn help_key(&self) -> &'static str {
        self.help_key
    }

    pub fn help_desc(&self) -> &'static str {
        self.help_desc
    }
}

/// Short and full help views of a key map
pub trait KeyMap {
    /// Bindings shown on the single help line
    fn short_help(&self) -> Vec<&KeyBinding>;

    /// Bindings shown in the expanded help, one group per column
    fn full_help(&self) -> Vec<Vec<&KeyBinding>>;
}

// ─────────────────────────────────────────────────────────────────
// List-level bindings
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ListKeyMap {
    pub toggle_help_menu: KeyBinding,
    pub toggle_all_containers: KeyBinding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            toggle_help_menu: KeyBinding::new(vec![InputKey::Char('H')], "H", "toggle help"),
            toggle_all_containers: KeyBinding::new(
                vec![InputKey::Char('c')],
                "c",
                "toggle all/running containers",
            ),
        }
    }
}

impl KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&KeyBinding> {
        Vec::new()
    }

    fn full_help(&self) -> Vec<Vec<&KeyBinding>> {
        vec![vec![&self.toggle_help_menu, &self.toggle_all_containers]]
    }
}

// ─────────────────────────────────────────────────────────────────
// Row delegate bindings
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DelegateKeyMap {
    pub choose: KeyBinding,
}

impl Default for DelegateKeyMap {
    fn default() -> Self {
        Self {
            choose: KeyBinding::new(vec![InputKey::Enter], "enter", "Start/Stop container"),
        }
    }
}

impl KeyMap for DelegateKeyMap {
    fn short_help(&self) -> Vec<&KeyBinding> {
        vec![&self.choose]
    }

    fn full_help(&self) -> Vec<Vec<&KeyBinding>> {
        vec![vec![&self.choose]]
    }
}

// ─────────────────────────────────────────────────────────────────
// List navigation bindings
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NavigationKeyMap {
    pub cursor_up: KeyBinding,
    pub cursor_down: KeyBinding,
    pub prev_page: KeyBinding,
    pub next_page: KeyBinding,
    pub go_to_start: KeyBinding,
    pub go_to_end: KeyBinding,
    pub filter: KeyBinding,
    pub clear_filter: KeyBinding,

    // While the filter query is being edited
    pub cancel_while_filtering: KeyBinding,
    pub accept_while_filtering: KeyBinding,

    pub show_full_help: KeyBinding,
    pub close_full_help: KeyBinding,
    pub quit: KeyBinding,
    pub force_quit: KeyBinding,
}

impl Default for NavigationKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: KeyBinding::new(vec![InputKey::Up, InputKey::Char('k')], "↑/k", "up"),
            cursor_down: KeyBinding::new(vec![InputKey::Down, InputKey::Char('j')], "↓/j", "down"),
            prev_page: KeyBinding::new(
                vec![InputKey::Left, InputKey::Char('h'), InputKey::PageUp],
                "←/h/pgup",
                "prev page",
            ),
            next_page: KeyBinding::new(
                vec![InputKey::Right, InputKey::Char('l'), InputKey::PageDown],
                "→/l/pgdn",
                "next page",
            ),
            go_to_start: KeyBinding::new(
                vec![InputKey::Home, InputKey::Char('g')],
                "g/home",
                "go to start",
            ),
            go_to_end: KeyBinding::new(vec![InputKey::End, InputKey::Char('G')], "G/end", "go to end"),
            filter: KeyBinding::new(vec![InputKey::Char('/')], "/", "filter"),
            clear_filter: KeyBinding::new(vec![InputKey::Esc], "esc", "clear filter"),
            cancel_while_filtering: KeyBinding::new(vec![InputKey::Esc], "esc", "cancel"),
            accept_while_filtering: KeyBinding::new(
                vec![InputKey::Enter, InputKey::Tab, InputKey::Up, InputKey::Down],
                "enter",
                "apply filter",
            ),
            show_full_help: KeyBinding::new(vec![InputKey::Char('?')], "?", "more"),
            close_full_help: KeyBinding::new(vec![InputKey::Char('?')], "?", "close help"),
            quit: KeyBinding::new(vec![InputKey::Char('q'), InputKey::Esc], "q", "quit"),
            force_quit: KeyBinding::new(vec![InputKey::CharCtrl('c')], "ctrl+c", "force quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keys() {
        let keys = ListKeyMap::default();
        assert!(keys.toggle_help_menu.matches(&InputKey::Char('H')));
        assert!(!keys.toggle_help_menu.matches(&InputKey::Char('h')));
        assert!(keys.toggle_all_containers.matches(&InputKey::Char('c')));
        assert_eq!(
            keys.toggle_all_containers.help_desc(),
            "toggle all/running containers"
        );
    }

    #[test]
    fn test_delegate_keys() {
        let keys = DelegateKeyMap::default();
        assert!(keys.choose.matches(&InputKey::Enter));
        assert_eq!(keys.choose.help_key(), "enter");
        assert_eq!(keys.choose.help_desc(), "Start/Stop container");
        assert_eq!(keys.short_help().len(), 1);
        assert_eq!(keys.full_help(), vec![vec![&keys.choose]]);
    }

    #[test]
    fn test_list_keys_only_appear_in_full_help() {
        let keys = ListKeyMap::default();
        assert!(keys.short_help().is_empty());
        assert_eq!(keys.full_help()[0].len(), 2);
    }

    #[test]
    fn test_navigation_aliases() {
        let keys = NavigationKeyMap::default();
        assert!(keys.cursor_down.matches(&InputKey::Char('j')));
        assert!(keys.cursor_down.matches(&InputKey::Down));
        assert!(keys.next_page.matches(&InputKey::PageDown));
        assert!(keys.go_to_end.matches(&InputKey::Char('G')));
        assert!(keys.force_quit.matches(&InputKey::CharCtrl('c')));
    }
}
