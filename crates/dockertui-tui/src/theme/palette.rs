//! Centralized color palette for the TUI.
//!
//! All color constants used across widgets should be defined here.
//! Widgets reference these via `styles` functions or directly.

use ratatui::style::Color;

// --- Title ---
pub const TITLE_FG: Color = Color::Rgb(0xFF, 0xFD, 0xF5);
pub const TITLE_BG: Color = Color::Rgb(0x00, 0x88, 0xCC);
pub const FILTER_PROMPT: Color = Color::Rgb(0xEC, 0xFD, 0x65);
pub const FILTER_CURSOR: Color = Color::Rgb(0xEE, 0x6F, 0xF8);

// --- Status ---
pub const STATUS_MESSAGE: Color = Color::Rgb(0x04, 0xB5, 0x75);
pub const STATUS_BAR: Color = Color::Rgb(0x77, 0x77, 0x77);
pub const STATUS_EMPTY: Color = Color::Rgb(0x62, 0x62, 0x62);

// --- Rows ---
pub const ROW_TITLE: Color = Color::Rgb(0xDD, 0xDD, 0xDD);
pub const ROW_DESC: Color = Color::Rgb(0x77, 0x77, 0x77);
pub const SELECTED_TITLE: Color = Color::Rgb(0xEE, 0x6F, 0xF8);
pub const SELECTED_DESC: Color = Color::Rgb(0xAD, 0x58, 0xB4);
pub const SELECTED_BORDER: Color = Color::Rgb(0xAD, 0x58, 0xB4);

// --- Help ---
pub const HELP_KEY: Color = Color::Rgb(0x90, 0x90, 0x90);
pub const HELP_DESC: Color = Color::Rgb(0x62, 0x62, 0x62);
pub const HELP_SEPARATOR: Color = Color::Rgb(0x4A, 0x4A, 0x4A);
