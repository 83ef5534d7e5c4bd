//! Custom widgets for the container list screen

mod container_list;
mod help;
mod status_bar;
mod title_bar;

pub use container_list::ContainerRows;
pub use help::HelpView;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
