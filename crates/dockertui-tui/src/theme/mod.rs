//! Colors and styles for the container list

pub mod palette;
pub mod styles;
