//! Keyboard handling for the sidebar

pub mod actions;
pub mod keymap;

pub use actions::*;
pub use keymap::bindings;
