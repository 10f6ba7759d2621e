//! Reusable UI components

pub mod form;
pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
