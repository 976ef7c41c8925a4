//! profile-tui - Terminal UI for the profile editor
//!
//! Renders the profile page with ratatui, polls crossterm for key events and
//! drives the TEA loop from profile-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
