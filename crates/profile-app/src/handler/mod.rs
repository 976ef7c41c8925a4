//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for browsing and edit mode
//! - `form`: Open-form input handlers
//! - `navigation`: Mirror of the editing state into the location

pub(crate) mod form;
pub(crate) mod keys;
pub mod navigation;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use navigation::restore_from_location;
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
