//! profile-app - Application state and orchestration for the profile editor
//!
//! Implements the TEA (The Elm Architecture) pattern over a single page of
//! editable sections: the editing-state machine, the section forms and their
//! validation, the navigable-state mirror, and configuration loading.

pub mod config;
pub mod controller;
pub mod editing;
pub mod handler;
pub mod input_key;
pub mod location;
pub mod message;
pub mod sections;
pub mod signals;
pub mod state;

// Re-export primary types
pub use controller::PageController;
pub use editing::{EditingState, SectionId, SectionView};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use location::{Location, NavigableState, EDITING_SECTION_PARAM};
pub use message::Message;
pub use state::AppState;
