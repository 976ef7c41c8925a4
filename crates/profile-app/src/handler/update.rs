//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use profile_core::prelude::*;

use super::{form, keys::handle_key, navigation::mirror_editing, UpdateResult};
use crate::editing::SectionId;
use profile_core::AccountRecord;

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::FocusNextSection => {
            state.focus_next_section();
            UpdateResult::none()
        }

        Message::FocusPreviousSection => {
            state.focus_previous_section();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editing State Transitions
        // ─────────────────────────────────────────────────────────
        Message::BeginEdit(section) => handle_begin_edit(state, section),
        Message::CancelEdit => handle_cancel_edit(state),
        Message::SubmitSection => handle_submit(state),
        Message::CommitUpdate(record) => handle_commit(state, *record),

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FormInput(c) => form::handle_input(state, c),
        Message::FormBackspace => form::handle_backspace(state),
        Message::FormClearField => form::handle_clear_field(state),
        Message::FormNextField => form::handle_next_field(state),
        Message::FormPreviousField => form::handle_previous_field(state),
        Message::FormChoiceNext => form::handle_cycle_choice(state, true),
        Message::FormChoicePrevious => form::handle_cycle_choice(state, false),
        Message::FormActivate => form::handle_activate(state),
    }
}

fn handle_begin_edit(state: &mut AppState, section: SectionId) -> UpdateResult {
    state.controller.begin_edit(section);
    state.focused_section = section;
    mirror_editing(&mut state.location, state.controller.editing());
    UpdateResult::none()
}

fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    state.controller.cancel_edit();
    mirror_editing(&mut state.location, state.controller.editing());
    UpdateResult::none()
}

/// Validate and commit in one step; a failed submit only updates the errors.
fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.controller.submit().is_some() {
        state.mark_saved();
        mirror_editing(&mut state.location, state.controller.editing());
    }
    UpdateResult::none()
}

fn handle_commit(state: &mut AppState, record: AccountRecord) -> UpdateResult {
    state.controller.commit_update(record);
    state.mark_saved();
    mirror_editing(&mut state.location, state.controller.editing());
    debug!("Location now {}", state.location);
    UpdateResult::none()
}
