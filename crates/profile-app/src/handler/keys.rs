//! Key event handlers for different UI modes

use crate::editing::{EditingState, SectionId};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::sections::FieldKind;
use crate::state::AppState;

/// Convert key events to messages based on the editing state
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.editing() {
        EditingState::NoSectionEditing => handle_key_browse(state, key),
        EditingState::Editing(_) => handle_key_editing(state, key),
    }
}

/// Handle key events while no section is open
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Down | InputKey::Tab | InputKey::Char('j') => Some(Message::FocusNextSection),
        InputKey::Up | InputKey::BackTab | InputKey::Char('k') => {
            Some(Message::FocusPreviousSection)
        }

        InputKey::Enter | InputKey::Char('e') => Some(Message::BeginEdit(state.focused_section)),

        // Number keys open a section directly ('1' = first card)
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            SectionId::ALL.get(index).copied().map(Message::BeginEdit)
        }

        _ => None,
    }
}

/// Handle key events while a section form is open
fn handle_key_editing(state: &AppState, key: InputKey) -> Option<Message> {
    let on_choice = state
        .controller
        .form()
        .and_then(|form| form.focused_field())
        .is_some_and(|field| matches!(field.kind, FieldKind::Choice(_)));

    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('s') => Some(Message::SubmitSection),
        InputKey::CharCtrl('u') => Some(Message::FormClearField),
        InputKey::Esc => Some(Message::CancelEdit),

        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPreviousField),

        InputKey::Right => Some(Message::FormChoiceNext),
        InputKey::Left => Some(Message::FormChoicePrevious),
        // Space selects the next option on a radio group, types elsewhere
        InputKey::Char(' ') if on_choice => Some(Message::FormChoiceNext),

        InputKey::Enter => Some(Message::FormActivate),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Char(c) => Some(Message::FormInput(c)),

        _ => None,
    }
}
