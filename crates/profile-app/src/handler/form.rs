//! Open-form input handlers

use crate::handler::UpdateResult;
use crate::message::Message;
use crate::sections::{FormFocus, SectionForm};
use crate::state::AppState;
use profile_core::prelude::*;

/// Apply `edit` to the open form, if there is one.
fn with_form(state: &mut AppState, edit: impl FnOnce(&mut SectionForm)) -> UpdateResult {
    match state.controller.form_mut() {
        Some(form) => edit(form),
        None => trace!("Form input with no section open; ignoring"),
    }
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    with_form(state, |form| form.input_char(c))
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    with_form(state, SectionForm::backspace)
}

pub fn handle_clear_field(state: &mut AppState) -> UpdateResult {
    with_form(state, SectionForm::clear_field)
}

pub fn handle_next_field(state: &mut AppState) -> UpdateResult {
    with_form(state, SectionForm::focus_next)
}

pub fn handle_previous_field(state: &mut AppState) -> UpdateResult {
    with_form(state, SectionForm::focus_prev)
}

pub fn handle_cycle_choice(state: &mut AppState, forward: bool) -> UpdateResult {
    with_form(state, |form| form.cycle_choice(forward))
}

/// Enter on the form: the Cancel button cancels, everything else submits.
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    match state.controller.form().map(SectionForm::focus) {
        Some(FormFocus::Cancel) => UpdateResult::message(Message::CancelEdit),
        Some(_) => UpdateResult::message(Message::SubmitSection),
        None => UpdateResult::none(),
    }
}
