//! Mirror of the editing state into the navigable state
//!
//! The location is written on every transition and read once on mount.

use crate::editing::{EditingState, SectionId};
use crate::location::{NavigableState, EDITING_SECTION_PARAM};
use crate::state::AppState;
use profile_core::prelude::*;

/// Write `editing` into `nav`: the open section's key, or no parameter.
pub fn mirror_editing(nav: &mut impl NavigableState, editing: EditingState) {
    match editing.editing_section() {
        Some(section) => nav.set(EDITING_SECTION_PARAM, section.key()),
        None => nav.delete(EDITING_SECTION_PARAM),
    }
}

/// Read the section the location asks to have open.
///
/// An unknown key is dropped from `nav` and yields `None`.
pub fn requested_section(nav: &mut impl NavigableState) -> Option<SectionId> {
    let key = nav.get(EDITING_SECTION_PARAM)?;
    match SectionId::from_key(&key) {
        Some(section) => Some(section),
        None => {
            warn!("Ignoring unknown {} '{}'", EDITING_SECTION_PARAM, key);
            nav.delete(EDITING_SECTION_PARAM);
            None
        }
    }
}

/// Restore the editing state from the location on mount.
pub fn restore_from_location(state: &mut AppState) {
    if let Some(section) = requested_section(&mut state.location) {
        info!("Restoring edit of '{}' from location", section);
        state.controller.begin_edit(section);
        state.focused_section = section;
    }
}
