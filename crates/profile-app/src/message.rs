//! Message types for the application (TEA pattern)

use crate::editing::SectionId;
use crate::input_key::InputKey;
use profile_core::AccountRecord;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Page Messages
    // ─────────────────────────────────────────────────────────
    /// Move keyboard focus to the next section card
    FocusNextSection,
    FocusPreviousSection,

    /// Open a section for editing (pre-empts any other open section)
    BeginEdit(SectionId),

    /// Close the open section without saving
    CancelEdit,

    /// Validate the open section and commit it on success
    SubmitSection,

    /// Replace the account record and close the open section
    CommitUpdate(Box<AccountRecord>),

    // ─────────────────────────────────────────────────────────
    // Form Messages (open section only)
    // ─────────────────────────────────────────────────────────
    /// Type a character into the focused text field
    FormInput(char),
    FormBackspace,
    FormClearField,
    FormNextField,
    FormPreviousField,
    /// Select the next option of the focused choice field
    FormChoiceNext,
    FormChoicePrevious,

    /// Enter on the form: Cancel button cancels, anything else submits
    FormActivate,
}
