//! Status bar widget
//!
//! Shows the key hints for the current mode and when the record was last
//! saved.

use profile_app::{AppState, EditingState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("↑↓", "focus"),
    ("Enter", "edit"),
    ("1-2", "open"),
    ("q", "quit"),
];

const EDIT_HINTS: &[(&str, &str)] = &[
    ("Tab", "next"),
    ("←→", "choose"),
    ("Ctrl+S", "save"),
    ("Esc", "cancel"),
];

/// Status bar widget showing key hints and save status
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Line<'static> {
        let (mode, hints) = match self.state.editing() {
            EditingState::NoSectionEditing => ("BROWSE", BROWSE_HINTS),
            EditingState::Editing(_) => ("EDIT", EDIT_HINTS),
        };

        let mut spans = vec![Span::styled(format!(" {} ", mode), styles::focused_selected())];
        for (key, action) in hints {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        Line::from(spans)
    }

    /// "✓ Saved 14:03:22" once something has been saved
    fn saved_indicator(&self) -> Option<Line<'static>> {
        self.state.last_saved.map(|at| {
            Line::from(Span::styled(
                format!("✓ Saved {} ", at.format("%H:%M:%S")),
                styles::status_green(),
            ))
        })
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        Paragraph::new(self.hints()).render(area, buf);

        if let Some(saved) = self.saved_indicator() {
            // Right-aligned in its own slot so the hints stay intact
            let width = (saved.width() as u16).min(area.width);
            let slot = Rect::new(area.right() - width, area.y, width, 1);
            Paragraph::new(saved)
                .alignment(Alignment::Right)
                .render(slot, buf);
        }
    }
}
