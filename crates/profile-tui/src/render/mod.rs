//! Main render/view function (View in TEA pattern)


use profile_app::{AppState, SectionId};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{PageHeader, SectionCard, StatusBar};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let header = if state.settings.ui.show_location {
        PageHeader::new().with_location(&state.location)
    } else {
        PageHeader::new()
    };
    frame.render_widget(header, areas.header);

    // Section cards in registry order
    let heights: Vec<u16> = SectionId::ALL
        .iter()
        .map(|&section| SectionCard::height(section, state))
        .collect();
    let cards = layout::stack_cards(areas.body, &heights);
    for (section, card_area) in SectionId::ALL.into_iter().zip(cards) {
        frame.render_widget(SectionCard::new(section, state), card_area);
    }

    frame.render_widget(StatusBar::new(state), areas.status);
}
