//! Page header: title and, optionally, the current location

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use profile_app::Location;

use crate::theme::{palette, styles};

pub struct PageHeader<'a> {
    location: Option<&'a Location>,
}

impl<'a> PageHeader<'a> {
    pub fn new() -> Self {
        Self { location: None }
    }

    /// Show `location` (with its query string) next to the title
    pub fn with_location(mut self, location: &'a Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl Default for PageHeader<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for PageHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled("● ", styles::status_green()),
            Span::styled("Account profile", styles::accent_bold()),
        ];
        if let Some(location) = self.location {
            spans.push(Span::styled("  ", styles::text_muted()));
            spans.push(Span::styled(location.to_string(), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
