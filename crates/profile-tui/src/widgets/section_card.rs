//! Section card widget
//!
//! One bordered card per editable section. The card shows the read-only
//! display of its slice of the record, or the edit form when its section is
//! the open one. While another section is open the Edit action is hidden or
//! drawn disabled, depending on `ui.edit_action_when_other_editing`.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use profile_app::config::EditActionMode;
use profile_app::sections::{self, FieldKind, FormDraft, FormFocus, SectionForm};
use profile_app::{AppState, SectionId, SectionView};

use crate::theme::{palette, styles};

/// Width of the label column in display mode
const LABEL_WIDTH: usize = 20;

const BUTTON_WIDTH: u16 = 12;

pub struct SectionCard<'a> {
    section: SectionId,
    state: &'a AppState,
}

impl<'a> SectionCard<'a> {
    pub fn new(section: SectionId, state: &'a AppState) -> Self {
        Self { section, state }
    }

    /// Rows the card needs, borders included.
    pub fn height(section: SectionId, state: &AppState) -> u16 {
        match open_form(section, state) {
            Some(form) => {
                let field_rows: u16 = form
                    .draft
                    .fields()
                    .iter()
                    .map(|field| 2 + form.errors.to_display_list(field.name).len() as u16)
                    .sum();
                // borders + fields + spacer + buttons
                2 + field_rows + 2
            }
            None => {
                let rows = sections::display_fields(section, state.controller.record()).len();
                // borders + fields + action row
                2 + rows as u16 + 1
            }
        }
    }

    fn view(&self) -> SectionView {
        self.state.controller.view_for(self.section)
    }

    fn is_focused(&self) -> bool {
        match self.view() {
            SectionView::ThisSectionEditing => true,
            SectionView::NoSectionEditing => self.state.focused_section == self.section,
            SectionView::OtherSectionEditing => false,
        }
    }

    fn render_display(&self, inner: Rect, buf: &mut Buffer) {
        let record = self.state.controller.record();
        let fields = sections::display_fields(self.section, record);

        let mut rows = Rows::new(inner);
        for field in &fields {
            let Some(area) = rows.take() else { return };
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<width$}", field.label, width = LABEL_WIDTH),
                    styles::text_secondary(),
                ),
                Span::styled(field.value.clone(), styles::text_primary()),
            ]);
            Paragraph::new(line).render(area, buf);
        }

        if let Some(area) = rows.take() {
            self.render_edit_action(area, buf);
        }
    }

    fn render_edit_action(&self, area: Rect, buf: &mut Buffer) {
        let view = self.view();
        let disabled = !view.shows_edit_action();
        if disabled
            && self.state.settings.ui.edit_action_when_other_editing == EditActionMode::Hidden
        {
            return;
        }

        let style = if disabled {
            styles::text_muted().add_modifier(Modifier::CROSSED_OUT)
        } else if self.is_focused() {
            styles::focused_selected()
        } else {
            styles::button(false)
        };

        let mut spans = vec![Span::styled(" Edit ", style)];
        if !disabled {
            spans.push(Span::styled(
                format!("  [{}]", self.section.index() + 1),
                styles::keybinding(),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_form(&self, form: &SectionForm, inner: Rect, buf: &mut Buffer) {
        let focus = form.focus();
        let mut rows = Rows::new(inner);

        for field in form.draft.fields() {
            let active = focus == FormFocus::Field(field);

            let Some(label_area) = rows.take() else { return };
            Paragraph::new(field.label)
                .style(styles::text_primary())
                .render(label_area, buf);

            let Some(input_area) = rows.take() else { return };
            let value = form.draft.value(field.name).unwrap_or_default();
            match field.kind {
                FieldKind::Text => render_input(input_area, buf, value, active),
                FieldKind::Choice(options) => {
                    render_choice(input_area, buf, options, value, active)
                }
            }

            for message in form.errors.to_display_list(field.name) {
                let Some(error_area) = rows.take() else { return };
                Paragraph::new(format!("✗ {}", message))
                    .style(styles::status_red())
                    .render(error_area, buf);
            }
        }

        rows.take(); // spacer
        if let Some(area) = rows.take() {
            let buttons = Layout::horizontal([
                Constraint::Length(BUTTON_WIDTH), // Save
                Constraint::Length(2),            // Spacing
                Constraint::Length(BUTTON_WIDTH), // Cancel
                Constraint::Min(0),
            ])
            .split(area);
            render_button(buttons[0], buf, "Save", focus == FormFocus::Save);
            render_button(buttons[2], buf, "Cancel", focus == FormFocus::Cancel);
        }
    }
}

impl Widget for SectionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let title = format!(" {} ", sections::title(self.section));
        let block = styles::glass_block(self.is_focused())
            .title(title)
            .title_style(styles::accent_bold())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        match open_form(self.section, self.state) {
            Some(form) => {
                let indicator = " editing ";
                let width = indicator.len() as u16;
                if area.width > width + 2 {
                    buf.set_string(
                        area.x + area.width - width - 1,
                        area.y,
                        indicator,
                        Style::default()
                            .fg(palette::STATUS_YELLOW)
                            .add_modifier(Modifier::ITALIC),
                    );
                }
                self.render_form(form, inner, buf);
            }
            None => self.render_display(inner, buf),
        }
    }
}

/// The open form, if it belongs to `section`.
fn open_form(section: SectionId, state: &AppState) -> Option<&SectionForm> {
    state
        .controller
        .form()
        .filter(|form| form.section() == section)
}

/// Hands out consecutive one-row areas of a card's inner area.
struct Rows {
    area: Rect,
    next_y: u16,
}

impl Rows {
    fn new(area: Rect) -> Self {
        Self {
            area,
            next_y: area.y,
        }
    }

    fn take(&mut self) -> Option<Rect> {
        if self.next_y >= self.area.y + self.area.height {
            return None;
        }
        let row = Rect::new(self.area.x, self.next_y, self.area.width, 1);
        self.next_y += 1;
        Some(row)
    }
}

fn render_input(area: Rect, buf: &mut Buffer, value: &str, active: bool) {
    // Keep the end of the value (and the cursor) in view
    let room = (area.width as usize).saturating_sub(usize::from(active));
    let visible = visible_tail(value, room);

    let display = if active {
        format!("{}|", visible)
    } else {
        visible.to_string()
    };
    let padded = format!("{:<width$}", display, width = area.width as usize);

    Paragraph::new(padded)
        .style(styles::input(active))
        .render(area, buf);
}

fn render_choice(
    area: Rect,
    buf: &mut Buffer,
    options: &[&str],
    selected: &str,
    active: bool,
) {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for option in options {
        let is_selected = *option == selected;
        let marker = if is_selected { "(•)" } else { "( )" };
        let style = match (is_selected, active) {
            (true, true) => styles::focused_selected(),
            (true, false) => styles::accent(),
            (false, _) => styles::text_secondary(),
        };
        spans.push(Span::styled(format!("{} {}", marker, option), style));
        spans.push(Span::raw("  "));
    }
    Paragraph::new(Line::from(spans)).render(area, buf);
}

fn render_button(area: Rect, buf: &mut Buffer, label: &str, active: bool) {
    let padded = format!("{:^width$}", label, width = area.width as usize);
    Paragraph::new(padded)
        .style(styles::button(active))
        .render(area, buf);
}

/// Longest suffix of `value` that fits in `width` terminal columns.
fn visible_tail(value: &str, width: usize) -> &str {
    let mut total = value.width();
    let mut start = 0;
    for c in value.chars() {
        if total <= width {
            break;
        }
        total -= c.width().unwrap_or(0);
        start += c.len_utf8();
    }
    &value[start..]
}
