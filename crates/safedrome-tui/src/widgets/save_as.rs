//! Save As page: a three-field form plus the save action.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use safedrome_app::state::{Focus, SaveAsViewState, FILE_TYPES, SAVE_AS_FIELDS};

use crate::theme::palette;
use crate::widgets::form;

pub struct SaveAs<'a> {
    view: &'a SaveAsViewState,
    focus: Focus,
}

impl<'a> SaveAs<'a> {
    pub fn new(view: &'a SaveAsViewState, focus: Focus) -> Self {
        Self { view, focus }
    }
}

impl Widget for SaveAs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Content;
        let rows = Layout::vertical([Constraint::Min(4), Constraint::Length(2)]).split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused {
                palette::BORDER_BRIGHT
            } else {
                palette::BORDER_DIM
            }))
            .title(Span::styled(
                " Save As ",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let mut lines = vec![Line::from("")];

        // File Name
        let name_focused = focused && self.view.focus == 0;
        lines.push(form::field_label(SAVE_AS_FIELDS[0], name_focused));
        let name_editing = name_focused && self.view.editing;
        let name_display = if self.view.file_name.is_empty() && !name_editing {
            "Enter file name"
        } else {
            &self.view.file_name
        };
        lines.push(form::text_value(
            name_display,
            name_focused,
            name_editing,
            &self.view.edit_buffer,
        ));
        lines.push(Line::from(""));

        // File Type
        let type_focused = focused && self.view.focus == 1;
        lines.push(form::field_label(SAVE_AS_FIELDS[1], type_focused));
        let type_label = FILE_TYPES[self.view.file_type_idx % FILE_TYPES.len()].1;
        lines.push(form::choice_value(type_label, type_focused));
        lines.push(Line::from(""));

        // Location
        let loc_focused = focused && self.view.focus == 2;
        lines.push(form::field_label(SAVE_AS_FIELDS[2], loc_focused));
        let loc_editing = loc_focused && self.view.editing;
        lines.push(form::text_value(
            &self.view.location,
            loc_focused,
            loc_editing,
            &self.view.edit_buffer,
        ));
        lines.push(Line::from(""));

        // Save button reflects form validity
        let save_style = if self.view.can_save() {
            Style::default()
                .fg(palette::DEEPEST_BG)
                .bg(palette::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette::TEXT_MUTED)
                .bg(palette::HOVER_BG)
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(" 💾 Save File ", save_style),
        ]));

        Paragraph::new(lines).block(block).render(rows[0], buf);

        Paragraph::new(Line::from(Span::styled(
            " ↑/↓ field · Enter edit · ←/→ file type · s save · c cancel",
            Style::default().fg(palette::TEXT_MUTED),
        )))
        .render(rows[1], buf);
    }
}
