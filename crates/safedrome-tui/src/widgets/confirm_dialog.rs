//! Generic confirm dialog with a horizontal option row.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use safedrome_app::state::ConfirmDialogState;

use crate::theme::palette;
use crate::widgets::modal;

pub struct ConfirmDialog<'a> {
    dialog: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(dialog: &'a ConfirmDialogState) -> Self {
        Self { dialog }
    }

    fn option_row(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (idx, (label, _)) in self.dialog.options.iter().enumerate() {
            let style = if idx == self.dialog.selected {
                Style::default()
                    .fg(palette::DEEPEST_BG)
                    .bg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::HOVER_BG)
            };
            spans.push(Span::styled(format!(" {label} "), style));
            if idx + 1 < self.dialog.options.len() {
                spans.push(Span::raw("  "));
            }
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal::dim_background(buf, area);

        // Wide enough for the message and the option row, within limits
        let options_width: usize = self
            .dialog
            .options
            .iter()
            .map(|(label, _)| label.width() + 4)
            .sum();
        let content_width = self
            .dialog
            .message
            .width()
            .max(options_width)
            .max(self.dialog.title.width() + 2);
        let width = (content_width as u16 + 6).max(30).min(area.width);
        let rect = modal::centered_rect(width, 8, area);

        modal::render_shadow(buf, rect);
        modal::clear_area(buf, rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::STATUS_YELLOW))
            .title(Span::styled(
                format!(" {} ", self.dialog.title),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.dialog.message.clone(),
                Style::default().fg(palette::TEXT_PRIMARY),
            )),
            Line::from(""),
            self.option_row(),
            Line::from(""),
            Line::from(Span::styled(
                "←/→ choose · Enter confirm · Esc cancel",
                Style::default().fg(palette::TEXT_MUTED),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safedrome_app::message::Message;

    #[test]
    fn test_dialog_renders_title_message_and_options() {
        let dialog = ConfirmDialogState::new(
            "Unsaved Changes",
            "You have unsaved settings changes.",
            vec![
                ("Save & Close", Message::Tick),
                ("Discard Changes", Message::Tick),
                ("Cancel", Message::Tick),
            ],
        );
        let backend = ratatui::backend::TestBackend::new(70, 16);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(ConfirmDialog::new(&dialog), frame.area()))
            .unwrap();
        let out = format!("{:?}", terminal.backend().buffer());
        assert!(out.contains("Unsaved Changes"));
        assert!(out.contains("unsaved settings changes"));
        assert!(out.contains("Save & Close"));
        assert!(out.contains("Discard Changes"));
        assert!(out.contains("Cancel"));
    }
}
