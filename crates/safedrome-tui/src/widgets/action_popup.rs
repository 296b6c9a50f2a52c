//! Two-choice action popup opened from the Open and Save As sidebar entries.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use safedrome_app::state::ActionPopupState;

use crate::theme::palette;
use crate::widgets::modal;

const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 10;

/// The popup's two choices, in selection order
pub const POPUP_CHOICES: [&str; 2] = ["📂 Open File", "💾 Save As"];

pub struct ActionPopup<'a> {
    popup: &'a ActionPopupState,
}

impl<'a> ActionPopup<'a> {
    pub fn new(popup: &'a ActionPopupState) -> Self {
        Self { popup }
    }
}

impl Widget for ActionPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal::dim_background(buf, area);

        let rect = modal::centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
        modal::render_shadow(buf, rect);
        modal::clear_area(buf, rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::BORDER_BRIGHT))
            .title(Span::styled(
                " Choose Action ",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "What would you like to do?",
                Style::default().fg(palette::TEXT_MUTED),
            )),
            Line::from(""),
        ];

        for (idx, choice) in POPUP_CHOICES.iter().enumerate() {
            let selected = idx == self.popup.selected;
            let style = if selected {
                Style::default()
                    .fg(palette::DEEPEST_BG)
                    .bg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::HOVER_BG)
            };
            lines.push(Line::from(Span::styled(format!("  {choice}  "), style)));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "←/→ choose · Enter confirm · Esc close",
            Style::default().fg(palette::TEXT_MUTED),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(rect, buf);
    }
}
