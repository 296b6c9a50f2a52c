//! Sidebar page switcher.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use safedrome_app::state::{Focus, Page, SIDEBAR_ENTRIES};

use crate::theme::palette;

pub struct Sidebar {
    active: Page,
    cursor: usize,
    focus: Focus,
}

impl Sidebar {
    pub fn new(active: Page, cursor: usize, focus: Focus) -> Self {
        Self {
            active,
            cursor,
            focus,
        }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Sidebar;
        let border_color = if focused {
            palette::BORDER_BRIGHT
        } else {
            palette::BORDER_DIM
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                " SafeDrome ",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let mut lines: Vec<Line> = vec![Line::from("")];
        for (idx, entry) in SIDEBAR_ENTRIES.iter().enumerate() {
            let is_active = entry.page == self.active && !entry.opens_popup;
            let is_cursor = focused && idx == self.cursor;

            let marker = if is_active { "▎" } else { " " };
            let label_style = if is_active {
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else if is_cursor {
                Style::default().fg(palette::TEXT_PRIMARY)
            } else {
                Style::default().fg(palette::TEXT_MUTED)
            };

            let mut line = Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(palette::ACCENT)),
                Span::styled(format!(" {} ", entry.icon), label_style),
                Span::styled(entry.label.to_string(), label_style),
                Span::styled(
                    format!("  {}", idx + 1),
                    Style::default().fg(palette::BORDER_BRIGHT),
                ),
            ]);
            if is_cursor {
                line = line.style(Style::default().bg(palette::HOVER_BG));
            }
            lines.push(line);
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
