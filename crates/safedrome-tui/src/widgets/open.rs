//! Open page: pick a file from the catalog.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use safedrome_app::state::{Focus, OpenViewState};
use safedrome_core::FileEntry;

use crate::theme::palette;

pub struct Open<'a> {
    view: &'a OpenViewState,
    files: &'a [FileEntry],
    focus: Focus,
}

impl<'a> Open<'a> {
    pub fn new(view: &'a OpenViewState, files: &'a [FileEntry], focus: Focus) -> Self {
        Self { view, files, focus }
    }
}

impl Widget for Open<'_> {
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
                " Open File ",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let mut lines = vec![Line::from("")];
        for (idx, file) in self.files.iter().enumerate() {
            let is_cursor = focused && idx == self.view.cursor;
            let is_selected = self.view.selected == Some(idx);

            let mark = if is_selected { "●" } else { " " };
            let style = if is_cursor {
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::HOVER_BG)
            } else if is_selected {
                Style::default().fg(palette::ACCENT)
            } else {
                Style::default().fg(palette::TEXT_MUTED)
            };

            lines.push(Line::from(Span::styled(
                format!(
                    " {mark} {} {}  {} · {}",
                    file.kind.icon(),
                    file.name,
                    file.size,
                    file.modified
                ),
                style,
            )));
        }
        Paragraph::new(lines).block(block).render(rows[0], buf);

        let hint = match self.view.selected.and_then(|idx| self.files.get(idx)) {
            Some(file) => format!(
                " Selected: {} ({}) · Enter/o open · c cancel",
                file.name, file.size
            ),
            None => " ↑/↓ browse · Enter select · c cancel".to_string(),
        };
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(palette::TEXT_MUTED),
        )))
        .render(rows[1], buf);
    }
}
