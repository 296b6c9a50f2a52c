//! File Manager page: toolbar, file table and selection footer.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Widget};

use safedrome_app::state::{FileManagerViewState, Focus};
use safedrome_core::FileEntry;

use crate::theme::palette;

pub struct FileManager<'a> {
    view: &'a FileManagerViewState,
    files: &'a [FileEntry],
    focus: Focus,
}

impl<'a> FileManager<'a> {
    pub fn new(view: &'a FileManagerViewState, files: &'a [FileEntry], focus: Focus) -> Self {
        Self { view, files, focus }
    }
}

impl Widget for FileManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Content;
        let rows_layout = Layout::vertical([
            Constraint::Length(1), // Toolbar
            Constraint::Min(4),    // Table
            Constraint::Length(1), // Selection footer
        ])
        .split(area);

        Paragraph::new(Line::from(vec![
            Span::styled(" 📁 New Folder [n] ", Style::default().fg(palette::ACCENT)),
            Span::styled(" 📤 Upload [u] ", Style::default().fg(palette::ACCENT)),
            Span::styled(" 🔄 Refresh [r] ", Style::default().fg(palette::ACCENT)),
        ]))
        .render(rows_layout[0], buf);

        let header = Row::new(vec![" ", "Name", "Type", "Size", "Modified"]).style(
            Style::default()
                .fg(palette::TEXT_MUTED)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .files
            .iter()
            .enumerate()
            .map(|(idx, file)| {
                let is_cursor = focused && idx == self.view.cursor;
                let is_selected = self.view.selected.contains(&file.id);
                let mark = if is_selected { "✓" } else { " " };

                let style = if is_cursor {
                    Style::default()
                        .fg(palette::TEXT_PRIMARY)
                        .bg(palette::HOVER_BG)
                } else if is_selected {
                    Style::default().fg(palette::ACCENT)
                } else {
                    Style::default().fg(palette::TEXT_MUTED)
                };

                Row::new(vec![
                    Cell::from(mark),
                    Cell::from(format!("{} {}", file.kind.icon(), file.name)),
                    Cell::from(file.kind.label()),
                    Cell::from(file.size.clone()),
                    Cell::from(file.modified.clone()),
                ])
                .style(style)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused {
                palette::BORDER_BRIGHT
            } else {
                palette::BORDER_DIM
            }))
            .title(Span::styled(
                " File Manager ",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Min(22),
                Constraint::Length(18),
                Constraint::Length(8),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(block)
        .render(rows_layout[1], buf);

        let footer = format!(" {} file(s) selected", self.view.selected.len());
        Paragraph::new(Line::from(Span::styled(
            footer,
            Style::default().fg(palette::TEXT_MUTED),
        )))
        .render(rows_layout[2], buf);
    }
}
