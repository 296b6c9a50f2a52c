//! Bottom status line: transient notices, otherwise key hints.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use safedrome_app::state::{Focus, UiMode};

use crate::theme::palette;

pub struct StatusBar<'a> {
    notice: Option<&'a str>,
    ui_mode: UiMode,
    focus: Focus,
}

impl<'a> StatusBar<'a> {
    pub fn new(notice: Option<&'a str>, ui_mode: UiMode, focus: Focus) -> Self {
        Self {
            notice,
            ui_mode,
            focus,
        }
    }

    fn hints(&self) -> &'static str {
        match self.ui_mode {
            UiMode::ActionPopup | UiMode::ConfirmDialog => " Enter confirm · Esc close",
            UiMode::Normal => match self.focus {
                Focus::Sidebar => " ↑/↓ menu · Enter open · 1-6 jump · Tab content · q quit",
                Focus::Content => " Tab/Esc sidebar · 1-6 jump · q quit",
            },
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.notice {
            Some(notice) => Line::from(vec![
                Span::styled(
                    " ● ",
                    Style::default()
                        .fg(palette::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(notice.to_string(), Style::default().fg(palette::TEXT_PRIMARY)),
            ]),
            None => Line::from(Span::styled(
                self.hints(),
                Style::default().fg(palette::TEXT_MUTED),
            )),
        };
        Paragraph::new(line)
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}
