//! Home page: hero banner, product highlights and quick actions.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use safedrome_app::state::{Focus, HomeViewState, QUICK_ACTIONS};
use safedrome_core::features;

use crate::theme::palette;

pub struct Home<'a> {
    view: &'a HomeViewState,
    focus: Focus,
}

impl<'a> Home<'a> {
    pub fn new(view: &'a HomeViewState, focus: Focus) -> Self {
        Self { view, focus }
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to SafeDrome",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your secure file management solution",
                Style::default().fg(palette::TEXT_MUTED),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_features(&self, area: Rect, buf: &mut Buffer) {
        let cards = features();
        let constraints: Vec<Constraint> = cards
            .iter()
            .map(|_| Constraint::Ratio(1, cards.len() as u32))
            .collect();
        let columns = Layout::horizontal(constraints).split(area);

        for (card, column) in cards.iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette::BORDER_DIM))
                .style(Style::default().bg(palette::CARD_BG));
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} {}", card.icon, card.title),
                    Style::default()
                        .fg(palette::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    card.blurb.to_string(),
                    Style::default().fg(palette::TEXT_MUTED),
                )),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block)
                .render(*column, buf);
        }
    }

    fn render_actions(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Content;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused {
                palette::BORDER_BRIGHT
            } else {
                palette::BORDER_DIM
            }))
            .title(Span::styled(
                " Quick Actions ",
                Style::default().fg(palette::TEXT_PRIMARY),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let mut lines = vec![Line::from("")];
        for (idx, action) in QUICK_ACTIONS.iter().enumerate() {
            let is_cursor = focused && idx == self.view.action_cursor;
            let style = if is_cursor {
                Style::default()
                    .fg(palette::ACCENT)
                    .bg(palette::HOVER_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette::TEXT_PRIMARY)
            };
            let marker = if is_cursor { "▸" } else { " " };
            lines.push(Line::from(Span::styled(
                format!(" {marker} {action}"),
                style,
            )));
        }
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl Widget for Home<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(4), // Hero
            Constraint::Length(5), // Feature cards
            Constraint::Min(5),    // Quick actions
        ])
        .split(area);

        self.render_hero(rows[0], buf);
        self.render_features(rows[1], buf);
        self.render_actions(rows[2], buf);
    }
}
