//! Subscription page: plan cards and the marketing highlights strip.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use safedrome_app::state::{Focus, SubscriptionViewState};
use safedrome_core::{highlights, Plan};

use crate::theme::palette;

pub struct Subscription<'a> {
    view: &'a SubscriptionViewState,
    plans: &'a [Plan],
    focus: Focus,
}

impl<'a> Subscription<'a> {
    pub fn new(view: &'a SubscriptionViewState, plans: &'a [Plan], focus: Focus) -> Self {
        Self { view, plans, focus }
    }

    fn render_plan(&self, plan: &Plan, highlighted: bool, area: Rect, buf: &mut Buffer) {
        let border_color = if highlighted {
            palette::ACCENT
        } else if plan.popular {
            palette::BORDER_BRIGHT
        } else {
            palette::BORDER_DIM
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette::CARD_BG));
        if plan.popular {
            block = block.title(Span::styled(
                " ★ Most Popular ",
                Style::default()
                    .fg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                plan.name,
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    plan.price,
                    Style::default()
                        .fg(palette::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("/{}", plan.period), Style::default().fg(palette::TEXT_MUTED)),
            ]),
            Line::from(""),
        ];
        for feature in plan.features {
            lines.push(Line::from(Span::styled(
                format!("✓ {feature}"),
                Style::default().fg(palette::TEXT_MUTED),
            )));
        }
        lines.push(Line::from(""));
        let button_style = if highlighted {
            Style::default()
                .fg(palette::DEEPEST_BG)
                .bg(palette::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .bg(palette::HOVER_BG)
        };
        lines.push(Line::from(Span::styled(" Choose Plan ", button_style)));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

impl Widget for Subscription<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Content;
        let rows = Layout::vertical([
            Constraint::Length(1),  // Header
            Constraint::Min(12),    // Plan cards
            Constraint::Length(4),  // Highlights strip
        ])
        .split(area);

        Paragraph::new(Line::from(Span::styled(
            " Choose the plan that fits your needs",
            Style::default().fg(palette::TEXT_MUTED),
        )))
        .render(rows[0], buf);

        let constraints: Vec<Constraint> = self
            .plans
            .iter()
            .map(|_| Constraint::Ratio(1, self.plans.len().max(1) as u32))
            .collect();
        let columns = Layout::horizontal(constraints).split(rows[1]);
        for (idx, (plan, column)) in self.plans.iter().zip(columns.iter()).enumerate() {
            let highlighted = focused && idx == self.view.cursor;
            self.render_plan(plan, highlighted, *column, buf);
        }

        let mut strip = vec![Line::from(Span::styled(
            "Why Choose SafeDrome?",
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))];
        let cards = highlights();
        let mut spans = Vec::new();
        for (idx, card) in cards.iter().enumerate() {
            spans.push(Span::styled(
                format!("{} {}", card.icon, card.title),
                Style::default().fg(palette::ACCENT),
            ));
            if idx + 1 < cards.len() {
                spans.push(Span::styled("   ·   ", Style::default().fg(palette::BORDER_BRIGHT)));
            }
        }
        strip.push(Line::from(spans));
        Paragraph::new(strip)
            .alignment(Alignment::Center)
            .render(rows[2], buf);
    }
}
