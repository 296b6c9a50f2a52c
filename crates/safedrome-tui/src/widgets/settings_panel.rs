//! Settings page: section tabs, field list and the save/reset action row.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Widget};

use safedrome_app::settings::{
    fields, FieldValue, SaveState, SectionId, SectionState, SettingsState,
};
use safedrome_app::state::{Focus, SettingsViewState};

use crate::theme::palette;
use crate::widgets::form;

/// Static storage usage figures shown under the Storage section
const STORAGE_USED: &str = "2.7 GB of 6.0 GB";
const STORAGE_PERCENT: u16 = 45;

pub struct SettingsPanel<'a> {
    settings: &'a SettingsState,
    view: &'a SettingsViewState,
    focus: Focus,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(settings: &'a SettingsState, view: &'a SettingsViewState, focus: Focus) -> Self {
        Self {
            settings,
            view,
            focus,
        }
    }

    fn tabs_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (idx, section) in SectionId::ALL.iter().enumerate() {
            let active = *section == self.view.section;
            let dirty = self.settings.section(*section).dirty;
            let style = if active {
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette::TEXT_MUTED)
            };
            let marker = if dirty { "*" } else { "" };
            spans.push(Span::styled(
                format!(" {}{} ", section.tab_label(), marker),
                style,
            ));
            if idx + 1 < SectionId::ALL.len() {
                spans.push(Span::styled("│", Style::default().fg(palette::BORDER_DIM)));
            }
        }
        Line::from(spans)
    }

    fn field_lines(&self, section: &SectionState, focused: bool) -> Vec<Line<'static>> {
        let auto_backup_on = section
            .value("auto_backup")
            .and_then(FieldValue::as_toggle)
            .unwrap_or(true);

        let mut lines = vec![Line::from("")];
        for (idx, spec) in fields(section.id).into_iter().enumerate() {
            let is_cursor = focused && idx == self.view.cursor;
            // Backup frequency is meaningless while automatic backups are off
            let inactive = section.id == SectionId::Storage
                && spec.id == "backup_interval"
                && !auto_backup_on;

            if inactive {
                lines.push(Line::from(Span::styled(
                    format!("  {} (enable Auto Backup first)", spec.label),
                    Style::default().fg(palette::BORDER_BRIGHT),
                )));
                lines.push(Line::from(""));
                continue;
            }

            lines.push(form::field_label(spec.label, is_cursor));
            let editing = is_cursor && self.view.editing;
            match section.value(spec.id) {
                Some(FieldValue::Text(text)) => {
                    lines.push(form::text_value(
                        text,
                        is_cursor,
                        editing,
                        &self.view.edit_buffer,
                    ));
                }
                Some(FieldValue::Toggle(on)) => {
                    lines.push(form::toggle_value(*on, is_cursor));
                }
                Some(FieldValue::Choice(value)) => {
                    let display = spec.option_label(value).unwrap_or(value.as_str());
                    lines.push(form::choice_value(display, is_cursor));
                }
                None => {}
            }
            if !spec.description.is_empty() {
                lines.push(form::description(spec.description));
            }
            if let Some(message) = section.errors.get(spec.id) {
                lines.push(form::error(message));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    fn action_row(&self, section: &SectionState) -> Vec<Line<'static>> {
        let can_save = self.settings.can_save(section.id);
        let save_span = match section.save_state {
            SaveState::Saving => Span::styled(
                " ⟳ Saving... ",
                Style::default()
                    .fg(palette::DEEPEST_BG)
                    .bg(palette::ACCENT_DIM),
            ),
            SaveState::Success => Span::styled(
                " ✓ Saved ",
                Style::default()
                    .fg(palette::DEEPEST_BG)
                    .bg(palette::STATUS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            SaveState::Error => Span::styled(
                " ↻ Retry ",
                Style::default()
                    .fg(palette::DEEPEST_BG)
                    .bg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            ),
            SaveState::Idle => {
                if can_save {
                    Span::styled(
                        " Save Changes ",
                        Style::default()
                            .fg(palette::DEEPEST_BG)
                            .bg(palette::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(
                        " Save Changes ",
                        Style::default()
                            .fg(palette::TEXT_MUTED)
                            .bg(palette::HOVER_BG),
                    )
                }
            }
        };

        let reset_style = if self.settings.can_reset(section.id) {
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .bg(palette::HOVER_BG)
        } else {
            Style::default()
                .fg(palette::BORDER_BRIGHT)
                .bg(palette::HOVER_BG)
        };

        let mut lines = vec![Line::from(vec![
            Span::raw("  "),
            save_span,
            Span::raw("  "),
            Span::styled(" Reset ", reset_style),
        ])];

        if section.save_state == SaveState::Error {
            if let Some(err) = &section.save_error {
                lines.push(Line::from(Span::styled(
                    format!("  ✗ Save failed: {err}"),
                    Style::default().fg(palette::STATUS_RED),
                )));
            }
        }
        lines
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Content;
        let section = self.settings.section(self.view.section);
        let is_storage = self.view.section == SectionId::Storage;

        let mut constraints = vec![
            Constraint::Length(1), // Tabs
            Constraint::Min(8),    // Fields + actions
        ];
        if is_storage {
            constraints.push(Constraint::Length(3)); // Usage gauge
        }
        constraints.push(Constraint::Length(1)); // Hints
        let rows = Layout::vertical(constraints).split(area);

        Paragraph::new(self.tabs_line()).render(rows[0], buf);

        let (title, subtitle) = self.view.section.header();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused {
                palette::BORDER_BRIGHT
            } else {
                palette::BORDER_DIM
            }))
            .title(Span::styled(
                format!(" {title} "),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(palette::CARD_BG));

        let mut lines = vec![Line::from(Span::styled(
            format!(" {subtitle}"),
            Style::default().fg(palette::TEXT_MUTED),
        ))];
        lines.extend(self.field_lines(section, focused));
        lines.extend(self.action_row(section));
        Paragraph::new(lines).block(block).render(rows[1], buf);

        if is_storage {
            let gauge_block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette::BORDER_DIM))
                .title(Span::styled(
                    format!(" Storage Usage · {STORAGE_USED} "),
                    Style::default().fg(palette::TEXT_MUTED),
                ));
            Gauge::default()
                .block(gauge_block)
                .gauge_style(Style::default().fg(palette::ACCENT).bg(palette::INPUT_BG))
                .percent(STORAGE_PERCENT)
                .label(Span::styled(
                    format!("{STORAGE_PERCENT}% utilized"),
                    Style::default().fg(palette::TEXT_PRIMARY),
                ))
                .render(rows[2], buf);
        }

        let hints = " ←/→ section · ↑/↓ field · Enter/Space edit · s save · r reset";
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(palette::TEXT_MUTED),
        )))
        .render(rows[rows.len() - 1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(settings: &SettingsState, view: &SettingsViewState) -> String {
        let backend = ratatui::backend::TestBackend::new(80, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(
                    SettingsPanel::new(settings, view, Focus::Content),
                    frame.area(),
                )
            })
            .unwrap();
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_account_section_fields() {
        let settings = SettingsState::default();
        let view = SettingsViewState::default();
        let out = render(&settings, &view);
        assert!(out.contains("Account Settings"));
        assert!(out.contains("Username"));
        assert!(out.contains("Email"));
        assert!(out.contains("user@safedrome.com"));
        assert!(out.contains("Save Changes"));
        assert!(out.contains("Reset"));
    }

    #[test]
    fn test_validation_error_is_shown() {
        let mut settings = SettingsState::default();
        settings.set_field(
            SectionId::Account,
            "email",
            FieldValue::Text("broken".to_string()),
        );
        settings.validate_section(SectionId::Account);
        let view = SettingsViewState::default();
        let out = render(&settings, &view);
        assert!(out.contains("Enter a valid email address"));
    }

    #[test]
    fn test_saving_state_label() {
        let mut settings = SettingsState::default();
        settings.set_field(
            SectionId::Account,
            "username",
            FieldValue::Text("Somebody".to_string()),
        );
        settings.begin_save(SectionId::Account);
        let view = SettingsViewState::default();
        let out = render(&settings, &view);
        assert!(out.contains("Saving..."));
    }

    #[test]
    fn test_error_state_shows_retry_and_reason() {
        let mut settings = SettingsState::default();
        settings.set_field(
            SectionId::Account,
            "username",
            FieldValue::Text("Somebody".to_string()),
        );
        settings.begin_save(SectionId::Account);
        settings.finish_save(SectionId::Account, Err("disk full".to_string()));
        let view = SettingsViewState::default();
        let out = render(&settings, &view);
        assert!(out.contains("Retry"));
        assert!(out.contains("disk full"));
    }

    #[test]
    fn test_storage_section_gauge_and_dimmed_interval() {
        let mut settings = SettingsState::default();
        settings.set_field(SectionId::Storage, "auto_backup", FieldValue::Toggle(false));
        let mut view = SettingsViewState::default();
        view.goto_section(SectionId::Storage);
        let out = render(&settings, &view);
        assert!(out.contains("2.7 GB of 6.0 GB"));
        assert!(out.contains("45% utilized"));
        assert!(out.contains("enable Auto Backup first"));
    }

    #[test]
    fn test_dirty_tab_marker() {
        let mut settings = SettingsState::default();
        settings.set_field(
            SectionId::Appearance,
            "show_grid_lines",
            FieldValue::Toggle(false),
        );
        let view = SettingsViewState::default();
        let out = render(&settings, &view);
        assert!(out.contains("Appearance*"));
    }
}
