//! Shared form rendering primitives.
//!
//! Text inputs, toggles and choice selectors are rendered the same way on
//! the Save As page and in the settings panel.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::palette;

/// Field label, highlighted when the field has keyboard focus
pub fn field_label(label: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let style = if focused {
        Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_PRIMARY)
    };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(palette::ACCENT)),
        Span::styled(label.to_string(), style),
    ])
}

/// Text input well. In edit mode the buffer is shown with a block cursor.
pub fn text_value(value: &str, focused: bool, editing: bool, buffer: &str) -> Line<'static> {
    let well_style = if editing {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::INPUT_BG)
    } else if focused {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::HOVER_BG)
    } else {
        Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::INPUT_BG)
    };

    if editing {
        Line::from(vec![
            Span::styled("    ".to_string(), Style::default()),
            Span::styled(format!(" {buffer}"), well_style),
            Span::styled(
                "█".to_string(),
                Style::default().fg(palette::ACCENT).bg(palette::INPUT_BG),
            ),
            Span::styled(" ".to_string(), well_style),
        ])
    } else {
        Line::from(vec![
            Span::styled("    ".to_string(), Style::default()),
            Span::styled(format!(" {value} "), well_style),
        ])
    }
}

/// Toggle shown as a checkbox with its on/off label
pub fn toggle_value(on: bool, focused: bool) -> Line<'static> {
    let (mark, label, color) = if on {
        ("[✓]", "Enabled", palette::ACCENT)
    } else {
        ("[ ]", "Disabled", palette::TEXT_MUTED)
    };
    let style = if focused {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Line::from(vec![
        Span::styled("    ".to_string(), Style::default()),
        Span::styled(format!("{mark} {label}"), style),
    ])
}

/// Choice selector with cycle arrows
pub fn choice_value(display: &str, focused: bool) -> Line<'static> {
    let arrow_style = if focused {
        Style::default().fg(palette::ACCENT)
    } else {
        Style::default().fg(palette::BORDER_BRIGHT)
    };
    let value_style = if focused {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette::TEXT_MUTED)
    };
    Line::from(vec![
        Span::styled("    ".to_string(), Style::default()),
        Span::styled("◂ ".to_string(), arrow_style),
        Span::styled(display.to_string(), value_style),
        Span::styled(" ▸".to_string(), arrow_style),
    ])
}

/// Muted helper text under a field
pub fn description(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("    {text}"),
        Style::default().fg(palette::TEXT_MUTED),
    ))
}

/// Inline validation error under a field
pub fn error(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("    ✗ {text}"),
        Style::default().fg(palette::STATUS_RED),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_field_label_marker() {
        assert!(line_text(&field_label("Username", true)).starts_with("▸ "));
        assert!(line_text(&field_label("Username", false)).starts_with("  "));
    }

    #[test]
    fn test_text_value_shows_buffer_while_editing() {
        let line = text_value("User", true, true, "Us");
        let text = line_text(&line);
        assert!(text.contains("Us█"));
        assert!(!text.contains("User"));
    }

    #[test]
    fn test_text_value_shows_committed_value() {
        let line = text_value("User", false, false, "");
        assert!(line_text(&line).contains("User"));
    }

    #[test]
    fn test_toggle_labels() {
        assert!(line_text(&toggle_value(true, false)).contains("[✓] Enabled"));
        assert!(line_text(&toggle_value(false, false)).contains("[ ] Disabled"));
    }

    #[test]
    fn test_choice_arrows() {
        let text = line_text(&choice_value("Medium (14px)", true));
        assert!(text.contains("◂ Medium (14px) ▸"));
    }

    #[test]
    fn test_error_prefix() {
        assert!(line_text(&error("Enter a valid email address")).contains("✗ Enter a valid"));
    }
}
