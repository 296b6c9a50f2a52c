//! Top-level view composition.

use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use safedrome_app::state::{Page, UiMode};
use safedrome_app::AppState;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    ActionPopup, ConfirmDialog, FileManager, Home, Open, SaveAs, SettingsPanel, Sidebar,
    StatusBar, Subscription,
};

/// Render the whole application for one frame
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    Block::default()
        .style(Style::default().bg(palette::DEEPEST_BG))
        .render(area, buf);

    let areas = layout::create(area);

    Sidebar::new(state.page, state.sidebar_cursor, state.focus).render(areas.sidebar, buf);

    match state.page {
        Page::Home => Home::new(&state.home, state.focus).render(areas.content, buf),
        Page::Open => {
            Open::new(&state.open_view, &state.files, state.focus).render(areas.content, buf)
        }
        Page::SaveAs => SaveAs::new(&state.save_as, state.focus).render(areas.content, buf),
        Page::FileManager => FileManager::new(&state.file_manager, &state.files, state.focus)
            .render(areas.content, buf),
        Page::Subscription => Subscription::new(&state.subscription, &state.plans, state.focus)
            .render(areas.content, buf),
        Page::Settings => SettingsPanel::new(&state.settings, &state.settings_view, state.focus)
            .render(areas.content, buf),
    }

    StatusBar::new(state.notice.as_deref(), state.ui_mode, state.focus).render(areas.status, buf);

    match state.ui_mode {
        UiMode::ActionPopup => ActionPopup::new(&state.popup).render(area, buf),
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm_dialog {
                ConfirmDialog::new(dialog).render(area, buf);
            }
        }
        UiMode::Normal => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use safedrome_app::message::Message;
    use safedrome_app::state::ConfirmDialogState;
    use safedrome_app::update;

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_view_renders_home_by_default() {
        let state = AppState::new();
        let out = render(&state);
        assert!(out.contains("SafeDrome"));
        assert!(out.contains("Welcome to SafeDrome"));
    }

    #[test]
    fn test_view_renders_settings_page() {
        let mut state = AppState::new();
        update(&mut state, Message::Navigate(Page::Settings));
        let out = render(&state);
        assert!(out.contains("Account Settings"));
    }

    #[test]
    fn test_view_renders_popup_overlay() {
        let mut state = AppState::new();
        state.show_popup();
        let out = render(&state);
        assert!(out.contains("Choose Action"));
    }

    #[test]
    fn test_view_renders_dialog_overlay() {
        let mut state = AppState::new();
        state.open_dialog(ConfirmDialogState::new(
            "Quit SafeDrome?",
            "Discard unsaved changes?",
            vec![("Discard & Quit", Message::ConfirmQuit), ("Cancel", Message::CancelQuit)],
        ));
        let out = render(&state);
        assert!(out.contains("Quit SafeDrome?"));
    }

    #[test]
    fn test_view_renders_notice_in_status_bar() {
        let mut state = AppState::new();
        state.set_notice("Sync started");
        let out = render(&state);
        assert!(out.contains("Sync started"));
    }
}
