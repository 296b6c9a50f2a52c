//! Sidebar, popup, dialog and quit handlers

use tracing::debug;

use crate::message::Message;
use crate::state::{
    AppState, ConfirmDialogState, Focus, OpenViewState, Page, SaveAsViewState, UiMode,
    SIDEBAR_ENTRIES,
};

use super::UpdateResult;

/// Switch pages, guarded by the unsaved-settings check.
///
/// Leaving the Settings page with dirty sections parks the target page and
/// opens the unsaved-changes dialog instead.
pub fn handle_navigate(state: &mut AppState, page: Page) -> UpdateResult {
    if state.page == Page::Settings
        && page != Page::Settings
        && state.settings.any_dirty()
        && state.confirm_dialog.is_none()
    {
        state.pending_page = Some(page);
        state.open_dialog(unsaved_changes_dialog());
        return UpdateResult::none();
    }
    do_navigate(state, page);
    UpdateResult::none()
}

/// The dialog shown when leaving Settings with unsaved changes
fn unsaved_changes_dialog() -> ConfirmDialogState {
    ConfirmDialogState::new(
        "Unsaved Changes",
        "You have unsaved settings changes.",
        vec![
            ("Save & Close", Message::SettingsSaveAndClose),
            ("Discard Changes", Message::SettingsDiscardAndClose),
            ("Cancel", Message::DialogDismiss),
        ],
    )
}

/// Perform the actual page switch, resetting transient page state.
///
/// Open and Save As lose their local state on re-entry, matching the
/// shell's remount-on-navigate behavior. Settings state is global and
/// survives navigation.
pub(crate) fn do_navigate(state: &mut AppState, page: Page) {
    if page == Page::Open {
        state.open_view = OpenViewState::default();
    }
    if page == Page::SaveAs {
        state.save_as = SaveAsViewState::default();
    }
    state.page = page;
    state.sidebar_cursor = page.sidebar_index();
    state.ui_mode = UiMode::Normal;
    state.focus = Focus::Content;
    debug!("Navigated to {:?}", page);
}

/// Move the sidebar highlight up or down, wrapping
pub fn handle_sidebar_move(state: &mut AppState, step: isize) -> UpdateResult {
    let len = SIDEBAR_ENTRIES.len() as isize;
    let cursor = state.sidebar_cursor as isize + step;
    state.sidebar_cursor = cursor.rem_euclid(len) as usize;
    UpdateResult::none()
}

/// Activate a sidebar entry: navigate, or show the action popup for
/// Open / Save As.
pub fn handle_activate_entry(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(entry) = SIDEBAR_ENTRIES.get(index) else {
        return UpdateResult::none();
    };
    state.sidebar_cursor = index;
    if entry.opens_popup {
        UpdateResult::message(Message::ShowActionPopup)
    } else {
        UpdateResult::message(Message::Navigate(entry.page))
    }
}

pub fn handle_focus_toggle(state: &mut AppState) -> UpdateResult {
    state.focus = match state.focus {
        Focus::Sidebar => Focus::Content,
        Focus::Content => Focus::Sidebar,
    };
    UpdateResult::none()
}

/// Confirm the highlighted popup choice and navigate to it
pub fn handle_popup_confirm(state: &mut AppState) -> UpdateResult {
    let page = if state.popup.selected == 0 {
        Page::Open
    } else {
        Page::SaveAs
    };
    state.hide_popup();
    UpdateResult::message(Message::Navigate(page))
}

/// Activate the highlighted dialog option
pub fn handle_dialog_confirm(state: &mut AppState) -> UpdateResult {
    let Some(dialog) = state.confirm_dialog.take() else {
        return UpdateResult::none();
    };
    state.ui_mode = UiMode::Normal;
    match dialog.options.get(dialog.selected) {
        Some((_, msg)) => UpdateResult::message(msg.clone()),
        None => UpdateResult::none(),
    }
}

/// Quit request: dirty settings get a confirmation dialog first
pub fn handle_request_quit(state: &mut AppState) -> UpdateResult {
    if state.settings.any_dirty() {
        state.open_dialog(ConfirmDialogState::new(
            "Quit SafeDrome?",
            "You have unsaved settings changes.",
            vec![
                ("Discard & Quit", Message::ConfirmQuit),
                ("Cancel", Message::CancelQuit),
            ],
        ));
        UpdateResult::none()
    } else {
        state.quit();
        UpdateResult::none()
    }
}
