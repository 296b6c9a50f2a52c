//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, Page, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ActionPopup => handle_key_popup(key),
        UiMode::ConfirmDialog => handle_key_dialog(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Key events while the action popup is open
fn handle_key_popup(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Right | InputKey::Up | InputKey::Down | InputKey::Tab => {
            Some(Message::PopupToggle)
        }
        InputKey::Enter => Some(Message::PopupConfirm),
        InputKey::Esc | InputKey::Char('q') => Some(Message::HideActionPopup),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Key events while a confirm dialog is open
fn handle_key_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Up | InputKey::BackTab => Some(Message::DialogPrev),
        InputKey::Right | InputKey::Down | InputKey::Tab => Some(Message::DialogNext),
        InputKey::Enter => Some(Message::DialogConfirm),
        InputKey::Esc => Some(Message::DialogDismiss),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Key events in normal mode: global shortcuts, then sidebar or page keys
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // Text editing captures everything except commit/cancel
    if editing_text(state) {
        return handle_key_editing(state, key);
    }

    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('q') => return Some(Message::RequestQuit),
        InputKey::Tab => return Some(Message::FocusToggle),
        // Number keys activate sidebar entries directly
        InputKey::Char(c @ '1'..='6') => {
            let index = (c as usize) - ('1' as usize);
            return Some(Message::ActivateEntry(index));
        }
        _ => {}
    }

    match state.focus {
        Focus::Sidebar => handle_key_sidebar(key),
        Focus::Content => handle_key_page(state, key),
    }
}

fn editing_text(state: &AppState) -> bool {
    (state.page == Page::Settings && state.settings_view.editing)
        || (state.page == Page::SaveAs && state.save_as.editing)
}

/// Keys while a text field is in edit mode
fn handle_key_editing(state: &AppState, key: InputKey) -> Option<Message> {
    let settings = state.page == Page::Settings;
    match key {
        InputKey::Enter => Some(if settings {
            Message::SettingsCommitEdit
        } else {
            Message::SaveAsCommitEdit
        }),
        InputKey::Esc => Some(if settings {
            Message::SettingsCancelEdit
        } else {
            Message::SaveAsCancelEdit
        }),
        InputKey::Backspace => Some(if settings {
            Message::SettingsBackspace
        } else {
            Message::SaveAsBackspace
        }),
        InputKey::Char(c) => Some(if settings {
            Message::SettingsCharInput(c)
        } else {
            Message::SaveAsCharInput(c)
        }),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys while the sidebar has focus
fn handle_key_sidebar(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::SidebarPrev),
        InputKey::Down => Some(Message::SidebarNext),
        InputKey::Enter => Some(Message::SidebarActivate),
        InputKey::Esc => Some(Message::RequestQuit),
        _ => None,
    }
}

/// Keys while the page content has focus
fn handle_key_page(state: &AppState, key: InputKey) -> Option<Message> {
    // Esc always returns focus to the sidebar
    if key == InputKey::Esc {
        return Some(Message::FocusSidebar);
    }
    match state.page {
        Page::Home => match key {
            InputKey::Left => Some(Message::HomeActionPrev),
            InputKey::Right => Some(Message::HomeActionNext),
            InputKey::Enter => Some(Message::HomeActionRun),
            _ => None,
        },
        Page::Open => match key {
            InputKey::Up => Some(Message::OpenCursorPrev),
            InputKey::Down => Some(Message::OpenCursorNext),
            InputKey::Enter => Some(Message::OpenActivate),
            InputKey::Char('o') => Some(Message::OpenConfirm),
            InputKey::Char('c') => Some(Message::OpenCancel),
            _ => None,
        },
        Page::SaveAs => match key {
            InputKey::Up => Some(Message::SaveAsFocusPrev),
            InputKey::Down => Some(Message::SaveAsFocusNext),
            InputKey::Enter => Some(Message::SaveAsStartEdit),
            InputKey::Left if state.save_as.focus == 1 => Some(Message::SaveAsCycleType(-1)),
            InputKey::Right if state.save_as.focus == 1 => Some(Message::SaveAsCycleType(1)),
            InputKey::Char('s') => Some(Message::SaveAsSubmit),
            InputKey::Char('c') => Some(Message::SaveAsCancel),
            _ => None,
        },
        Page::FileManager => match key {
            InputKey::Up => Some(Message::FmCursorPrev),
            InputKey::Down => Some(Message::FmCursorNext),
            InputKey::Char(' ') | InputKey::Enter => Some(Message::FmToggleSelect),
            InputKey::Char('n') => Some(Message::FmNewFolder),
            InputKey::Char('u') => Some(Message::FmUpload),
            InputKey::Char('r') => Some(Message::FmRefresh),
            _ => None,
        },
        Page::Subscription => match key {
            InputKey::Left | InputKey::Up => Some(Message::PlanPrev),
            InputKey::Right | InputKey::Down => Some(Message::PlanNext),
            InputKey::Enter => Some(Message::PlanChoose),
            _ => None,
        },
        Page::Settings => match key {
            InputKey::Left | InputKey::Char('[') => Some(Message::SettingsPrevSection),
            InputKey::Right | InputKey::Char(']') => Some(Message::SettingsNextSection),
            InputKey::Up => Some(Message::SettingsCursorPrev),
            InputKey::Down => Some(Message::SettingsCursorNext),
            InputKey::Enter | InputKey::Char(' ') => Some(Message::SettingsActivate),
            InputKey::Char('s') => Some(Message::SettingsSave),
            InputKey::Char('r') => Some(Message::SettingsReset),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_state(page: Page) -> AppState {
        let mut state = AppState::new();
        state.page = page;
        state.focus = Focus::Content;
        state
    }

    #[test]
    fn test_number_keys_activate_entries() {
        let state = AppState::new();
        assert_eq!(
            handle_key(&state, InputKey::Char('1')),
            Some(Message::ActivateEntry(0))
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('6')),
            Some(Message::ActivateEntry(5))
        );
        assert_eq!(handle_key(&state, InputKey::Char('7')), None);
    }

    #[test]
    fn test_sidebar_keys() {
        let state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::Down), Some(Message::SidebarNext));
        assert_eq!(
            handle_key(&state, InputKey::Enter),
            Some(Message::SidebarActivate)
        );
        assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::RequestQuit));
    }

    #[test]
    fn test_popup_keys() {
        let mut state = AppState::new();
        state.show_popup();
        assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::PopupToggle));
        assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::PopupConfirm));
        assert_eq!(
            handle_key(&state, InputKey::Esc),
            Some(Message::HideActionPopup)
        );
    }

    #[test]
    fn test_dialog_keys() {
        let mut state = AppState::new();
        state.open_dialog(crate::state::ConfirmDialogState::new(
            "T",
            "M",
            vec![("Ok", Message::Quit)],
        ));
        assert_eq!(handle_key(&state, InputKey::Right), Some(Message::DialogNext));
        assert_eq!(
            handle_key(&state, InputKey::Enter),
            Some(Message::DialogConfirm)
        );
        assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::DialogDismiss));
    }

    #[test]
    fn test_settings_editing_captures_chars() {
        let mut state = content_state(Page::Settings);
        state.settings_view.start_editing("User");
        assert_eq!(
            handle_key(&state, InputKey::Char('q')),
            Some(Message::SettingsCharInput('q')),
            "q types instead of quitting while editing"
        );
        assert_eq!(
            handle_key(&state, InputKey::Enter),
            Some(Message::SettingsCommitEdit)
        );
        assert_eq!(
            handle_key(&state, InputKey::Esc),
            Some(Message::SettingsCancelEdit)
        );
    }

    #[test]
    fn test_save_as_editing_captures_digits() {
        let mut state = content_state(Page::SaveAs);
        state.save_as.editing = true;
        assert_eq!(
            handle_key(&state, InputKey::Char('1')),
            Some(Message::SaveAsCharInput('1')),
            "digits type instead of navigating while editing"
        );
    }

    #[test]
    fn test_save_as_type_field_cycles_with_arrows() {
        let mut state = content_state(Page::SaveAs);
        state.save_as.focus = 1;
        assert_eq!(
            handle_key(&state, InputKey::Right),
            Some(Message::SaveAsCycleType(1))
        );
        state.save_as.focus = 0;
        assert_eq!(handle_key(&state, InputKey::Right), None);
    }

    #[test]
    fn test_settings_page_keys() {
        let state = content_state(Page::Settings);
        assert_eq!(
            handle_key(&state, InputKey::Right),
            Some(Message::SettingsNextSection)
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('s')),
            Some(Message::SettingsSave)
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('r')),
            Some(Message::SettingsReset)
        );
    }

    #[test]
    fn test_esc_in_content_refocuses_sidebar() {
        let state = content_state(Page::FileManager);
        assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::FocusSidebar));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = AppState::new();
        assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
        state.show_popup();
        assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
    }
}
