//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, navigation, pages, settings_handlers, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Global Messages
        // ─────────────────────────────────────────────────────────
        Message::Key(key) => {
            // Any key press clears the transient status line
            state.notice = None;
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::RequestQuit => navigation::handle_request_quit(state),
        Message::Quit | Message::ConfirmQuit => {
            state.close_dialog();
            state.quit();
            UpdateResult::none()
        }
        Message::CancelQuit => {
            state.close_dialog();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(page) => navigation::handle_navigate(state, page),
        Message::SidebarNext => navigation::handle_sidebar_move(state, 1),
        Message::SidebarPrev => navigation::handle_sidebar_move(state, -1),
        Message::SidebarActivate => navigation::handle_activate_entry(state, state.sidebar_cursor),
        Message::ActivateEntry(index) => navigation::handle_activate_entry(state, index),
        Message::FocusToggle => navigation::handle_focus_toggle(state),
        Message::FocusSidebar => {
            state.focus = crate::state::Focus::Sidebar;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Action Popup Messages
        // ─────────────────────────────────────────────────────────
        Message::ShowActionPopup => {
            state.show_popup();
            UpdateResult::none()
        }
        Message::HideActionPopup => {
            state.hide_popup();
            UpdateResult::none()
        }
        Message::PopupToggle => {
            state.popup.toggle();
            UpdateResult::none()
        }
        Message::PopupConfirm => navigation::handle_popup_confirm(state),

        // ─────────────────────────────────────────────────────────
        // Confirm Dialog Messages
        // ─────────────────────────────────────────────────────────
        Message::DialogNext => {
            if let Some(dialog) = state.confirm_dialog.as_mut() {
                dialog.select_next();
            }
            UpdateResult::none()
        }
        Message::DialogPrev => {
            if let Some(dialog) = state.confirm_dialog.as_mut() {
                dialog.select_prev();
            }
            UpdateResult::none()
        }
        Message::DialogConfirm => navigation::handle_dialog_confirm(state),
        Message::DialogDismiss => {
            state.pending_page = None;
            state.close_dialog();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Home Page Messages
        // ─────────────────────────────────────────────────────────
        Message::HomeActionNext => pages::handle_home_action_move(state, 1),
        Message::HomeActionPrev => pages::handle_home_action_move(state, -1),
        Message::HomeActionRun => pages::handle_home_action_run(state),

        // ─────────────────────────────────────────────────────────
        // Open Page Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenCursorNext => pages::handle_open_cursor_move(state, 1),
        Message::OpenCursorPrev => pages::handle_open_cursor_move(state, -1),
        Message::OpenActivate => pages::handle_open_activate(state),
        Message::OpenConfirm => pages::handle_open_confirm(state),
        Message::OpenCancel => UpdateResult::message(Message::Navigate(crate::state::Page::Home)),

        // ─────────────────────────────────────────────────────────
        // Save As Page Messages
        // ─────────────────────────────────────────────────────────
        Message::SaveAsFocusNext => {
            state.save_as.focus_next();
            UpdateResult::none()
        }
        Message::SaveAsFocusPrev => {
            state.save_as.focus_prev();
            UpdateResult::none()
        }
        Message::SaveAsStartEdit => pages::handle_save_as_start_edit(state),
        Message::SaveAsCharInput(c) => {
            if state.save_as.editing {
                state.save_as.edit_buffer.push(c);
            }
            UpdateResult::none()
        }
        Message::SaveAsBackspace => {
            if state.save_as.editing {
                state.save_as.edit_buffer.pop();
            }
            UpdateResult::none()
        }
        Message::SaveAsCommitEdit => pages::handle_save_as_commit_edit(state),
        Message::SaveAsCancelEdit => {
            state.save_as.editing = false;
            state.save_as.edit_buffer.clear();
            UpdateResult::none()
        }
        Message::SaveAsCycleType(step) => {
            state.save_as.cycle_type(step);
            UpdateResult::none()
        }
        Message::SaveAsSubmit => pages::handle_save_as_submit(state),
        Message::SaveAsCancel => UpdateResult::message(Message::Navigate(crate::state::Page::Home)),

        // ─────────────────────────────────────────────────────────
        // File Manager Messages
        // ─────────────────────────────────────────────────────────
        Message::FmCursorNext => pages::handle_fm_cursor_move(state, 1),
        Message::FmCursorPrev => pages::handle_fm_cursor_move(state, -1),
        Message::FmToggleSelect => pages::handle_fm_toggle_select(state),
        Message::FmNewFolder => {
            state.set_notice("Creating new folder");
            UpdateResult::none()
        }
        Message::FmUpload => {
            state.set_notice("Uploading files");
            UpdateResult::none()
        }
        Message::FmRefresh => {
            state.set_notice("Refreshing file list");
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Subscription Messages
        // ─────────────────────────────────────────────────────────
        Message::PlanNext => pages::handle_plan_move(state, 1),
        Message::PlanPrev => pages::handle_plan_move(state, -1),
        Message::PlanChoose => pages::handle_plan_choose(state),

        // ─────────────────────────────────────────────────────────
        // Settings Messages
        // ─────────────────────────────────────────────────────────
        Message::SettingsNextSection => {
            state.settings_view.next_section();
            UpdateResult::none()
        }
        Message::SettingsPrevSection => {
            state.settings_view.prev_section();
            UpdateResult::none()
        }
        Message::SettingsCursorNext => {
            state.settings_view.select_next();
            UpdateResult::none()
        }
        Message::SettingsCursorPrev => {
            state.settings_view.select_prev();
            UpdateResult::none()
        }
        Message::SettingsActivate => settings_handlers::handle_activate(state),
        Message::SettingsCharInput(c) => {
            if state.settings_view.editing {
                state.settings_view.edit_buffer.push(c);
            }
            UpdateResult::none()
        }
        Message::SettingsBackspace => {
            if state.settings_view.editing {
                state.settings_view.edit_buffer.pop();
            }
            UpdateResult::none()
        }
        Message::SettingsCommitEdit => settings_handlers::handle_commit_edit(state),
        Message::SettingsCancelEdit => {
            state.settings_view.stop_editing();
            UpdateResult::none()
        }
        Message::SettingsCycleChoice(step) => settings_handlers::handle_cycle_choice(state, step),
        Message::SettingsSave => settings_handlers::handle_save(state),
        Message::SettingsReset => settings_handlers::handle_reset(state),
        Message::SettingsSaveAndClose => settings_handlers::handle_save_and_close(state),
        Message::SettingsDiscardAndClose => settings_handlers::handle_discard_and_close(state),
        Message::SettingsSaveFinished { section, result } => {
            settings_handlers::handle_save_finished(state, section, result)
        }
        Message::SettingsSaveExpired { section, epoch } => {
            settings_handlers::handle_save_expired(state, section, epoch)
        }
    }
}
