//! Handlers for the Home, Open, Save As, File Manager and Subscription pages

use crate::state::{AppState, QUICK_ACTIONS};

use super::UpdateResult;

fn wrapped(cursor: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor as isize + step).rem_euclid(len as isize) as usize
}

// ─────────────────────────────────────────────────────────────────
// Home
// ─────────────────────────────────────────────────────────────────

pub fn handle_home_action_move(state: &mut AppState, step: isize) -> UpdateResult {
    state.home.action_cursor = wrapped(state.home.action_cursor, step, QUICK_ACTIONS.len());
    UpdateResult::none()
}

pub fn handle_home_action_run(state: &mut AppState) -> UpdateResult {
    let notice = match state.home.action_cursor {
        0 => "Uploading files",
        1 => "Creating new folder",
        _ => "Sync started",
    };
    state.set_notice(notice);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Open
// ─────────────────────────────────────────────────────────────────

pub fn handle_open_cursor_move(state: &mut AppState, step: isize) -> UpdateResult {
    state.open_view.cursor = wrapped(state.open_view.cursor, step, state.files.len());
    UpdateResult::none()
}

/// Select the file under the cursor; a second activation opens it
pub fn handle_open_activate(state: &mut AppState) -> UpdateResult {
    if state.open_view.selected == Some(state.open_view.cursor) {
        return handle_open_confirm(state);
    }
    state.open_view.selected = Some(state.open_view.cursor);
    UpdateResult::none()
}

/// Open the selected file. Disabled without a selection.
pub fn handle_open_confirm(state: &mut AppState) -> UpdateResult {
    let Some(index) = state.open_view.selected else {
        return UpdateResult::none();
    };
    if let Some(file) = state.files.get(index) {
        state.notice = Some(format!("Opening file: {}", file.name));
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Save As
// ─────────────────────────────────────────────────────────────────

pub fn handle_save_as_start_edit(state: &mut AppState) -> UpdateResult {
    let view = &mut state.save_as;
    match view.focus {
        0 => {
            view.edit_buffer = view.file_name.clone();
            view.editing = true;
        }
        2 => {
            view.edit_buffer = view.location.clone();
            view.editing = true;
        }
        // The type field cycles instead of editing
        _ => view.cycle_type(1),
    }
    UpdateResult::none()
}

pub fn handle_save_as_commit_edit(state: &mut AppState) -> UpdateResult {
    let view = &mut state.save_as;
    if view.editing {
        let text = std::mem::take(&mut view.edit_buffer);
        match view.focus {
            0 => view.file_name = text,
            2 => view.location = text,
            _ => {}
        }
        view.editing = false;
    }
    UpdateResult::none()
}

/// Perform the save. Disabled while the file name is empty.
pub fn handle_save_as_submit(state: &mut AppState) -> UpdateResult {
    if !state.save_as.can_save() {
        return UpdateResult::none();
    }
    state.notice = Some(format!(
        "Saving file: {}.{}",
        state.save_as.file_name.trim(),
        state.save_as.file_type()
    ));
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// File Manager
// ─────────────────────────────────────────────────────────────────

pub fn handle_fm_cursor_move(state: &mut AppState, step: isize) -> UpdateResult {
    state.file_manager.cursor = wrapped(state.file_manager.cursor, step, state.files.len());
    UpdateResult::none()
}

pub fn handle_fm_toggle_select(state: &mut AppState) -> UpdateResult {
    if let Some(file) = state.files.get(state.file_manager.cursor) {
        state.file_manager.toggle(file.id);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Subscription
// ─────────────────────────────────────────────────────────────────

pub fn handle_plan_move(state: &mut AppState, step: isize) -> UpdateResult {
    state.subscription.cursor = wrapped(state.subscription.cursor, step, state.plans.len());
    UpdateResult::none()
}

pub fn handle_plan_choose(state: &mut AppState) -> UpdateResult {
    if let Some(plan) = state.plans.get(state.subscription.cursor) {
        state.notice = Some(format!("Selected plan: {}", plan.name));
    }
    UpdateResult::none()
}

#[cfg(test)]
mod tests {
    use crate::handler::update;
    use crate::message::Message;
    use crate::state::AppState;

    fn drain(state: &mut AppState, mut msg: Message) {
        loop {
            let result = update(state, msg);
            match result.message {
                Some(next) => msg = next,
                None => break,
            }
        }
    }

    #[test]
    fn test_open_select_then_open() {
        let mut state = AppState::new();
        drain(&mut state, Message::OpenCursorNext);
        drain(&mut state, Message::OpenActivate);
        assert_eq!(state.open_view.selected, Some(1));
        assert_eq!(state.notice, None, "first activation only selects");

        drain(&mut state, Message::OpenActivate);
        assert_eq!(
            state.notice.as_deref(),
            Some("Opening file: spreadsheet.xlsx")
        );
    }

    #[test]
    fn test_open_confirm_requires_selection() {
        let mut state = AppState::new();
        drain(&mut state, Message::OpenConfirm);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_open_cursor_wraps() {
        let mut state = AppState::new();
        drain(&mut state, Message::OpenCursorPrev);
        assert_eq!(state.open_view.cursor, 3);
        drain(&mut state, Message::OpenCursorNext);
        assert_eq!(state.open_view.cursor, 0);
    }

    #[test]
    fn test_save_as_edit_and_submit() {
        let mut state = AppState::new();
        drain(&mut state, Message::SaveAsSubmit);
        assert_eq!(state.notice, None, "save disabled with empty name");

        drain(&mut state, Message::SaveAsStartEdit);
        for c in "report".chars() {
            drain(&mut state, Message::SaveAsCharInput(c));
        }
        drain(&mut state, Message::SaveAsCommitEdit);
        assert_eq!(state.save_as.file_name, "report");
        assert!(!state.save_as.editing);

        // Cycle type to pdf
        drain(&mut state, Message::SaveAsCycleType(1));
        drain(&mut state, Message::SaveAsSubmit);
        assert_eq!(state.notice.as_deref(), Some("Saving file: report.pdf"));
    }

    #[test]
    fn test_save_as_cancel_edit_discards() {
        let mut state = AppState::new();
        drain(&mut state, Message::SaveAsStartEdit);
        drain(&mut state, Message::SaveAsCharInput('x'));
        drain(&mut state, Message::SaveAsCancelEdit);
        assert_eq!(state.save_as.file_name, "");
        assert!(!state.save_as.editing);
    }

    #[test]
    fn test_save_as_location_edit() {
        let mut state = AppState::new();
        drain(&mut state, Message::SaveAsFocusNext);
        drain(&mut state, Message::SaveAsFocusNext);
        assert_eq!(state.save_as.focus, 2);
        drain(&mut state, Message::SaveAsStartEdit);
        assert_eq!(state.save_as.edit_buffer, "/home");
        drain(&mut state, Message::SaveAsBackspace);
        drain(&mut state, Message::SaveAsCommitEdit);
        assert_eq!(state.save_as.location, "/hom");
    }

    #[test]
    fn test_fm_selection_toggles() {
        let mut state = AppState::new();
        drain(&mut state, Message::FmToggleSelect);
        assert!(state.file_manager.selected.contains(&1));
        drain(&mut state, Message::FmCursorNext);
        drain(&mut state, Message::FmToggleSelect);
        assert_eq!(state.file_manager.selected.len(), 2);
        drain(&mut state, Message::FmToggleSelect);
        assert_eq!(state.file_manager.selected.len(), 1);
    }

    #[test]
    fn test_fm_header_actions_post_notices() {
        let mut state = AppState::new();
        drain(&mut state, Message::FmRefresh);
        assert_eq!(state.notice.as_deref(), Some("Refreshing file list"));
    }

    #[test]
    fn test_plan_choose() {
        let mut state = AppState::new();
        drain(&mut state, Message::PlanNext);
        drain(&mut state, Message::PlanChoose);
        assert_eq!(state.notice.as_deref(), Some("Selected plan: Pro"));
    }

    #[test]
    fn test_home_quick_actions() {
        let mut state = AppState::new();
        drain(&mut state, Message::HomeActionRun);
        assert_eq!(state.notice.as_deref(), Some("Uploading files"));
        drain(&mut state, Message::HomeActionNext);
        drain(&mut state, Message::HomeActionNext);
        drain(&mut state, Message::HomeActionRun);
        assert_eq!(state.notice.as_deref(), Some("Sync started"));
    }

    #[test]
    fn test_key_press_clears_notice() {
        let mut state = AppState::new();
        drain(&mut state, Message::FmRefresh);
        assert!(state.notice.is_some());
        drain(&mut state, Message::Key(crate::input_key::InputKey::Down));
        assert_eq!(state.notice, None);
    }
}
