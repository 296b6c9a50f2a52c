//! Settings page handlers and the section save lifecycle

use tracing::{error, info};

use crate::message::Message;
use crate::settings::{fields, FieldValue, SectionId};
use crate::state::{AppState, Page};

use super::{navigation, SectionSave, Task, UpdateAction, UpdateResult};

/// Activate the field under the cursor: text fields enter edit mode,
/// toggles flip, choice fields cycle forward.
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let section = state.settings_view.section;
    let specs = fields(section);
    let Some(spec) = specs.get(state.settings_view.cursor) else {
        return UpdateResult::none();
    };
    let current = state.settings.section(section).value(spec.id).cloned();
    match current {
        Some(FieldValue::Text(text)) => {
            state.settings_view.start_editing(&text);
            UpdateResult::none()
        }
        Some(FieldValue::Toggle(value)) => {
            state
                .settings
                .set_field(section, spec.id, FieldValue::Toggle(!value));
            UpdateResult::none()
        }
        Some(FieldValue::Choice(_)) => handle_cycle_choice(state, 1),
        None => UpdateResult::none(),
    }
}

/// Commit the edit buffer into the focused text field
pub fn handle_commit_edit(state: &mut AppState) -> UpdateResult {
    if !state.settings_view.editing {
        return UpdateResult::none();
    }
    let section = state.settings_view.section;
    let specs = fields(section);
    let Some(spec) = specs.get(state.settings_view.cursor) else {
        state.settings_view.stop_editing();
        return UpdateResult::none();
    };
    let text = state.settings_view.edit_buffer.clone();
    state
        .settings
        .set_field(section, spec.id, FieldValue::Text(text));
    state.settings_view.stop_editing();
    UpdateResult::none()
}

/// Cycle the focused choice field through its options
pub fn handle_cycle_choice(state: &mut AppState, step: isize) -> UpdateResult {
    let section = state.settings_view.section;
    let specs = fields(section);
    let Some(spec) = specs.get(state.settings_view.cursor) else {
        return UpdateResult::none();
    };
    if !spec.is_choice() {
        return UpdateResult::none();
    }
    let current = state
        .settings
        .section(section)
        .value(spec.id)
        .and_then(|v| v.as_choice())
        .unwrap_or_default();
    // An out-of-catalog value cycles back onto the option list
    let len = spec.options.len() as isize;
    let index = spec.option_index(current).unwrap_or(0) as isize + step;
    let next = spec.options[index.rem_euclid(len) as usize].0;
    state
        .settings
        .set_field(section, spec.id, FieldValue::Choice(next.to_string()));
    UpdateResult::none()
}

/// Save (or retry) the active section
pub fn handle_save(state: &mut AppState) -> UpdateResult {
    let section = state.settings_view.section;
    if !state.settings.can_save(section) {
        return UpdateResult::none();
    }
    begin_saves(state, vec![section])
}

/// Reset the active section to its saved baseline
pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    let section = state.settings_view.section;
    if state.settings.reset_section(section) {
        state.settings_view.stop_editing();
        info!("Reset settings section '{}'", section.key());
    }
    UpdateResult::none()
}

/// Dialog choice: save all dirty sections, then leave to the parked page.
///
/// If any dirty section fails validation the close is aborted and the view
/// jumps to the first offending section.
pub fn handle_save_and_close(state: &mut AppState) -> UpdateResult {
    let dirty = state.settings.dirty_sections();
    if let Some(invalid) = dirty
        .iter()
        .copied()
        .find(|section| !state.settings.validate_section(*section))
    {
        state.pending_page = None;
        state.settings_view.goto_section(invalid);
        return UpdateResult::none();
    }

    let result = begin_saves(state, dirty);
    let target = state.pending_page.take().unwrap_or(Page::Home);
    navigation::do_navigate(state, target);
    result
}

/// Dialog choice: drop all dirty sections, then leave to the parked page
pub fn handle_discard_and_close(state: &mut AppState) -> UpdateResult {
    for section in state.settings.dirty_sections() {
        state.settings.reset_section(section);
    }
    state.settings_view.stop_editing();
    let target = state.pending_page.take().unwrap_or(Page::Home);
    navigation::do_navigate(state, target);
    UpdateResult::none()
}

/// Move sections into Saving and emit the save task with their snapshots
fn begin_saves(state: &mut AppState, sections: Vec<SectionId>) -> UpdateResult {
    let mut saves = Vec::new();
    for section in sections {
        if state.settings.begin_save(section).is_some() {
            saves.push(SectionSave {
                section,
                values: state.settings.section(section).values.clone(),
            });
        }
    }
    if saves.is_empty() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::SpawnTask(Task::SaveSections {
        sections: saves,
        path: state.prefs_path.clone(),
    }))
}

/// A section save came back from the save task
pub fn handle_save_finished(
    state: &mut AppState,
    section: SectionId,
    result: Result<(), String>,
) -> UpdateResult {
    match &result {
        Ok(()) => info!("Settings section '{}' saved", section.key()),
        Err(reason) => error!("Settings section '{}' save failed: {}", section.key(), reason),
    }
    match state.settings.finish_save(section, result) {
        Some(epoch) => UpdateResult::action(UpdateAction::SpawnTask(Task::HoldSuccess {
            section,
            epoch,
        })),
        None => UpdateResult::none(),
    }
}

/// The success hold elapsed; return to idle unless the save is stale
pub fn handle_save_expired(state: &mut AppState, section: SectionId, epoch: u64) -> UpdateResult {
    state.settings.expire_success(section, epoch);
    UpdateResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::update;
    use crate::settings::SaveState;
    use crate::state::UiMode;

    fn settings_state() -> AppState {
        let mut state = AppState::new();
        state.page = Page::Settings;
        state.sidebar_cursor = Page::Settings.sidebar_index();
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        update(state, Message::SettingsActivate);
        state.settings_view.edit_buffer.clear();
        for c in text.chars() {
            update(state, Message::SettingsCharInput(c));
        }
        update(state, Message::SettingsCommitEdit);
    }

    #[test]
    fn test_edit_text_field() {
        let mut state = settings_state();
        type_text(&mut state, "Ada");
        assert_eq!(
            state.settings.account.value("username"),
            Some(&FieldValue::Text("Ada".into()))
        );
        assert!(state.settings.account.dirty);
        assert!(!state.settings_view.editing);
    }

    #[test]
    fn test_toggle_field() {
        let mut state = settings_state();
        state.settings_view.cursor = 2; // notifications
        update(&mut state, Message::SettingsActivate);
        assert_eq!(
            state.settings.account.value("notifications"),
            Some(&FieldValue::Toggle(false))
        );
    }

    #[test]
    fn test_choice_field_cycles() {
        let mut state = settings_state();
        state.settings_view.goto_section(SectionId::Appearance);
        // theme: light -> dark -> system, starting at dark
        update(&mut state, Message::SettingsActivate);
        assert_eq!(
            state.settings.appearance.value("theme"),
            Some(&FieldValue::Choice("system".into()))
        );
        update(&mut state, Message::SettingsCycleChoice(-1));
        assert_eq!(
            state.settings.appearance.value("theme"),
            Some(&FieldValue::Choice("dark".into()))
        );
    }

    #[test]
    fn test_save_emits_task_with_snapshot() {
        let mut state = settings_state();
        type_text(&mut state, "Ada");

        let result = update(&mut state, Message::SettingsSave);
        let Some(UpdateAction::SpawnTask(Task::SaveSections { sections, .. })) = result.action
        else {
            panic!("expected a save task");
        };
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section, SectionId::Account);
        assert!(sections[0]
            .values
            .contains(&("username", FieldValue::Text("Ada".into()))));
        assert_eq!(state.settings.account.save_state, SaveState::Saving);
    }

    #[test]
    fn test_save_disabled_when_clean() {
        let mut state = settings_state();
        let result = update(&mut state, Message::SettingsSave);
        assert!(result.action.is_none());
        assert_eq!(state.settings.account.save_state, SaveState::Idle);
    }

    #[test]
    fn test_invalid_section_save_aborts() {
        let mut state = settings_state();
        type_text(&mut state, "ab");
        let result = update(&mut state, Message::SettingsSave);
        assert!(result.action.is_none());
        assert_eq!(state.settings.account.save_state, SaveState::Idle);
        assert!(state.settings.account.errors.contains_key("username"));
    }

    #[test]
    fn test_full_save_lifecycle_via_messages() {
        let mut state = settings_state();
        type_text(&mut state, "Ada");
        update(&mut state, Message::SettingsSave);

        let result = update(
            &mut state,
            Message::SettingsSaveFinished {
                section: SectionId::Account,
                result: Ok(()),
            },
        );
        assert_eq!(state.settings.account.save_state, SaveState::Success);
        assert!(!state.settings.account.dirty);
        let Some(UpdateAction::SpawnTask(Task::HoldSuccess { section, epoch })) = result.action
        else {
            panic!("expected a hold task");
        };
        assert_eq!(section, SectionId::Account);

        update(&mut state, Message::SettingsSaveExpired { section, epoch });
        assert_eq!(state.settings.account.save_state, SaveState::Idle);
    }

    #[test]
    fn test_failed_save_then_retry() {
        let mut state = settings_state();
        type_text(&mut state, "Ada");
        update(&mut state, Message::SettingsSave);
        let result = update(
            &mut state,
            Message::SettingsSaveFinished {
                section: SectionId::Account,
                result: Err("disk full".into()),
            },
        );
        assert!(result.action.is_none(), "no hold timer on failure");
        assert_eq!(state.settings.account.save_state, SaveState::Error);
        assert!(state.settings.account.dirty);

        // Retry goes straight back into Saving
        let result = update(&mut state, Message::SettingsSave);
        assert!(result.action.is_some());
        assert_eq!(state.settings.account.save_state, SaveState::Saving);
    }

    #[test]
    fn test_stale_expiry_message_ignored() {
        let mut state = settings_state();
        type_text(&mut state, "Ada");
        update(&mut state, Message::SettingsSave);
        update(
            &mut state,
            Message::SettingsSaveFinished {
                section: SectionId::Account,
                result: Ok(()),
            },
        );
        let stale_epoch = state.settings.account.epoch;

        // New edit and save during the hold window
        type_text(&mut state, "Grace");
        update(&mut state, Message::SettingsSave);
        update(
            &mut state,
            Message::SettingsSaveExpired {
                section: SectionId::Account,
                epoch: stale_epoch,
            },
        );
        assert_eq!(state.settings.account.save_state, SaveState::Saving);
    }

    #[test]
    fn test_reset_via_message() {
        let mut state = settings_state();
        type_text(&mut state, "Ada");
        update(&mut state, Message::SettingsReset);
        assert!(!state.settings.account.dirty);
        assert_eq!(
            state.settings.account.value("username"),
            Some(&FieldValue::Text("User".into()))
        );
    }

    #[test]
    fn test_save_and_close_saves_all_dirty_and_navigates() {
        let mut state = settings_state();
        type_text(&mut state, "Ada");
        state
            .settings
            .set_field(SectionId::Storage, "compression", FieldValue::Toggle(false));
        state.pending_page = Some(Page::Home);

        let result = update(&mut state, Message::SettingsSaveAndClose);
        let Some(UpdateAction::SpawnTask(Task::SaveSections { sections, .. })) = result.action
        else {
            panic!("expected a save task");
        };
        assert_eq!(sections.len(), 2);
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.settings.account.save_state, SaveState::Saving);
        assert_eq!(state.settings.storage.save_state, SaveState::Saving);
    }

    #[test]
    fn test_save_and_close_aborts_on_invalid_section() {
        let mut state = settings_state();
        state
            .settings
            .set_field(SectionId::Account, "email", FieldValue::Text("nope".into()));
        state.pending_page = Some(Page::Home);

        let result = update(&mut state, Message::SettingsSaveAndClose);
        assert!(result.action.is_none());
        assert_eq!(state.page, Page::Settings);
        assert_eq!(state.pending_page, None);
        assert_eq!(state.settings_view.section, SectionId::Account);
    }

    #[test]
    fn test_cancel_edit_keeps_value() {
        let mut state = settings_state();
        update(&mut state, Message::SettingsActivate);
        update(&mut state, Message::SettingsCharInput('x'));
        update(&mut state, Message::SettingsCancelEdit);
        assert_eq!(
            state.settings.account.value("username"),
            Some(&FieldValue::Text("User".into()))
        );
        assert!(!state.settings.account.dirty);
    }

    #[test]
    fn test_section_tabs_cycle() {
        let mut state = settings_state();
        update(&mut state, Message::SettingsNextSection);
        assert_eq!(state.settings_view.section, SectionId::Appearance);
        update(&mut state, Message::SettingsPrevSection);
        update(&mut state, Message::SettingsPrevSection);
        assert_eq!(state.settings_view.section, SectionId::Storage);
        assert_eq!(state.ui_mode, UiMode::Normal);
    }
}
