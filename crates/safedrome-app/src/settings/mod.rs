//! Settings state: sections, typed field values, and the save lifecycle.
//!
//! All transitions here are pure state mutations, independent of rendering
//! and of real time. Timed behavior (the simulated save latency and the
//! success hold) is driven by the event loop: `begin_save` and `finish_save`
//! tell the caller which timer task to spawn, and the resulting messages are
//! fed back through `update()`. Tests drive the machine by feeding the same
//! messages directly.

mod fields;
mod validate;

pub use fields::{field_spec, fields, FieldSpec};
pub use validate::validate;

use std::collections::HashMap;
use std::time::Duration;

/// Simulated latency of a section save
pub const SAVE_DELAY: Duration = Duration::from_millis(700);

/// How long the "Saved" confirmation stays before returning to idle
pub const SUCCESS_HOLD: Duration = Duration::from_millis(1800);

/// Field ids are the static ids from the field catalog
pub type FieldId = &'static str;

/// A settings section (one tab in the settings panel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Account,
    Appearance,
    Storage,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Account, SectionId::Appearance, SectionId::Storage];

    /// Stable key used in the preferences file
    pub fn key(&self) -> &'static str {
        match self {
            SectionId::Account => "account",
            SectionId::Appearance => "appearance",
            SectionId::Storage => "storage",
        }
    }

    /// Tab label in the settings panel
    pub fn tab_label(&self) -> &'static str {
        match self {
            SectionId::Account => "Account Settings",
            SectionId::Appearance => "Appearance",
            SectionId::Storage => "Storage",
        }
    }

    /// Section header shown above the field list
    pub fn header(&self) -> (&'static str, &'static str) {
        match self {
            SectionId::Account => (
                "Account Settings",
                "Manage your account credentials and identity",
            ),
            SectionId::Appearance => ("Appearance", "Control how SafeDrome looks"),
            SectionId::Storage => ("Storage", "Backups, limits and compression"),
        }
    }

    pub fn next(&self) -> SectionId {
        match self {
            SectionId::Account => SectionId::Appearance,
            SectionId::Appearance => SectionId::Storage,
            SectionId::Storage => SectionId::Account,
        }
    }

    pub fn prev(&self) -> SectionId {
        match self {
            SectionId::Account => SectionId::Storage,
            SectionId::Appearance => SectionId::Account,
            SectionId::Storage => SectionId::Appearance,
        }
    }
}

/// Typed value of a settings field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
    Choice(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            FieldValue::Toggle(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            FieldValue::Choice(s) => Some(s),
            _ => None,
        }
    }
}

/// Save lifecycle of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Success,
    Error,
}

/// Live state of one settings section
#[derive(Debug, Clone)]
pub struct SectionState {
    pub id: SectionId,
    /// Current (possibly unsaved) values, in catalog order
    pub values: Vec<(FieldId, FieldValue)>,
    /// Baseline restored by reset: last successful save, or the defaults
    pub saved: Vec<(FieldId, FieldValue)>,
    pub dirty: bool,
    pub errors: HashMap<FieldId, String>,
    pub save_state: SaveState,
    /// Failure message from the last save attempt, if any
    pub save_error: Option<String>,
    /// Bumped on every save start; stale hold timers are discarded by it
    pub epoch: u64,
}

impl SectionState {
    fn new(id: SectionId) -> Self {
        let values: Vec<(FieldId, FieldValue)> = fields(id)
            .into_iter()
            .map(|spec| (spec.id, spec.default))
            .collect();
        Self {
            id,
            saved: values.clone(),
            values,
            dirty: false,
            errors: HashMap::new(),
            save_state: SaveState::default(),
            save_error: None,
            epoch: 0,
        }
    }

    /// Current value of a field, if the id is known
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.iter().find(|(id, _)| *id == field).map(|(_, v)| v)
    }

    fn set_value(&mut self, field: &str, value: FieldValue) -> bool {
        match self.values.iter_mut().find(|(id, _)| *id == field) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// All settings sections
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub account: SectionState,
    pub appearance: SectionState,
    pub storage: SectionState,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            account: SectionState::new(SectionId::Account),
            appearance: SectionState::new(SectionId::Appearance),
            storage: SectionState::new(SectionId::Storage),
        }
    }
}

impl SettingsState {
    pub fn section(&self, id: SectionId) -> &SectionState {
        match id {
            SectionId::Account => &self.account,
            SectionId::Appearance => &self.appearance,
            SectionId::Storage => &self.storage,
        }
    }

    pub fn section_mut(&mut self, id: SectionId) -> &mut SectionState {
        match id {
            SectionId::Account => &mut self.account,
            SectionId::Appearance => &mut self.appearance,
            SectionId::Storage => &mut self.storage,
        }
    }

    /// Overwrite one field and mark the section dirty. Validation only
    /// happens on an explicit `validate_section` or `begin_save`.
    ///
    /// Editing while the section shows Success or Error drops it back to
    /// Idle. Returns `false` (and changes nothing) for an unknown field id.
    pub fn set_field(&mut self, section: SectionId, field: &str, value: FieldValue) -> bool {
        let state = self.section_mut(section);
        if !state.set_value(field, value) {
            tracing::warn!("Unknown settings field: {}.{}", section.key(), field);
            return false;
        }
        state.dirty = true;
        if matches!(state.save_state, SaveState::Success | SaveState::Error) {
            state.save_state = SaveState::Idle;
            state.save_error = None;
        }
        true
    }

    /// Rebuild a section's error map; returns whether it came out empty
    pub fn validate_section(&mut self, section: SectionId) -> bool {
        let state = self.section_mut(section);
        state.errors = validate(section, &state.values);
        state.errors.is_empty()
    }

    /// Restore the saved baseline. No-op unless the section is resettable.
    pub fn reset_section(&mut self, section: SectionId) -> bool {
        if !self.can_reset(section) {
            return false;
        }
        let state = self.section_mut(section);
        state.values = state.saved.clone();
        state.dirty = false;
        state.errors.clear();
        state.save_state = SaveState::Idle;
        state.save_error = None;
        true
    }

    /// Start a save: validates first and aborts (returning `None`) when the
    /// section has errors or a save is already in flight. On success the
    /// section enters Saving and the new epoch is returned; the caller owns
    /// spawning the latency task.
    pub fn begin_save(&mut self, section: SectionId) -> Option<u64> {
        if !self.validate_section(section) {
            return None;
        }
        let state = self.section_mut(section);
        if state.save_state == SaveState::Saving {
            return None;
        }
        state.save_state = SaveState::Saving;
        state.save_error = None;
        state.epoch += 1;
        Some(state.epoch)
    }

    /// Complete an in-flight save.
    ///
    /// On `Ok` the current values become the new baseline, dirty clears, and
    /// the section shows Success; the returned epoch is for the hold timer.
    /// On `Err` the section shows Error with the message (the Retry
    /// affordance re-runs `begin_save`). Ignored if the section is not
    /// actually Saving.
    pub fn finish_save(
        &mut self,
        section: SectionId,
        result: Result<(), String>,
    ) -> Option<u64> {
        let state = self.section_mut(section);
        if state.save_state != SaveState::Saving {
            return None;
        }
        match result {
            Ok(()) => {
                state.saved = state.values.clone();
                state.dirty = false;
                state.save_state = SaveState::Success;
                Some(state.epoch)
            }
            Err(message) => {
                state.save_state = SaveState::Error;
                state.save_error = Some(message);
                None
            }
        }
    }

    /// End the Success hold, but only for the save that started it.
    /// A stale epoch (another save began meanwhile) is ignored.
    pub fn expire_success(&mut self, section: SectionId, epoch: u64) -> bool {
        let state = self.section_mut(section);
        if state.save_state == SaveState::Success && state.epoch == epoch {
            state.save_state = SaveState::Idle;
            true
        } else {
            false
        }
    }

    /// Restore a field's value AND baseline without marking dirty.
    /// Used when loading persisted preferences at startup.
    pub fn restore_field(&mut self, section: SectionId, field: &str, value: FieldValue) -> bool {
        let Some(spec) = field_spec(section, field) else {
            return false;
        };
        let state = self.section_mut(section);
        if !state.set_value(spec.id, value.clone()) {
            return false;
        }
        if let Some((_, slot)) = state.saved.iter_mut().find(|(id, _)| *id == spec.id) {
            *slot = value;
        }
        true
    }

    pub fn any_dirty(&self) -> bool {
        SectionId::ALL.iter().any(|id| self.section(*id).dirty)
    }

    pub fn dirty_sections(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|id| self.section(*id).dirty)
            .collect()
    }

    /// Whether the save action is currently enabled for a section
    pub fn can_save(&self, section: SectionId) -> bool {
        let state = self.section(section);
        match state.save_state {
            SaveState::Idle => state.dirty,
            SaveState::Saving | SaveState::Success => false,
            SaveState::Error => true,
        }
    }

    /// Whether the reset action is currently enabled for a section
    pub fn can_reset(&self, section: SectionId) -> bool {
        let state = self.section(section);
        state.dirty && state.save_state != SaveState::Saving
    }
}
