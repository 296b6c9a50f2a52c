//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes and pages
//! - `navigation`: Sidebar, popup, dialog and quit handlers
//! - `pages`: Home, Open, Save As, File Manager, Subscription handlers
//! - `settings_handlers`: Settings page handlers and the save lifecycle

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod settings_handlers;
pub(crate) mod update;

use std::path::PathBuf;

use crate::message::Message;
use crate::settings::{FieldId, FieldValue, SectionId};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),
}

/// A snapshot of one section's values at save time
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSave {
    pub section: SectionId,
    pub values: Vec<(FieldId, FieldValue)>,
}

/// Background tasks to spawn
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Sleep for the save latency, persist when a path is set, then send
    /// one `SettingsSaveFinished` per section
    SaveSections {
        sections: Vec<SectionSave>,
        path: Option<PathBuf>,
    },
    /// Sleep for the success hold, then send `SettingsSaveExpired`
    HoldSuccess { section: SectionId, epoch: u64 },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
