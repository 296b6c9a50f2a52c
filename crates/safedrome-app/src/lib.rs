//! # safedrome-app - Application State and Orchestration
//!
//! The TEA-style core of SafeDrome: `AppState` (Model), [`Message`], and
//! `update()` with its handlers. Rendering lives in safedrome-tui; this
//! crate has no terminal dependency.
//!
//! ## Public API
//!
//! - [`state::AppState`] - complete application state
//! - [`message::Message`] - all state-update messages
//! - [`handler::update`] - the update function
//! - [`handler::UpdateAction`] / [`handler::Task`] - event-loop side effects
//! - [`settings`] - the settings sections and save lifecycle
//! - [`config`] - TOML preferences persistence

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod settings;
pub mod state;

pub use handler::{update, SectionSave, Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
