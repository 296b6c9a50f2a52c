//! # safedrome-tui - Terminal User Interface
//!
//! Renders [`safedrome_app::AppState`] with ratatui and drives the event
//! loop: terminal input, ticks and timer tasks all feed the single message
//! channel consumed by `update()`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use runner::run;
