//! Theme constants for the SafeDrome UI

pub mod palette;
