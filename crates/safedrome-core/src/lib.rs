//! # safedrome-core - Core Domain Types
//!
//! Foundation crate for SafeDrome. Provides the error type, logging setup,
//! and the static catalogs (demo files, subscription plans) the UI renders.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Catalogs
//! - [`FileEntry`], [`FileKind`], [`sample_files()`] - the demo file catalog
//! - [`Plan`], [`plans()`], [`Highlight`], [`highlights()`] - subscription tiers
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use safedrome_core::prelude::*;
//! ```

pub mod error;
pub mod files;
pub mod logging;
pub mod plans;

/// Prelude for common imports used throughout all SafeDrome crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use files::{sample_files, FileEntry, FileKind};
pub use plans::{features, highlights, plans, Highlight, Plan};
