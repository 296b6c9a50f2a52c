//! SafeDrome - a TUI shell for secure file management
//!
//! Binary entry point. State and logic live in safedrome-app, rendering
//! and the event loop in safedrome-tui.

use std::path::PathBuf;

use clap::Parser;
use safedrome_core::prelude::*;

/// SafeDrome - a TUI shell for secure file management
#[derive(Parser, Debug)]
#[command(name = "safedrome")]
#[command(about = "A TUI shell for secure file management", long_about = None)]
struct Args {
    /// Preferences file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run without reading or writing the preferences file
    #[arg(long)]
    no_persist: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    safedrome_core::logging::init()?;

    let prefs_path = if args.no_persist {
        None
    } else {
        args.config.or_else(safedrome_app::config::default_path)
    };
    match &prefs_path {
        Some(path) => info!("Using preferences file {}", path.display()),
        None => info!("Running without settings persistence"),
    }

    safedrome_tui::run(prefs_path).await
}
