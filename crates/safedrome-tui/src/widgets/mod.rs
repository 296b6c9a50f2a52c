//! TUI widgets

pub mod action_popup;
pub mod confirm_dialog;
pub mod file_manager;
pub mod form;
pub mod home;
pub mod modal;
pub mod open;
pub mod save_as;
pub mod settings_panel;
pub mod sidebar;
pub mod status_bar;
pub mod subscription;

pub use action_popup::ActionPopup;
pub use confirm_dialog::ConfirmDialog;
pub use file_manager::FileManager;
pub use home::Home;
pub use open::Open;
pub use save_as::SaveAs;
pub use settings_panel::SettingsPanel;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use subscription::Subscription;
