//! Application state (Model in TEA pattern)

use std::collections::HashSet;
use std::path::PathBuf;

use safedrome_core::{plans, sample_files, FileEntry, Plan};

use crate::message::Message;
use crate::settings::{fields, SectionId, SettingsState};

/// Top-level UI mode: which surface owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Sidebar + active page
    #[default]
    Normal,
    /// The two-choice action popup is open
    ActionPopup,
    /// A confirm dialog is open
    ConfirmDialog,
}

/// The pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Open,
    SaveAs,
    FileManager,
    Subscription,
    Settings,
}

/// One sidebar entry
#[derive(Debug, Clone, Copy)]
pub struct SidebarEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub page: Page,
    /// Open/Save As show the action popup instead of navigating
    pub opens_popup: bool,
}

/// The sidebar menu, in display order
pub const SIDEBAR_ENTRIES: [SidebarEntry; 6] = [
    SidebarEntry {
        icon: "🏠",
        label: "Home",
        page: Page::Home,
        opens_popup: false,
    },
    SidebarEntry {
        icon: "📂",
        label: "Open",
        page: Page::Open,
        opens_popup: true,
    },
    SidebarEntry {
        icon: "💾",
        label: "Save As",
        page: Page::SaveAs,
        opens_popup: true,
    },
    SidebarEntry {
        icon: "📁",
        label: "File Manager",
        page: Page::FileManager,
        opens_popup: false,
    },
    SidebarEntry {
        icon: "💳",
        label: "Subscription",
        page: Page::Subscription,
        opens_popup: false,
    },
    SidebarEntry {
        icon: "⚙️",
        label: "Settings",
        page: Page::Settings,
        opens_popup: false,
    },
];

impl Page {
    /// Index of this page's sidebar entry
    pub fn sidebar_index(&self) -> usize {
        SIDEBAR_ENTRIES
            .iter()
            .position(|entry| entry.page == *self)
            .unwrap_or(0)
    }
}

/// Which pane receives page-level keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

// ─────────────────────────────────────────────────────────────────
// Per-page view state
// ─────────────────────────────────────────────────────────────────

/// Quick actions on the Home page
pub const QUICK_ACTIONS: [&str; 3] = ["Upload File", "Create Folder", "Sync Now"];

#[derive(Debug, Clone, Default)]
pub struct HomeViewState {
    /// Highlighted quick action
    pub action_cursor: usize,
}

/// Open page: cursor walks the catalog, selection is explicit
#[derive(Debug, Clone, Default)]
pub struct OpenViewState {
    pub cursor: usize,
    pub selected: Option<usize>,
}

/// Save As file type options: (extension, display label)
pub const FILE_TYPES: [(&str, &str); 4] = [
    ("txt", "Text File (.txt)"),
    ("pdf", "PDF Document (.pdf)"),
    ("docx", "Word Document (.docx)"),
    ("xlsx", "Excel Spreadsheet (.xlsx)"),
];

/// Save As form fields, by focus index
pub const SAVE_AS_FIELDS: [&str; 3] = ["File Name", "File Type", "Location"];

#[derive(Debug, Clone)]
pub struct SaveAsViewState {
    /// Focused field: 0 name, 1 type, 2 location
    pub focus: usize,
    pub file_name: String,
    pub file_type_idx: usize,
    pub location: String,
    /// Whether a text field is in edit mode
    pub editing: bool,
    pub edit_buffer: String,
}

impl Default for SaveAsViewState {
    fn default() -> Self {
        Self {
            focus: 0,
            file_name: String::new(),
            file_type_idx: 0,
            location: "/home".to_string(),
            editing: false,
            edit_buffer: String::new(),
        }
    }
}

impl SaveAsViewState {
    /// Extension of the chosen file type
    pub fn file_type(&self) -> &'static str {
        FILE_TYPES[self.file_type_idx % FILE_TYPES.len()].0
    }

    pub fn can_save(&self) -> bool {
        !self.file_name.trim().is_empty()
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % SAVE_AS_FIELDS.len();
        self.editing = false;
        self.edit_buffer.clear();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + SAVE_AS_FIELDS.len() - 1) % SAVE_AS_FIELDS.len();
        self.editing = false;
        self.edit_buffer.clear();
    }

    pub fn cycle_type(&mut self, step: isize) {
        let len = FILE_TYPES.len() as isize;
        let idx = self.file_type_idx as isize + step;
        self.file_type_idx = idx.rem_euclid(len) as usize;
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileManagerViewState {
    pub cursor: usize,
    /// Selected file ids
    pub selected: HashSet<u32>,
}

impl FileManagerViewState {
    pub fn toggle(&mut self, id: u32) {
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionViewState {
    /// Highlighted plan
    pub cursor: usize,
}

/// View state of the settings panel (which section, which field, edit mode)
#[derive(Debug, Clone)]
pub struct SettingsViewState {
    pub section: SectionId,
    pub cursor: usize,
    pub editing: bool,
    pub edit_buffer: String,
}

impl Default for SettingsViewState {
    fn default() -> Self {
        Self {
            section: SectionId::Account,
            cursor: 0,
            editing: false,
            edit_buffer: String::new(),
        }
    }
}

impl SettingsViewState {
    pub fn next_section(&mut self) {
        self.section = self.section.next();
        self.cursor = 0;
        self.stop_editing();
    }

    pub fn prev_section(&mut self) {
        self.section = self.section.prev();
        self.cursor = 0;
        self.stop_editing();
    }

    pub fn goto_section(&mut self, section: SectionId) {
        self.section = section;
        self.cursor = 0;
        self.stop_editing();
    }

    /// Move the field cursor down, wrapping
    pub fn select_next(&mut self) {
        let count = fields(self.section).len();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
        self.stop_editing();
    }

    /// Move the field cursor up, wrapping
    pub fn select_prev(&mut self) {
        let count = fields(self.section).len();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
        self.stop_editing();
    }

    pub fn start_editing(&mut self, current: &str) {
        self.editing = true;
        self.edit_buffer = current.to_string();
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }
}

// ─────────────────────────────────────────────────────────────────
// Confirm dialog
// ─────────────────────────────────────────────────────────────────

/// Data model for confirmation dialogs. The rendering widget lives in
/// safedrome-tui.
#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
    pub selected: usize,
}

impl ConfirmDialogState {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
        }
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Application state
// ─────────────────────────────────────────────────────────────────

/// The action popup's two choices
#[derive(Debug, Clone, Default)]
pub struct ActionPopupState {
    /// 0 = Open File, 1 = Save As
    pub selected: usize,
}

impl ActionPopupState {
    pub fn toggle(&mut self) {
        self.selected = 1 - self.selected;
    }
}

/// Complete application state (Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub page: Page,
    pub ui_mode: UiMode,
    pub focus: Focus,
    /// Sidebar keyboard highlight (the active page marker is `page`)
    pub sidebar_cursor: usize,
    pub popup: ActionPopupState,
    pub confirm_dialog: Option<ConfirmDialogState>,
    /// Navigation target parked while the unsaved-changes dialog is open
    pub pending_page: Option<Page>,

    pub files: Vec<FileEntry>,
    pub plans: Vec<Plan>,

    pub home: HomeViewState,
    pub open_view: OpenViewState,
    pub save_as: SaveAsViewState,
    pub file_manager: FileManagerViewState,
    pub subscription: SubscriptionViewState,

    pub settings: SettingsState,
    pub settings_view: SettingsViewState,

    /// Transient status line; cleared on the next key press
    pub notice: Option<String>,
    /// Preferences file path; `None` runs fully in-memory
    pub prefs_path: Option<PathBuf>,

    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::default(),
            ui_mode: UiMode::default(),
            focus: Focus::default(),
            sidebar_cursor: 0,
            popup: ActionPopupState::default(),
            confirm_dialog: None,
            pending_page: None,
            files: sample_files(),
            plans: plans(),
            home: HomeViewState::default(),
            open_view: OpenViewState::default(),
            save_as: SaveAsViewState::default(),
            file_manager: FileManagerViewState::default(),
            subscription: SubscriptionViewState::default(),
            settings: SettingsState::default(),
            settings_view: SettingsViewState::default(),
            notice: None,
            prefs_path: None,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build state with persisted preferences applied (when a path is given)
    pub fn with_preferences(prefs_path: Option<PathBuf>) -> Self {
        let mut state = Self::default();
        if let Some(path) = &prefs_path {
            match crate::config::load(path) {
                Ok(prefs) => crate::config::apply(&prefs, &mut state.settings),
                Err(err) => {
                    tracing::warn!("Could not load preferences from {}: {err}", path.display())
                }
            }
        }
        state.prefs_path = prefs_path;
        state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn show_popup(&mut self) {
        self.popup = ActionPopupState::default();
        self.ui_mode = UiMode::ActionPopup;
    }

    pub fn hide_popup(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn open_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    pub fn close_dialog(&mut self) {
        self.confirm_dialog = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
    }
}
