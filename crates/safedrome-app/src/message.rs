//! Message types for state updates (TEA pattern)

use crate::input_key::InputKey;
use crate::settings::SectionId;
use crate::state::Page;

/// Messages that drive state updates
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Global Messages
    // ─────────────────────────────────────────────────────────
    /// Raw key input, routed by UI mode and page
    Key(InputKey),
    /// Periodic tick from the event loop (no key pending)
    Tick,
    /// Ask to quit; may open the unsaved-changes dialog
    RequestQuit,
    /// Quit immediately
    Quit,
    /// Dialog-confirmed quit
    ConfirmQuit,
    /// Dialog-cancelled quit
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Switch to a page (guarded by the unsaved-settings check)
    Navigate(Page),
    /// Move the sidebar highlight down
    SidebarNext,
    /// Move the sidebar highlight up
    SidebarPrev,
    /// Activate the highlighted sidebar entry
    SidebarActivate,
    /// Activate a sidebar entry by index (number-key shortcut)
    ActivateEntry(usize),
    /// Toggle focus between sidebar and page content
    FocusToggle,
    /// Give the sidebar keyboard focus
    FocusSidebar,

    // ─────────────────────────────────────────────────────────
    // Action Popup Messages
    // ─────────────────────────────────────────────────────────
    /// Open the two-choice action popup
    ShowActionPopup,
    /// Close the popup without choosing
    HideActionPopup,
    /// Move between the popup's two choices
    PopupToggle,
    /// Activate the highlighted popup choice
    PopupConfirm,

    // ─────────────────────────────────────────────────────────
    // Confirm Dialog Messages
    // ─────────────────────────────────────────────────────────
    /// Highlight the next dialog option
    DialogNext,
    /// Highlight the previous dialog option
    DialogPrev,
    /// Activate the highlighted dialog option
    DialogConfirm,
    /// Close the dialog without activating anything
    DialogDismiss,

    // ─────────────────────────────────────────────────────────
    // Home Page Messages
    // ─────────────────────────────────────────────────────────
    /// Highlight the next quick action
    HomeActionNext,
    /// Highlight the previous quick action
    HomeActionPrev,
    /// Run the highlighted quick action
    HomeActionRun,

    // ─────────────────────────────────────────────────────────
    // Open Page Messages
    // ─────────────────────────────────────────────────────────
    /// Move the file cursor down
    OpenCursorNext,
    /// Move the file cursor up
    OpenCursorPrev,
    /// Select the file under the cursor, or open it if already selected
    OpenActivate,
    /// Open the selected file (disabled without a selection)
    OpenConfirm,
    /// Leave the Open page back to Home
    OpenCancel,

    // ─────────────────────────────────────────────────────────
    // Save As Page Messages
    // ─────────────────────────────────────────────────────────
    /// Focus the next form field
    SaveAsFocusNext,
    /// Focus the previous form field
    SaveAsFocusPrev,
    /// Begin editing the focused text field
    SaveAsStartEdit,
    /// Append a character to the edit buffer
    SaveAsCharInput(char),
    /// Delete the last character of the edit buffer
    SaveAsBackspace,
    /// Commit the edit buffer into the focused field
    SaveAsCommitEdit,
    /// Discard the edit buffer
    SaveAsCancelEdit,
    /// Cycle the file type field (+1 / -1)
    SaveAsCycleType(isize),
    /// Perform the save (disabled while the name is empty)
    SaveAsSubmit,
    /// Leave the Save As page back to Home
    SaveAsCancel,

    // ─────────────────────────────────────────────────────────
    // File Manager Messages
    // ─────────────────────────────────────────────────────────
    /// Move the row cursor down
    FmCursorNext,
    /// Move the row cursor up
    FmCursorPrev,
    /// Toggle selection of the row under the cursor
    FmToggleSelect,
    /// Header action: new folder
    FmNewFolder,
    /// Header action: upload
    FmUpload,
    /// Header action: refresh
    FmRefresh,

    // ─────────────────────────────────────────────────────────
    // Subscription Messages
    // ─────────────────────────────────────────────────────────
    /// Highlight the next plan
    PlanNext,
    /// Highlight the previous plan
    PlanPrev,
    /// Choose the highlighted plan
    PlanChoose,

    // ─────────────────────────────────────────────────────────
    // Settings Messages
    // ─────────────────────────────────────────────────────────
    /// Switch to the next section tab
    SettingsNextSection,
    /// Switch to the previous section tab
    SettingsPrevSection,
    /// Move the field cursor down
    SettingsCursorNext,
    /// Move the field cursor up
    SettingsCursorPrev,
    /// Activate the focused field (edit text, toggle, or cycle choice)
    SettingsActivate,
    /// Append a character while editing a text field
    SettingsCharInput(char),
    /// Delete the last character while editing
    SettingsBackspace,
    /// Commit the edit buffer into the focused field
    SettingsCommitEdit,
    /// Discard the edit buffer
    SettingsCancelEdit,
    /// Cycle the focused choice field (+1 / -1)
    SettingsCycleChoice(isize),
    /// Save the active section (or retry after a failure)
    SettingsSave,
    /// Reset the active section to its saved baseline
    SettingsReset,
    /// Save all dirty sections, then leave to the pending page
    SettingsSaveAndClose,
    /// Discard all dirty sections, then leave to the pending page
    SettingsDiscardAndClose,
    /// A section save finished (sent by the save task)
    SettingsSaveFinished {
        section: SectionId,
        result: Result<(), String>,
    },
    /// The success hold elapsed for a section (sent by the hold task)
    SettingsSaveExpired { section: SectionId, epoch: u64 },
}
