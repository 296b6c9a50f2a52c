//! Settings field catalog.
//!
//! Builds the list of configurable fields per section, used by both the
//! settings handlers (for editing and validation) and the settings panel
//! widget (for rendering).

use super::{FieldValue, SectionId};

/// Static description of a single settings field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field id within its section, e.g. "username"
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub default: FieldValue,
    /// (value, display label) pairs; empty for non-choice fields
    pub options: &'static [(&'static str, &'static str)],
    /// Error message when a choice value is not one of `options`
    pub invalid_message: &'static str,
}

impl FieldSpec {
    fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            description: "",
            default: FieldValue::Toggle(false),
            options: &[],
            invalid_message: "",
        }
    }

    fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    fn default(mut self, default: FieldValue) -> Self {
        self.default = default;
        self
    }

    fn options(mut self, options: &'static [(&'static str, &'static str)]) -> Self {
        self.options = options;
        self
    }

    fn invalid_message(mut self, message: &'static str) -> Self {
        self.invalid_message = message;
        self
    }

    /// Whether this field is restricted to a fixed option list
    pub fn is_choice(&self) -> bool {
        !self.options.is_empty()
    }

    /// Display label for a choice value, if it is a known option
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, label)| *label)
    }

    /// Position of a choice value within the option list
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|(v, _)| *v == value)
    }
}

/// Generate the field list for a section, with defaults
pub fn fields(section: SectionId) -> Vec<FieldSpec> {
    match section {
        SectionId::Account => vec![
            FieldSpec::new("username", "Username")
                .description("Your display name across SafeDrome")
                .default(FieldValue::Text("User".to_string())),
            FieldSpec::new("email", "Email Address")
                .description("Used for sign-in and account recovery")
                .default(FieldValue::Text("user@safedrome.com".to_string())),
            FieldSpec::new("notifications", "Enable Notifications")
                .description("Receive real-time updates and security alerts")
                .default(FieldValue::Toggle(true)),
            FieldSpec::new("auto_save", "Auto-save Changes")
                .description("Automatically persist modifications every 5 minutes")
                .default(FieldValue::Toggle(true)),
        ],
        SectionId::Appearance => vec![
            FieldSpec::new("theme", "Visual Theme")
                .default(FieldValue::Choice("dark".to_string()))
                .options(&[("light", "Light"), ("dark", "Dark"), ("system", "System")])
                .invalid_message("Invalid theme selection"),
            FieldSpec::new("font_size", "Font Size")
                .default(FieldValue::Choice("medium".to_string()))
                .options(&[
                    ("small", "Small (12px)"),
                    ("medium", "Medium (14px)"),
                    ("large", "Large (16px)"),
                ])
                .invalid_message("Invalid font size"),
            FieldSpec::new("density", "Interface Density")
                .default(FieldValue::Choice("comfortable".to_string()))
                .options(&[
                    ("compact", "Compact"),
                    ("comfortable", "Comfortable"),
                    ("spacious", "Spacious"),
                ])
                .invalid_message("Invalid density setting"),
            FieldSpec::new("show_grid_lines", "Show Grid Lines")
                .description("Display grid lines in file listings")
                .default(FieldValue::Toggle(true)),
        ],
        SectionId::Storage => vec![
            FieldSpec::new("auto_backup", "Auto Backup")
                .description("Back up your files on a schedule")
                .default(FieldValue::Toggle(true)),
            FieldSpec::new("backup_interval", "Backup Frequency")
                .description("How often automatic backups run")
                .default(FieldValue::Choice("daily".to_string()))
                .options(&[("hourly", "Hourly"), ("daily", "Daily"), ("weekly", "Weekly")])
                .invalid_message("Invalid backup interval"),
            FieldSpec::new("max_file_size", "Maximum File Size")
                .description("Largest single file accepted for upload")
                .default(FieldValue::Choice("100MB".to_string()))
                .options(&[
                    ("50MB", "50 MB"),
                    ("100MB", "100 MB"),
                    ("500MB", "500 MB"),
                    ("1GB", "1 GB"),
                ])
                .invalid_message("Invalid file size limit"),
            FieldSpec::new("compression", "Enable Compression")
                .description("Compress stored files to save space")
                .default(FieldValue::Toggle(true)),
        ],
    }
}

/// Look up a single field spec by id
pub fn field_spec(section: SectionId, field: &str) -> Option<FieldSpec> {
    fields(section).into_iter().find(|spec| spec.id == field)
}
