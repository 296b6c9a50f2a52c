//! Preferences persistence.
//!
//! Saved settings sections live in a TOML file at
//! `~/.config/safedrome/settings.toml` (overridable via `--config`). The
//! file is optional: a missing file means defaults, a corrupt file logs a
//! warning and is replaced on the next successful save.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use safedrome_core::prelude::*;

use crate::settings::{field_spec, FieldId, FieldSpec, FieldValue, SectionId, SettingsState};

/// On-disk shape of the preferences file: one table per section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesFile {
    pub account: BTreeMap<String, toml::Value>,
    pub appearance: BTreeMap<String, toml::Value>,
    pub storage: BTreeMap<String, toml::Value>,
}

impl PreferencesFile {
    fn section(&self, id: SectionId) -> &BTreeMap<String, toml::Value> {
        match id {
            SectionId::Account => &self.account,
            SectionId::Appearance => &self.appearance,
            SectionId::Storage => &self.storage,
        }
    }

    fn section_mut(&mut self, id: SectionId) -> &mut BTreeMap<String, toml::Value> {
        match id {
            SectionId::Account => &mut self.account,
            SectionId::Appearance => &mut self.appearance,
            SectionId::Storage => &mut self.storage,
        }
    }
}

/// Default preferences path under the user config directory
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("safedrome").join("settings.toml"))
}

/// Load the preferences file. A missing file yields defaults.
pub fn load(path: &Path) -> Result<PreferencesFile> {
    if !path.exists() {
        return Ok(PreferencesFile::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Reading preferences file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Parsing preferences file {}", path.display()))
}

/// Apply persisted preferences on top of the built-in defaults.
///
/// Values with an unknown field id or the wrong type are skipped with a
/// warning; everything else becomes the new saved baseline (not dirty).
pub fn apply(prefs: &PreferencesFile, settings: &mut SettingsState) {
    for section in SectionId::ALL {
        for (key, raw) in prefs.section(section) {
            let Some(spec) = field_spec(section, key) else {
                warn!(
                    "Ignoring preference: {}",
                    Error::unknown_field(section.key(), key)
                );
                continue;
            };
            match field_value_from_toml(&spec, raw) {
                Some(value) => {
                    settings.restore_field(section, key, value);
                }
                None => {
                    warn!(
                        "Ignoring preference: {}",
                        Error::config(format!("wrong type for {}.{}", section.key(), key))
                    );
                }
            }
        }
    }
}

/// Write one section's values into the preferences file, keeping the others.
pub fn persist_section(
    path: &Path,
    section: SectionId,
    values: &[(FieldId, FieldValue)],
) -> Result<()> {
    let mut prefs = match load(path) {
        Ok(prefs) => prefs,
        Err(err) => {
            warn!("Preferences file unreadable, rewriting: {err}");
            PreferencesFile::default()
        }
    };

    let table = prefs.section_mut(section);
    table.clear();
    for (id, value) in values {
        table.insert((*id).to_string(), toml_from_field(value));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Creating preferences directory {}", parent.display()))?;
    }
    let text = toml::to_string_pretty(&prefs).context("Serializing preferences")?;
    std::fs::write(path, text)
        .with_context(|| format!("Writing preferences file {}", path.display()))?;
    info!("Persisted settings section '{}'", section.key());
    Ok(())
}

fn toml_from_field(value: &FieldValue) -> toml::Value {
    match value {
        FieldValue::Text(s) | FieldValue::Choice(s) => toml::Value::String(s.clone()),
        FieldValue::Toggle(b) => toml::Value::Boolean(*b),
    }
}

/// Interpret a raw TOML value according to the field's catalog type
fn field_value_from_toml(spec: &FieldSpec, raw: &toml::Value) -> Option<FieldValue> {
    match (&spec.default, raw) {
        (FieldValue::Text(_), toml::Value::String(s)) => Some(FieldValue::Text(s.clone())),
        (FieldValue::Choice(_), toml::Value::String(s)) => Some(FieldValue::Choice(s.clone())),
        (FieldValue::Toggle(_), toml::Value::Boolean(b)) => Some(FieldValue::Toggle(*b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let prefs = load(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(prefs, PreferencesFile::default());
    }

    #[test]
    fn test_persist_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let values = vec![
            ("theme", FieldValue::Choice("light".to_string())),
            ("show_grid_lines", FieldValue::Toggle(false)),
        ];
        persist_section(&path, SectionId::Appearance, &values).unwrap();

        let prefs = load(&path).unwrap();
        assert_eq!(
            prefs.appearance.get("theme"),
            Some(&toml::Value::String("light".to_string()))
        );
        assert_eq!(
            prefs.appearance.get("show_grid_lines"),
            Some(&toml::Value::Boolean(false))
        );
        assert!(prefs.account.is_empty());
    }

    #[test]
    fn test_persist_keeps_other_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        persist_section(
            &path,
            SectionId::Account,
            &[("username", FieldValue::Text("Ada".to_string()))],
        )
        .unwrap();
        persist_section(
            &path,
            SectionId::Storage,
            &[("compression", FieldValue::Toggle(false))],
        )
        .unwrap();

        let prefs = load(&path).unwrap();
        assert_eq!(
            prefs.account.get("username"),
            Some(&toml::Value::String("Ada".to_string()))
        );
        assert_eq!(
            prefs.storage.get("compression"),
            Some(&toml::Value::Boolean(false))
        );
    }

    #[test]
    fn test_apply_restores_baseline_without_dirty() {
        let mut prefs = PreferencesFile::default();
        prefs
            .account
            .insert("username".to_string(), toml::Value::String("Ada".to_string()));
        prefs
            .appearance
            .insert("theme".to_string(), toml::Value::String("light".to_string()));

        let mut settings = SettingsState::default();
        apply(&prefs, &mut settings);

        assert_eq!(
            settings.account.value("username"),
            Some(&FieldValue::Text("Ada".to_string()))
        );
        assert_eq!(
            settings.appearance.value("theme"),
            Some(&FieldValue::Choice("light".to_string()))
        );
        assert!(!settings.any_dirty());
    }

    #[test]
    fn test_apply_skips_unknown_and_mistyped() {
        let mut prefs = PreferencesFile::default();
        prefs
            .account
            .insert("nickname".to_string(), toml::Value::String("x".to_string()));
        prefs
            .account
            .insert("notifications".to_string(), toml::Value::String("yes".to_string()));

        let mut settings = SettingsState::default();
        apply(&prefs, &mut settings);

        assert_eq!(
            settings.account.value("notifications"),
            Some(&FieldValue::Toggle(true)),
            "mistyped value leaves the default"
        );
    }

    #[test]
    fn test_corrupt_file_errors_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        assert!(matches!(load(&path), Err(Error::TomlParse(_))));

        // ...but persist rewrites it cleanly
        persist_section(
            &path,
            SectionId::Account,
            &[("username", FieldValue::Text("Ada".to_string()))],
        )
        .unwrap();
        assert!(load(&path).is_ok());
    }
}
