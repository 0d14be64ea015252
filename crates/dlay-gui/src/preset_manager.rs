//! Preset menu model: factory presets followed by the user's files.

use crate::host_store::HostParamStore;
use dlay_config::{ConfigError, Preset, factory_presets, list_presets_in_dir, user_presets_dir};
use std::path::{Path, PathBuf};

/// Where a preset came from.
#[derive(Debug, Clone, PartialEq)]
pub enum PresetSource {
    /// Built-in factory preset.
    Factory,
    /// User preset loaded from disk.
    User(PathBuf),
}

/// One entry of the preset menu.
#[derive(Debug, Clone)]
pub struct PresetEntry {
    /// The preset data.
    pub preset: Preset,
    /// Where it came from.
    pub source: PresetSource,
}

impl PresetEntry {
    /// Check if this is a factory preset.
    pub fn is_factory(&self) -> bool {
        matches!(self.source, PresetSource::Factory)
    }

    /// Get the file path if this is a user preset.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            PresetSource::User(p) => Some(p),
            PresetSource::Factory => None,
        }
    }
}

/// Loads, selects, saves, and deletes presets against a [`HostParamStore`].
pub struct PresetManager {
    presets: Vec<PresetEntry>,
    current: Option<usize>,
    modified: bool,
    user_dir: PathBuf,
}

impl PresetManager {
    /// Manager over the platform user presets directory.
    pub fn new() -> Self {
        Self::with_user_dir(user_presets_dir())
    }

    /// Manager over a specific user presets directory.
    pub fn with_user_dir(user_dir: impl Into<PathBuf>) -> Self {
        let mut manager = Self {
            presets: Vec::new(),
            current: None,
            modified: false,
            user_dir: user_dir.into(),
        };
        manager.load_all();
        manager
    }

    fn load_all(&mut self) {
        self.presets = factory_presets()
            .into_iter()
            .map(|preset| PresetEntry {
                preset,
                source: PresetSource::Factory,
            })
            .collect();

        for path in list_presets_in_dir(&self.user_dir) {
            match Preset::load(&path) {
                Ok(preset) => self.presets.push(PresetEntry {
                    preset,
                    source: PresetSource::User(path),
                }),
                Err(err) => tracing::warn!(path = %path.display(), %err, "skipping user preset"),
            }
        }
        tracing::debug!(count = self.presets.len(), "presets loaded");
    }

    /// All presets, factory first.
    pub fn presets(&self) -> &[PresetEntry] {
        &self.presets
    }

    /// The selected preset, if any.
    pub fn current(&self) -> Option<&PresetEntry> {
        self.current.and_then(|i| self.presets.get(i))
    }

    /// Index of the selected preset.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Find a preset by name (case-insensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.presets
            .iter()
            .position(|e| e.preset.name.eq_ignore_ascii_case(name))
    }

    /// Select a preset and push its values into the store.
    ///
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, store: &HostParamStore) {
        if let Some(entry) = self.presets.get(index) {
            store.load_preset(&entry.preset);
            self.current = Some(index);
            self.modified = false;
        }
    }

    /// Mark the current preset as modified.
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Whether the values differ from the selected preset.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Save the store's values as a new user preset and select it.
    ///
    /// The file name is the lowercased name with every character other than
    /// letters, digits and `-` replaced by `_`. Names without a letter or
    /// digit are rejected.
    pub fn save_as(
        &mut self,
        name: &str,
        description: Option<&str>,
        store: &HostParamStore,
    ) -> Result<PathBuf, ConfigError> {
        let invalid = || ConfigError::InvalidPresetName(name.to_string());
        let stem = preset_file_stem(name).ok_or_else(invalid)?;
        let path = self.user_dir.join(format!("{stem}.toml"));
        if path.parent() != Some(self.user_dir.as_path()) {
            return Err(invalid());
        }

        let preset = store.to_preset(name.trim(), description);
        preset.save(&path)?;
        tracing::info!(path = %path.display(), "preset saved");

        if let Some(i) = self
            .presets
            .iter()
            .position(|e| e.path() == Some(path.as_path()))
        {
            self.presets[i].preset = preset;
            self.current = Some(i);
        } else {
            self.presets.push(PresetEntry {
                preset,
                source: PresetSource::User(path.clone()),
            });
            self.current = Some(self.presets.len() - 1);
        }
        self.modified = false;
        Ok(path)
    }

    /// Overwrite the selected user preset with the store's values.
    pub fn save_current(&mut self, store: &HostParamStore) -> Result<(), ConfigError> {
        let Some(entry) = self.current.and_then(|i| self.presets.get_mut(i)) else {
            return Err(ConfigError::PresetNotFound("<none selected>".to_string()));
        };
        let PresetSource::User(path) = &entry.source else {
            return Err(ConfigError::ReadOnly(entry.preset.name.clone()));
        };
        let preset = store.to_preset(&entry.preset.name, entry.preset.description.as_deref());
        preset.save(path)?;
        entry.preset = preset;
        self.modified = false;
        Ok(())
    }

    /// Delete a user preset file and remove it from the list.
    pub fn delete(&mut self, index: usize) -> Result<(), ConfigError> {
        let entry = self
            .presets
            .get(index)
            .ok_or_else(|| ConfigError::PresetNotFound(format!("#{index}")))?;
        let PresetSource::User(path) = &entry.source else {
            return Err(ConfigError::ReadOnly(entry.preset.name.clone()));
        };
        std::fs::remove_file(path).map_err(|e| ConfigError::remove_file(path, e))?;

        self.presets.remove(index);
        self.current = match self.current {
            Some(c) if c == index => None,
            Some(c) if c > index => Some(c - 1),
            other => other,
        };
        Ok(())
    }

    /// Re-read all presets, keeping the selection by name if possible.
    pub fn reload(&mut self) {
        let name = self.current().map(|e| e.preset.name.clone());
        self.load_all();
        self.current = name.and_then(|n| self.position(&n));
    }
}

/// File stem for a preset name, or `None` if nothing usable is left.
fn preset_file_stem(name: &str) -> Option<String> {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    stem.chars().any(char::is_alphanumeric).then_some(stem)
}

impl Default for PresetManager {
    fn default() -> Self {
        Self::new()
    }
}
