//! Preset file format and operations.

use dlay_core::{DelayParam, PARAM_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

/// A saved set of delay parameter values.
///
/// Parameters are keyed by string ID. Missing keys fall back to the
/// parameter default when the preset is applied; unknown keys are kept on
/// load (so files from newer versions survive a round trip) but ignored.
///
/// # TOML Format
///
/// ```toml
/// name = "Slapback"
/// description = "Short single repeat"
///
/// [params]
/// time = 120.0
/// feedback = 5.0
/// mix = 35.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameter values keyed by string ID.
    #[serde(default)]
    pub params: BTreeMap<String, f32>,
}

impl Preset {
    /// Create a new empty preset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            params: BTreeMap::new(),
        }
    }

    /// Capture a full set of values, e.g. the current host state.
    pub fn from_values(
        name: impl Into<String>,
        values: impl IntoIterator<Item = (DelayParam, f32)>,
    ) -> Self {
        values
            .into_iter()
            .fold(Self::new(name), |preset, (param, value)| {
                preset.with_param(param, value)
            })
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a parameter value.
    pub fn with_param(self, param: DelayParam, value: f32) -> Self {
        self.with_raw_param(param.descriptor().string_id, value)
    }

    /// Set a value under an arbitrary key, without checking it.
    pub fn with_raw_param(mut self, key: impl Into<String>, value: f32) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "preset loaded");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating the parent directory.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Stored value for a parameter, if the preset sets it.
    pub fn get(&self, param: DelayParam) -> Option<f32> {
        let id = param.descriptor().string_id;
        self.params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(id))
            .map(|(_, &value)| value)
    }

    /// The value this preset assigns to a parameter: the stored value
    /// clamped into range, or the default when unset.
    pub fn resolved(&self, param: DelayParam) -> f32 {
        let desc = param.descriptor();
        self.get(param).map_or(desc.default, |v| desc.clamp(v))
    }

    /// Resolved values for every parameter, in index order.
    pub fn param_values(&self) -> [(DelayParam, f32); PARAM_COUNT] {
        DelayParam::ALL.map(|param| (param, self.resolved(param)))
    }

    /// Keys that do not name a delay parameter.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.params
            .keys()
            .map(String::as_str)
            .filter(|key| DelayParam::from_string_id(key).is_none())
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Init")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_from_toml() {
        let toml_str = r#"
name = "Dub"
description = "Long dark repeats"

[params]
feedback = 70.0
mix = 45
time = 750.0
sync = 1.0
sync_ratio = 7.0
"#;
        let preset = Preset::from_toml(toml_str).unwrap();
        assert_eq!(preset.name, "Dub");
        assert_eq!(preset.description.as_deref(), Some("Long dark repeats"));
        assert_eq!(preset.get(DelayParam::Feedback), Some(70.0));
        assert_eq!(preset.get(DelayParam::Mix), Some(45.0));
        assert_eq!(preset.get(DelayParam::Cross), None);
    }

    #[test]
    fn test_missing_params_resolve_to_defaults() {
        let preset = Preset::from_toml(r#"name = "Empty""#).unwrap();
        for (param, value) in preset.param_values() {
            assert_eq!(value, param.descriptor().default, "{param:?}");
        }
    }

    #[test]
    fn test_resolved_values_are_clamped() {
        let preset = Preset::new("hot")
            .with_param(DelayParam::Feedback, 180.0)
            .with_param(DelayParam::Time, 1.0)
            .with_param(DelayParam::SyncRatio, 4.6);
        assert_eq!(preset.resolved(DelayParam::Feedback), 100.0);
        assert_eq!(preset.resolved(DelayParam::Time), 50.0);
        assert_eq!(preset.resolved(DelayParam::SyncRatio), 5.0);
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let preset = Preset::new("caps").with_raw_param("Feedback", 60.0);
        assert_eq!(preset.get(DelayParam::Feedback), Some(60.0));
        assert_eq!(preset.unknown_keys().count(), 0);
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let preset = Preset::new("future").with_raw_param("diffusion", 0.3);
        let back = Preset::from_toml(&preset.to_toml().unwrap()).unwrap();
        assert_eq!(back, preset);
        assert_eq!(back.unknown_keys().collect::<Vec<_>>(), vec!["diffusion"]);
    }

    #[test]
    fn test_from_values_captures_everything() {
        let values = DelayParam::ALL.map(|p| (p, p.descriptor().max));
        let preset = Preset::from_values("max", values);
        assert_eq!(preset.params.len(), PARAM_COUNT);
        assert_eq!(preset.param_values(), values);
    }

    #[test]
    fn test_minimal_toml() {
        let text = Preset::new("Bare").to_toml().unwrap();
        assert!(text.contains("name = \"Bare\""));
        assert!(!text.contains("description"));
    }
}
