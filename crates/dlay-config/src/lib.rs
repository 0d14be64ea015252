//! Preset management for the DLAY delay.
//!
//! # Features
//!
//! - **Preset files**: load and save parameter sets as TOML
//! - **Factory presets**: built-in starting points, always available
//! - **Validation**: reject unknown keys and out-of-range values
//! - **Paths**: platform-specific user preset directory (`std` feature)
//!
//! # Example
//!
//! ```rust,no_run
//! use dlay_config::{Preset, user_presets_dir};
//! use dlay_core::DelayParam;
//!
//! let preset = Preset::new("Long Dub")
//!     .with_description("Dark, long repeats")
//!     .with_param(DelayParam::Time, 900.0)
//!     .with_param(DelayParam::Feedback, 75.0);
//!
//! let path = user_presets_dir().join("long_dub.toml");
//! preset.save(&path).unwrap();
//! ```

mod error;
mod preset;

/// Platform-specific paths for user presets.
#[cfg(feature = "std")]
pub mod paths;

/// Preset parameter validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset, factory_preset_names, factory_presets,
    get_factory_preset, is_factory_preset,
};
#[cfg(feature = "std")]
pub use paths::{
    ensure_user_presets_dir, find_preset, find_preset_in, list_presets_in_dir,
    list_user_presets, preset_name_from_path, user_presets_dir,
};
pub use preset::Preset;
pub use validation::{ValidationError, ValidationResult, validate_param, validate_preset};
