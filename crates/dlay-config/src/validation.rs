//! Preset parameter validation.
//!
//! Presets name parameters by string ID (`"feedback"`, `"sync_ratio"`, ...).
//! Validation checks that every key names a delay parameter and that every
//! value lies inside that parameter's range. Loading is lenient and clamps;
//! validation is for tools that want to reject bad files outright.

use crate::Preset;
use dlay_core::DelayParam;
use thiserror::Error;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Key does not name a delay parameter.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// String ID of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Value is NaN or infinite.
    #[error("parameter '{0}' is not a finite number")]
    NotFinite(String),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate one `key = value` entry and resolve the parameter.
///
/// ```rust
/// use dlay_config::validate_param;
/// use dlay_core::DelayParam;
///
/// assert_eq!(validate_param("mix", 40.0), Ok(DelayParam::Mix));
/// assert!(validate_param("mix", 140.0).is_err());
/// assert!(validate_param("drive", 1.0).is_err());
/// ```
pub fn validate_param(key: &str, value: f32) -> ValidationResult<DelayParam> {
    let param = DelayParam::from_string_id(key)
        .ok_or_else(|| ValidationError::UnknownParameter(key.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(key.to_string()));
    }
    let desc = param.descriptor();
    if value < desc.min || value > desc.max {
        return Err(ValidationError::OutOfRange {
            param: desc.string_id.to_string(),
            value,
            min: desc.min,
            max: desc.max,
        });
    }
    Ok(param)
}

/// Validate every entry of a preset.
///
/// Returns the single error directly, or [`ValidationError::Multiple`] when
/// more than one entry fails.
pub fn validate_preset(preset: &Preset) -> ValidationResult<()> {
    let mut errors: Vec<ValidationError> = preset
        .params
        .iter()
        .filter_map(|(key, &value)| validate_param(key, value).err())
        .collect();

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
