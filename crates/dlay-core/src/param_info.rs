//! Parameter descriptors shared by the editor, the host store, and presets.
//!
//! A [`ParamDescriptor`] carries everything needed to display, clamp, and
//! normalize one parameter:
//!
//! - [`ParamId`]: stable numeric ID for automation and preset persistence
//! - [`ParamScale`]: normalization curve (linear or logarithmic)
//! - [`ParamFlags`]: capability flags for hosts (automatable, stepped)
//! - `string_id`: human-readable stable ID used as the preset key
//!
//! # Normalization
//!
//! Knob widgets work in normalized \[0.0, 1.0\] space. The descriptor maps
//! between plain values (ms, %, table index) and that space:
//!
//! ```rust
//! use dlay_core::DelayParam;
//!
//! let time = DelayParam::Time.descriptor();
//! // Logarithmic taper: the knob midpoint is the geometric mean of 50 and 5000.
//! assert!((time.denormalize(0.5) - 500.0).abs() < 0.01);
//! ```

use alloc::format;
use alloc::string::String;

use crate::sync::SyncRatio;

/// Scaling curve for parameter normalization.
///
/// - **Linear**: `normalized = (value - min) / (max - min)`
/// - **Logarithmic**: `normalized = ln(value/min) / ln(max/min)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamScale {
    /// Linear mapping (default). Equal resolution across the range.
    #[default]
    Linear,
    /// Logarithmic mapping. More resolution at low values.
    /// Requires `min > 0.0`.
    Logarithmic,
}

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter.
/// The delay's parameters live at 1100–1105.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// ```rust
/// use dlay_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::STEPPED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps (toggle, enumeration index).
    pub const STEPPED: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Describes a single parameter's metadata for display and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Delay Time").
    pub name: &'static str,

    /// Short label drawn under the knob (e.g., "Time").
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Value restored by double-click reset and used at construction.
    pub default: f32,

    /// Recommended increment; `1.0` for stepped parameters.
    pub step: f32,

    /// Stable numeric ID for host automation and preset persistence.
    pub id: ParamId,

    /// Human-readable stable ID, used as the key in preset files.
    pub string_id: &'static str,

    /// Normalization curve.
    pub scale: ParamScale,

    /// Capability flags.
    pub flags: ParamFlags,

    /// Number of tick marks drawn around the knob (0 = none).
    pub ticks: u8,
}

impl ParamDescriptor {
    /// Percentage parameter (0–100%) with a custom default.
    pub const fn percent(name: &'static str, short_name: &'static str, default: f32) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Percent,
            min: 0.0,
            max: 100.0,
            default,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
            ticks: 11,
        }
    }

    /// Time parameter in milliseconds with a logarithmic taper.
    pub const fn time_ms(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Milliseconds,
            min,
            max,
            default,
            step: 10.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Logarithmic,
            flags: ParamFlags::AUTOMATABLE,
            ticks: 21,
        }
    }

    /// On/off parameter stored as `0.0` / `1.0`.
    pub const fn toggle(name: &'static str, short_name: &'static str, default: bool) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Toggle,
            min: 0.0,
            max: 1.0,
            default: if default { 1.0 } else { 0.0 },
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
            ticks: 0,
        }
    }

    /// Enumerated parameter stored as a float index `0.0..=(count - 1)`.
    pub const fn stepped(
        name: &'static str,
        short_name: &'static str,
        unit: ParamUnit,
        count: u8,
        default_index: u8,
    ) -> Self {
        Self {
            name,
            short_name,
            unit,
            min: 0.0,
            max: (count - 1) as f32,
            default: default_index as f32,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
            ticks: count,
        }
    }

    /// Sets the stable parameter ID and string ID. Call after a factory method.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Whether the parameter only takes whole-step values.
    #[inline]
    pub const fn is_stepped(&self) -> bool {
        self.flags.contains(ParamFlags::STEPPED)
    }

    /// Clamps a value to this parameter's valid range, snapping stepped
    /// parameters to the nearest whole step.
    ///
    /// NaN maps to the default.
    ///
    /// ```rust
    /// use dlay_core::DelayParam;
    ///
    /// let mix = DelayParam::Mix.descriptor();
    /// assert_eq!(mix.clamp(-10.0), 0.0);
    /// assert_eq!(mix.clamp(150.0), 100.0);
    ///
    /// let ratio = DelayParam::SyncRatio.descriptor();
    /// assert_eq!(ratio.clamp(3.4), 3.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.is_stepped() {
            libm::roundf(clamped)
        } else {
            clamped
        }
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let normalized = match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
        };
        normalized.clamp(0.0, 1.0)
    }

    /// Converts a normalized value (0.0 to 1.0) to the plain parameter range.
    ///
    /// Inverse of [`normalize`](Self::normalize). Stepped parameters are
    /// snapped to the nearest whole step.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let n = normalized.clamp(0.0, 1.0);
        let plain = match self.scale {
            ParamScale::Linear => self.min + n * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, n)
            }
        };
        self.clamp(plain)
    }

    /// Formats a plain value for display under a knob.
    ///
    /// ```rust
    /// use dlay_core::DelayParam;
    ///
    /// assert_eq!(DelayParam::Time.descriptor().format_value(500.0), "500ms");
    /// assert_eq!(DelayParam::Feedback.descriptor().format_value(25.0), "25%");
    /// assert_eq!(DelayParam::Sync.descriptor().format_value(1.0), "On");
    /// assert_eq!(DelayParam::SyncRatio.descriptor().format_value(2.0), "1/4x");
    /// ```
    pub fn format_value(&self, value: f32) -> String {
        match self.unit {
            ParamUnit::Milliseconds => format!("{value:.0}ms"),
            ParamUnit::Percent => format!("{value:.0}%"),
            ParamUnit::Toggle => String::from(if value >= 0.5 { "On" } else { "Off" }),
            ParamUnit::Ratio => String::from(SyncRatio::from_value(value).label()),
        }
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Milliseconds: the free-running delay time.
    Milliseconds,

    /// Percentage (0–100): cross-feed, feedback, mix.
    Percent,

    /// Boolean stored as 0 / 1: tempo sync.
    Toggle,

    /// Index into the sync-ratio table.
    Ratio,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Milliseconds => "ms",
            ParamUnit::Percent => "%",
            ParamUnit::Ratio => "x",
            ParamUnit::Toggle => "",
        }
    }
}
