//! Host parameter store interface.
//!
//! [`ParamBridge`] is the editor's only way to change a parameter. It mirrors
//! the host's edit-transaction API: an edit is opened with
//! `edit_parameter(index, true)`, followed by any number of
//! `set_parameter_value` calls, and closed with `edit_parameter(index, false)`.
//! Hosts use the open/close pair to group automation and undo.
//!
//! ```text
//! Knob drag ──► edit_parameter(i, true)
//!          ──► set_parameter_value(i, v) ×N
//!          ──► edit_parameter(i, false)
//!                         │
//!                 ┌───────┴───────┐
//!                 │ HostParamStore │  (standalone)
//!                 │ plugin wrapper │
//!                 └───────┬───────┘
//!                         │
//! Editor ◄── DelayEditor::parameter_changed(i, v)  (automation, presets)
//! ```
//!
//! Pushes are fire-and-forget: the bridge never reports back, and the
//! editor's shadow copy is only overwritten by host notifications.

use core::fmt;
use dlay_core::DelayParam;

/// Type-safe host parameter index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamIndex(pub u32);

impl ParamIndex {
    /// The delay parameter at this index, if any.
    pub const fn param(self) -> Option<DelayParam> {
        DelayParam::from_index(self.0)
    }
}

impl fmt::Display for ParamIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParamIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<DelayParam> for ParamIndex {
    fn from(p: DelayParam) -> Self {
        Self(p.index())
    }
}

/// Trait for pushing editor changes into the host's parameter store.
///
/// Implementations must be thread-safe; a plugin host may read the store from
/// its audio thread while the editor writes from the UI thread.
pub trait ParamBridge: Send + Sync {
    /// Open (`begin = true`) or close (`begin = false`) an edit transaction.
    ///
    /// Out-of-range indices are silently ignored.
    fn edit_parameter(&self, index: ParamIndex, begin: bool);

    /// Push a new plain value for a parameter.
    ///
    /// Out-of-range indices are silently ignored. Values are clamped to the
    /// parameter's range by the implementation.
    fn set_parameter_value(&self, index: ParamIndex, value: f32);
}
