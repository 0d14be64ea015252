//! Standalone parameter store that plays the plugin host's role.
//!
//! [`HostParamStore`] keeps one lock-free atomic per delay parameter and
//! implements [`ParamBridge`], so the editor writes into it exactly as it
//! would into a plugin host. Writes that do not come from the editor
//! (preset loads, "reset all") set a per-parameter dirty bit; the app
//! drains those bits every frame and forwards the values to
//! [`DelayEditor::parameter_changed`](dlay_gui_core::DelayEditor::parameter_changed).
//!
//! ```text
//! editor ── edit_parameter / set_parameter_value ──► values[i], journal
//! preset ── set_from_host ──────────────────────────► values[i], dirty |= 1<<i
//! app    ◄─ take_dirty() ──────────────────────────── dirty.swap(0)
//! ```

use dlay_config::Preset;
use dlay_core::{DelayParam, PARAM_COUNT};
use dlay_gui_core::{ParamBridge, ParamIndex};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU8, AtomicU32, AtomicU64, Ordering};

/// Oldest journal entries are dropped beyond this many.
const JOURNAL_CAPACITY: usize = 1024;

/// One editor call as received by the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditEvent {
    /// `edit_parameter(index, true)`
    Begin(DelayParam),
    /// `set_parameter_value(index, value)`, value after clamping
    Set(DelayParam, f32),
    /// `edit_parameter(index, false)`
    End(DelayParam),
}

/// Thread-safe parameter store for the standalone editor.
pub struct HostParamStore {
    /// f32 bits, one per parameter, in index order.
    values: [AtomicU32; PARAM_COUNT],
    /// Bit `i` set while an edit transaction on parameter `i` is open.
    open_edits: AtomicU8,
    /// Bit `i` set when parameter `i` changed outside the editor.
    dirty: AtomicU8,
    /// Number of values the editor has pushed.
    edit_count: AtomicU64,
    journal: Mutex<Vec<EditEvent>>,
}

const fn bit(param: DelayParam) -> u8 {
    1 << param.index()
}

impl HostParamStore {
    /// A store holding every parameter's default.
    pub fn new() -> Self {
        Self {
            values: DelayParam::ALL.map(|p| AtomicU32::new(p.descriptor().default.to_bits())),
            open_edits: AtomicU8::new(0),
            dirty: AtomicU8::new(0),
            edit_count: AtomicU64::new(0),
            journal: Mutex::new(Vec::new()),
        }
    }

    /// Current value of a parameter.
    pub fn get(&self, param: DelayParam) -> f32 {
        f32::from_bits(self.values[param.index() as usize].load(Ordering::Acquire))
    }

    /// All current values in index order.
    pub fn snapshot(&self) -> [(DelayParam, f32); PARAM_COUNT] {
        DelayParam::ALL.map(|p| (p, self.get(p)))
    }

    /// Write a value from outside the editor (automation, presets).
    ///
    /// The value is clamped and the parameter marked dirty so the editor is
    /// notified on the next frame.
    pub fn set_from_host(&self, param: DelayParam, value: f32) {
        self.store(param, value);
        self.dirty.fetch_or(bit(param), Ordering::AcqRel);
    }

    /// Apply every parameter of a preset (unset ones take their default).
    pub fn load_preset(&self, preset: &Preset) {
        for (param, value) in preset.param_values() {
            self.set_from_host(param, value);
        }
        tracing::info!(preset = %preset.name, "preset loaded");
    }

    /// Restore every parameter to its default.
    pub fn reset_all(&self) {
        for param in DelayParam::ALL {
            self.set_from_host(param, param.descriptor().default);
        }
        tracing::info!("all parameters reset");
    }

    /// Capture the current values as a preset.
    pub fn to_preset(&self, name: &str, description: Option<&str>) -> Preset {
        let preset = Preset::from_values(name, self.snapshot());
        match description {
            Some(desc) => preset.with_description(desc),
            None => preset,
        }
    }

    /// Drain the parameters changed outside the editor since the last call.
    pub fn take_dirty(&self) -> Vec<(DelayParam, f32)> {
        let dirty = self.dirty.swap(0, Ordering::AcqRel);
        DelayParam::ALL
            .into_iter()
            .filter(|&p| dirty & bit(p) != 0)
            .map(|p| (p, self.get(p)))
            .collect()
    }

    /// Whether an edit transaction on `param` is open.
    pub fn is_editing(&self, param: DelayParam) -> bool {
        self.open_edits.load(Ordering::Acquire) & bit(param) != 0
    }

    /// Parameters with an open edit transaction.
    pub fn editing(&self) -> Vec<DelayParam> {
        DelayParam::ALL
            .into_iter()
            .filter(|&p| self.is_editing(p))
            .collect()
    }

    /// Number of values the editor has pushed since construction.
    pub fn edit_count(&self) -> u64 {
        self.edit_count.load(Ordering::Acquire)
    }

    /// Copy of the recorded editor calls, oldest first.
    pub fn journal(&self) -> Vec<EditEvent> {
        self.journal.lock().clone()
    }

    fn store(&self, param: DelayParam, value: f32) -> f32 {
        let clamped = param.descriptor().clamp(value);
        self.values[param.index() as usize].store(clamped.to_bits(), Ordering::Release);
        clamped
    }

    fn record(&self, event: EditEvent) {
        let mut journal = self.journal.lock();
        if journal.len() >= JOURNAL_CAPACITY {
            journal.drain(..JOURNAL_CAPACITY / 2);
        }
        journal.push(event);
    }
}

impl Default for HostParamStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamBridge for HostParamStore {
    fn edit_parameter(&self, index: ParamIndex, begin: bool) {
        let Some(param) = index.param() else {
            tracing::debug!(%index, "edit on unknown parameter ignored");
            return;
        };
        if begin {
            let prev = self.open_edits.fetch_or(bit(param), Ordering::AcqRel);
            if prev & bit(param) != 0 {
                tracing::warn!(param = ?param, "edit begun twice without end");
            }
            self.record(EditEvent::Begin(param));
        } else {
            self.open_edits.fetch_and(!bit(param), Ordering::AcqRel);
            self.record(EditEvent::End(param));
        }
    }

    fn set_parameter_value(&self, index: ParamIndex, value: f32) {
        let Some(param) = index.param() else {
            tracing::debug!(%index, value, "value for unknown parameter ignored");
            return;
        };
        if !self.is_editing(param) {
            tracing::warn!(param = ?param, value, "value set outside an edit transaction");
        }
        let clamped = self.store(param, value);
        self.edit_count.fetch_add(1, Ordering::AcqRel);
        self.record(EditEvent::Set(param, clamped));
    }
}
