//! Local copies of the host's parameter values.
//!
//! The editor never reads the host store directly. It keeps a
//! [`ParamShadow`] that is default-initialized to the plugin's documented
//! defaults, overwritten by every host change notification, and edited in
//! place while the user drags a control.

use dlay_core::{DelayParam, SyncRatio, TimeMode};

/// Shadow state for every delay parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamShadow {
    /// Cross-feed between channels, 0–100%.
    pub cross: f32,
    /// Feedback, 0–100%.
    pub feedback: f32,
    /// Dry/wet mix, 0–100%.
    pub mix: f32,
    /// Free-running delay time, 50–5000 ms.
    pub time: f32,
    /// Tempo sync on/off.
    pub sync: bool,
    /// Selected sync ratio.
    pub sync_ratio: SyncRatio,
}

impl ParamShadow {
    /// Shadow state at the plugin's defaults.
    pub fn new() -> Self {
        Self {
            cross: DelayParam::Cross.descriptor().default,
            feedback: DelayParam::Feedback.descriptor().default,
            mix: DelayParam::Mix.descriptor().default,
            time: DelayParam::Time.descriptor().default,
            sync: DelayParam::Sync.descriptor().default >= 0.5,
            sync_ratio: SyncRatio::from_value(DelayParam::SyncRatio.descriptor().default),
        }
    }

    /// Current plain value of a parameter.
    ///
    /// Booleans read as `0.0` / `1.0`, the sync ratio as its table index.
    pub fn get(&self, param: DelayParam) -> f32 {
        match param {
            DelayParam::Cross => self.cross,
            DelayParam::Feedback => self.feedback,
            DelayParam::Mix => self.mix,
            DelayParam::Time => self.time,
            DelayParam::Sync => {
                if self.sync {
                    1.0
                } else {
                    0.0
                }
            }
            DelayParam::SyncRatio => self.sync_ratio.value(),
        }
    }

    /// Overwrite a parameter, clamped to its descriptor's range.
    pub fn set(&mut self, param: DelayParam, value: f32) {
        let value = param.descriptor().clamp(value);
        match param {
            DelayParam::Cross => self.cross = value,
            DelayParam::Feedback => self.feedback = value,
            DelayParam::Mix => self.mix = value,
            DelayParam::Time => self.time = value,
            DelayParam::Sync => self.sync = value >= 0.5,
            DelayParam::SyncRatio => self.sync_ratio = SyncRatio::from_value(value),
        }
    }

    /// Restore a parameter to its documented default.
    pub fn reset(&mut self, param: DelayParam) {
        self.set(param, param.descriptor().default);
    }

    /// Apply a host change notification.
    ///
    /// Returns `true` if `index` names a delay parameter (the caller should
    /// repaint), `false` if the index is unknown and nothing changed.
    ///
    /// ```rust
    /// use dlay_gui_core::ParamShadow;
    ///
    /// let mut shadow = ParamShadow::new();
    /// assert!(shadow.parameter_changed(1, 80.0));
    /// assert_eq!(shadow.feedback, 80.0);
    /// assert!(!shadow.parameter_changed(99, 1.0));
    /// ```
    pub fn parameter_changed(&mut self, index: u32, value: f32) -> bool {
        let Some(param) = DelayParam::from_index(index) else {
            return false;
        };
        self.set(param, value);
        true
    }

    /// How the time control is currently presented.
    pub fn time_mode(&self) -> TimeMode {
        if self.sync {
            TimeMode::Synced
        } else {
            TimeMode::Free
        }
    }

    /// The parameter the time knob currently edits.
    pub fn time_param(&self) -> DelayParam {
        match self.time_mode() {
            TimeMode::Free => DelayParam::Time,
            TimeMode::Synced => DelayParam::SyncRatio,
        }
    }

    /// Effective delay time in milliseconds at the given host tempo.
    pub fn effective_time_ms(&self, bpm: f32) -> f32 {
        match self.time_mode() {
            TimeMode::Free => self.time,
            TimeMode::Synced => self.sync_ratio.to_ms(bpm),
        }
    }

    /// Iterate over `(param, value)` for every parameter.
    pub fn values(&self) -> impl Iterator<Item = (DelayParam, f32)> + '_ {
        DelayParam::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}

impl Default for ParamShadow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_descriptors() {
        let shadow = ParamShadow::new();
        for (param, value) in shadow.values() {
            assert_eq!(value, param.descriptor().default, "{param:?}");
        }
        assert_eq!(shadow.cross, 20.0);
        assert_eq!(shadow.feedback, 25.0);
        assert_eq!(shadow.mix, 50.0);
        assert_eq!(shadow.time, 500.0);
        assert!(!shadow.sync);
        assert_eq!(shadow.sync_ratio, SyncRatio::DEFAULT);
    }

    #[test]
    fn every_index_is_reflected_exactly() {
        let pushes = [(0, 33.0), (1, 71.5), (2, 12.25), (3, 1234.0), (4, 1.0), (5, 9.0)];
        let mut shadow = ParamShadow::new();
        for (index, value) in pushes {
            assert!(shadow.parameter_changed(index, value));
            let param = DelayParam::from_index(index).unwrap();
            assert_eq!(shadow.get(param), value, "{param:?}");
        }
        assert!(shadow.sync);
        assert_eq!(shadow.sync_ratio.index(), 9);
    }

    #[test]
    fn unknown_index_is_noop() {
        let mut shadow = ParamShadow::new();
        let before = shadow;
        assert!(!shadow.parameter_changed(6, 42.0));
        assert!(!shadow.parameter_changed(u32::MAX, 42.0));
        assert_eq!(shadow, before);
    }

    #[test]
    fn host_values_are_clamped() {
        let mut shadow = ParamShadow::new();
        shadow.parameter_changed(3, 10.0);
        assert_eq!(shadow.time, 50.0);
        shadow.parameter_changed(1, 250.0);
        assert_eq!(shadow.feedback, 100.0);
        shadow.parameter_changed(5, 40.0);
        assert_eq!(shadow.sync_ratio.index(), 12);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut shadow = ParamShadow::new();
        shadow.cross = 90.0;
        shadow.feedback = 3.0;
        shadow.mix = 0.0;
        shadow.time = 4000.0;
        shadow.sync_ratio = SyncRatio::new(0);
        for param in DelayParam::ALL {
            shadow.reset(param);
        }
        assert_eq!(shadow, ParamShadow::new());
    }

    #[test]
    fn sync_switches_time_param_only() {
        let mut shadow = ParamShadow::new();
        shadow.cross = 42.0;
        assert_eq!(shadow.time_param(), DelayParam::Time);

        let before = shadow;
        shadow.set(DelayParam::Sync, 1.0);
        assert_eq!(shadow.time_mode(), TimeMode::Synced);
        assert_eq!(shadow.time_param(), DelayParam::SyncRatio);
        assert_eq!(shadow.cross, before.cross);
        assert_eq!(shadow.feedback, before.feedback);
        assert_eq!(shadow.mix, before.mix);
        assert_eq!(shadow.time, before.time);
        assert_eq!(shadow.sync_ratio, before.sync_ratio);
    }

    #[test]
    fn effective_time_follows_mode() {
        let mut shadow = ParamShadow::new();
        shadow.time = 800.0;
        assert_eq!(shadow.effective_time_ms(120.0), 800.0);
        shadow.sync = true;
        shadow.sync_ratio = SyncRatio::new(4);
        assert!((shadow.effective_time_ms(120.0) - 250.0).abs() < 0.01);
    }
}
