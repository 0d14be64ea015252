//! The delay's parameter table.
//!
//! Indices are the wire contract with the host: the host's change
//! notifications and the editor's edit transactions both address parameters
//! by these positions. Anything outside `0..PARAM_COUNT` is not a delay
//! parameter and is ignored by every consumer.

use crate::param_info::{ParamDescriptor, ParamId, ParamUnit};
use crate::sync::{SYNC_RATIO_COUNT, SyncRatio};

/// Number of parameters the delay exposes.
pub const PARAM_COUNT: usize = 6;

/// One of the delay's host-visible parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayParam {
    /// Fraction of signal fed between the left and right delay lines (0–100%).
    Cross,
    /// Fraction of delayed signal re-injected into the delay line (0–100%).
    Feedback,
    /// Dry/wet blend (0–100%).
    Mix,
    /// Free-running delay time (50–5000 ms).
    Time,
    /// Tempo sync on/off.
    Sync,
    /// Index into the sync-ratio table, used while sync is on.
    SyncRatio,
}

impl DelayParam {
    /// All parameters in index order.
    pub const ALL: [DelayParam; PARAM_COUNT] = [
        DelayParam::Cross,
        DelayParam::Feedback,
        DelayParam::Mix,
        DelayParam::Time,
        DelayParam::Sync,
        DelayParam::SyncRatio,
    ];

    /// Look up a parameter by its host index.
    ///
    /// Returns `None` for indices outside the table.
    ///
    /// ```rust
    /// use dlay_core::DelayParam;
    ///
    /// assert_eq!(DelayParam::from_index(3), Some(DelayParam::Time));
    /// assert_eq!(DelayParam::from_index(42), None);
    /// ```
    pub const fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(DelayParam::Cross),
            1 => Some(DelayParam::Feedback),
            2 => Some(DelayParam::Mix),
            3 => Some(DelayParam::Time),
            4 => Some(DelayParam::Sync),
            5 => Some(DelayParam::SyncRatio),
            _ => None,
        }
    }

    /// Host index of this parameter.
    pub const fn index(self) -> u32 {
        match self {
            DelayParam::Cross => 0,
            DelayParam::Feedback => 1,
            DelayParam::Mix => 2,
            DelayParam::Time => 3,
            DelayParam::Sync => 4,
            DelayParam::SyncRatio => 5,
        }
    }

    /// Look up a parameter by its stable [`ParamId`].
    pub fn from_id(id: ParamId) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.descriptor().id == id)
    }

    /// Look up a parameter by its preset key (e.g. `"feedback"`).
    ///
    /// Matching is case-insensitive.
    pub fn from_string_id(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.descriptor().string_id.eq_ignore_ascii_case(key))
    }

    /// Descriptor with range, default, unit, and stable IDs.
    pub const fn descriptor(self) -> ParamDescriptor {
        match self {
            DelayParam::Cross => {
                ParamDescriptor::percent("Cross", "Cross", 20.0).with_id(ParamId(1100), "cross")
            }
            DelayParam::Feedback => ParamDescriptor::percent("Feedback", "Feedback", 25.0)
                .with_id(ParamId(1101), "feedback"),
            DelayParam::Mix => {
                ParamDescriptor::percent("Mix", "Mix", 50.0).with_id(ParamId(1102), "mix")
            }
            DelayParam::Time => {
                ParamDescriptor::time_ms("Delay Time", "Time", 50.0, 5000.0, 500.0)
                    .with_id(ParamId(1103), "time")
            }
            DelayParam::Sync => {
                ParamDescriptor::toggle("Tempo Sync", "Sync", false).with_id(ParamId(1104), "sync")
            }
            DelayParam::SyncRatio => ParamDescriptor::stepped(
                "Sync Ratio",
                "Time",
                ParamUnit::Ratio,
                SYNC_RATIO_COUNT as u8,
                SyncRatio::DEFAULT.index() as u8,
            )
            .with_id(ParamId(1105), "sync_ratio"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip_covers_table() {
        for (i, param) in DelayParam::ALL.iter().enumerate() {
            assert_eq!(param.index() as usize, i);
            assert_eq!(DelayParam::from_index(i as u32), Some(*param));
        }
        assert_eq!(DelayParam::from_index(PARAM_COUNT as u32), None);
        assert_eq!(DelayParam::from_index(u32::MAX), None);
    }

    #[test]
    fn documented_defaults() {
        assert_eq!(DelayParam::Cross.descriptor().default, 20.0);
        assert_eq!(DelayParam::Feedback.descriptor().default, 25.0);
        assert_eq!(DelayParam::Mix.descriptor().default, 50.0);
        assert_eq!(DelayParam::Time.descriptor().default, 500.0);
        assert_eq!(DelayParam::Sync.descriptor().default, 0.0);
        assert_eq!(DelayParam::SyncRatio.descriptor().default, 6.0);
    }

    #[test]
    fn documented_ranges() {
        let time = DelayParam::Time.descriptor();
        assert_eq!((time.min, time.max), (50.0, 5000.0));
        for p in [DelayParam::Cross, DelayParam::Feedback, DelayParam::Mix] {
            let d = p.descriptor();
            assert_eq!((d.min, d.max), (0.0, 100.0), "{}", d.name);
        }
        let ratio = DelayParam::SyncRatio.descriptor();
        assert_eq!((ratio.min, ratio.max), (0.0, 12.0));
    }

    #[test]
    fn ids_are_unique_and_resolvable() {
        for param in DelayParam::ALL {
            let desc = param.descriptor();
            assert_eq!(DelayParam::from_id(desc.id), Some(param));
            assert_eq!(DelayParam::from_string_id(desc.string_id), Some(param));
        }
        assert_eq!(DelayParam::from_id(ParamId(999)), None);
        assert_eq!(DelayParam::from_string_id("FEEDBACK"), Some(DelayParam::Feedback));
        assert_eq!(DelayParam::from_string_id("wobble"), None);
    }
}
