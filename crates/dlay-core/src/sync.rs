//! Tempo-sync ratios for the delay time control.
//!
//! While sync is on, the delay time is a musical ratio of one host beat
//! instead of an absolute millisecond value. The ratio is chosen from a
//! fixed 13-entry table, symmetric around ×1:
//!
//! ```text
//! index:  0    1    2    3    4    5    6   7    8   9   10  11  12
//! ratio: 1/6  1/5  1/4  1/3  1/2  2/3  1   3/2  2   3   4   5   6
//! ```

/// Number of entries in the sync-ratio table.
pub const SYNC_RATIO_COUNT: usize = 13;

/// Display labels for the sync-ratio table, in index order.
pub const SYNC_RATIO_LABELS: [&str; SYNC_RATIO_COUNT] = [
    "1/6x", "1/5x", "1/4x", "1/3x", "1/2x", "2/3x", "1x", "3/2x", "2x", "3x", "4x", "5x", "6x",
];

/// Ratio numerators and denominators, in index order.
const SYNC_RATIOS: [(u8, u8); SYNC_RATIO_COUNT] = [
    (1, 6),
    (1, 5),
    (1, 4),
    (1, 3),
    (1, 2),
    (2, 3),
    (1, 1),
    (3, 2),
    (2, 1),
    (3, 1),
    (4, 1),
    (5, 1),
    (6, 1),
];

/// Index into the sync-ratio table.
///
/// Always holds a valid index; constructors clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyncRatio(u8);

impl SyncRatio {
    /// ×1, one delay repeat per beat.
    pub const DEFAULT: SyncRatio = SyncRatio(6);

    /// Create from a table index, clamping to the last entry.
    pub const fn new(index: usize) -> Self {
        if index >= SYNC_RATIO_COUNT {
            SyncRatio((SYNC_RATIO_COUNT - 1) as u8)
        } else {
            SyncRatio(index as u8)
        }
    }

    /// Create from a parameter value (a float index), rounding to the nearest
    /// entry and clamping into the table. NaN maps to [`SyncRatio::DEFAULT`].
    ///
    /// ```rust
    /// use dlay_core::SyncRatio;
    ///
    /// assert_eq!(SyncRatio::from_value(2.4).index(), 2);
    /// assert_eq!(SyncRatio::from_value(-1.0).index(), 0);
    /// assert_eq!(SyncRatio::from_value(99.0).index(), 12);
    /// ```
    pub fn from_value(value: f32) -> Self {
        if value.is_nan() {
            return Self::DEFAULT;
        }
        let rounded = libm::roundf(value.clamp(0.0, (SYNC_RATIO_COUNT - 1) as f32));
        Self::new(rounded as usize)
    }

    /// Table index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Parameter value for this entry (the index as a float).
    pub const fn value(self) -> f32 {
        self.0 as f32
    }

    /// Ratio of one beat (e.g. `0.25` for 1/4x).
    pub fn ratio(self) -> f32 {
        let (num, den) = SYNC_RATIOS[self.index()];
        f32::from(num) / f32::from(den)
    }

    /// Display label (e.g. `"3/2x"`).
    pub const fn label(self) -> &'static str {
        SYNC_RATIO_LABELS[self.0 as usize]
    }

    /// Delay time in milliseconds at the given tempo.
    ///
    /// One beat lasts `60000 / bpm` ms; the result is that scaled by
    /// [`ratio`](Self::ratio). Tempos below 1 BPM are treated as 1 BPM.
    ///
    /// ```rust
    /// use dlay_core::SyncRatio;
    ///
    /// // 1/2x at 120 BPM = half of a 500 ms beat
    /// assert!((SyncRatio::new(4).to_ms(120.0) - 250.0).abs() < 0.01);
    /// ```
    pub fn to_ms(self, bpm: f32) -> f32 {
        let ms_per_beat = 60000.0 / bpm.max(1.0);
        ms_per_beat * self.ratio()
    }

    /// Iterate over every entry in table order.
    pub fn all() -> impl Iterator<Item = SyncRatio> {
        (0..SYNC_RATIO_COUNT).map(SyncRatio::new)
    }
}

impl Default for SyncRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How the time control is presented.
///
/// Selected solely by the sync flag; there are no other transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeMode {
    /// Continuous millisecond knob.
    #[default]
    Free,
    /// Discrete sync-ratio knob.
    Synced,
}

impl TimeMode {
    /// Mode for a sync parameter value (`>= 0.5` is on).
    pub fn from_sync_value(value: f32) -> Self {
        if value >= 0.5 {
            TimeMode::Synced
        } else {
            TimeMode::Free
        }
    }

    /// Whether the time control shows sync ratios.
    pub const fn is_synced(self) -> bool {
        matches!(self, TimeMode::Synced)
    }
}
