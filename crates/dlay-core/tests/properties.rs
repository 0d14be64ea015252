//! Property-based tests for the delay parameter table.
//!
//! Checks that clamping, normalization, and sync-ratio lookup stay inside
//! the documented ranges for arbitrary host-supplied values.

use dlay_core::{DelayParam, SYNC_RATIO_COUNT, SyncRatio};
use proptest::prelude::*;

fn any_param() -> impl Strategy<Value = DelayParam> {
    (0usize..DelayParam::ALL.len()).prop_map(|i| DelayParam::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Any finite value clamps into the descriptor's range.
    #[test]
    fn clamp_stays_in_range(param in any_param(), value in -1.0e6f32..1.0e6f32) {
        let desc = param.descriptor();
        let clamped = desc.clamp(value);
        prop_assert!(clamped >= desc.min && clamped <= desc.max,
            "{} clamped {} to {}", desc.name, value, clamped);
        if desc.is_stepped() {
            prop_assert_eq!(clamped, clamped.round());
        }
    }

    /// Normalized positions always denormalize back into range.
    #[test]
    fn denormalize_stays_in_range(param in any_param(), n in -0.5f32..1.5f32) {
        let desc = param.descriptor();
        let plain = desc.denormalize(n);
        prop_assert!(plain >= desc.min && plain <= desc.max);
        let back = desc.normalize(plain);
        prop_assert!((0.0..=1.0).contains(&back));
    }

    /// Continuous parameters survive a normalize/denormalize pass.
    #[test]
    fn continuous_roundtrip(value in 50.0f32..5000.0f32) {
        let desc = DelayParam::Time.descriptor();
        let rt = desc.denormalize(desc.normalize(value));
        prop_assert!((rt - value).abs() / value < 1e-3, "{} -> {}", value, rt);
    }

    /// Any float value maps onto a valid table entry with a positive ratio.
    #[test]
    fn sync_ratio_from_any_value(value in proptest::num::f32::ANY) {
        let ratio = SyncRatio::from_value(value);
        prop_assert!(ratio.index() < SYNC_RATIO_COUNT);
        prop_assert!(ratio.ratio() > 0.0);
    }

    /// Synced delay time scales inversely with tempo.
    #[test]
    fn sync_ms_inverse_to_tempo(index in 0usize..SYNC_RATIO_COUNT, bpm in 20.0f32..300.0f32) {
        let ratio = SyncRatio::new(index);
        let ms = ratio.to_ms(bpm);
        let doubled = ratio.to_ms(bpm * 2.0);
        prop_assert!((ms - doubled * 2.0).abs() < 0.01);
    }
}
