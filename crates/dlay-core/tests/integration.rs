//! Integration tests for the public parameter API.

use dlay_core::{DelayParam, PARAM_COUNT, ParamScale, ParamUnit, SyncRatio, TimeMode};

#[test]
fn table_matches_host_contract() {
    assert_eq!(DelayParam::ALL.len(), PARAM_COUNT);

    let expected = [
        ("cross", ParamUnit::Percent),
        ("feedback", ParamUnit::Percent),
        ("mix", ParamUnit::Percent),
        ("time", ParamUnit::Milliseconds),
        ("sync", ParamUnit::Toggle),
        ("sync_ratio", ParamUnit::Ratio),
    ];
    for (i, (key, unit)) in expected.iter().enumerate() {
        let param = DelayParam::from_index(i as u32).unwrap();
        let desc = param.descriptor();
        assert_eq!(desc.string_id, *key);
        assert_eq!(desc.unit, *unit);
    }
}

#[test]
fn time_knob_uses_log_taper() {
    assert_eq!(DelayParam::Time.descriptor().scale, ParamScale::Logarithmic);
    assert_eq!(DelayParam::Mix.descriptor().scale, ParamScale::Linear);
}

#[test]
fn sync_ratio_default_formats_as_unity() {
    let desc = DelayParam::SyncRatio.descriptor();
    assert_eq!(desc.format_value(desc.default), "1x");
    assert_eq!(SyncRatio::from_value(desc.default), SyncRatio::DEFAULT);
}

#[test]
fn sync_default_is_free_running() {
    let sync = DelayParam::Sync.descriptor();
    assert_eq!(TimeMode::from_sync_value(sync.default), TimeMode::Free);
}

#[test]
fn every_ratio_label_is_formatted() {
    let desc = DelayParam::SyncRatio.descriptor();
    for ratio in SyncRatio::all() {
        assert_eq!(desc.format_value(ratio.value()), ratio.label());
    }
}
