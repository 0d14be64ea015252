//! Factory presets bundled with the editor.
//!
//! These are embedded at compile time and always available, so the preset
//! menu is never empty even before the user saves anything.

use crate::{ConfigError, Preset};

/// Names of the factory presets, in menu order.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "init",
    "slapback",
    "ping_pong",
    "tape_echo",
    "dub",
    "synced_quarter",
    "triplet_quarter",
    "ambient_wash",
];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("slapback", SLAPBACK_PRESET),
    ("ping_pong", PING_PONG_PRESET),
    ("tape_echo", TAPE_ECHO_PRESET),
    ("dub", DUB_PRESET),
    ("synced_quarter", SYNCED_QUARTER_PRESET),
    ("triplet_quarter", TRIPLET_QUARTER_PRESET),
    ("ambient_wash", AMBIENT_WASH_PRESET),
];

/// Every parameter at its default.
const INIT_PRESET: &str = r#"
name = "Init"
description = "Default settings"

[params]
cross = 20.0
feedback = 25.0
mix = 50.0
time = 500.0
sync = 0.0
sync_ratio = 6.0
"#;

const SLAPBACK_PRESET: &str = r#"
name = "Slapback"
description = "Single short repeat, rockabilly style"

[params]
cross = 0.0
feedback = 5.0
mix = 35.0
time = 110.0
sync = 0.0
"#;

const PING_PONG_PRESET: &str = r#"
name = "Ping Pong"
description = "Repeats bounce between channels"

[params]
cross = 100.0
feedback = 45.0
mix = 40.0
time = 375.0
sync = 0.0
"#;

const TAPE_ECHO_PRESET: &str = r#"
name = "Tape Echo"
description = "Medium repeats with a little spread"

[params]
cross = 30.0
feedback = 40.0
mix = 35.0
time = 320.0
sync = 0.0
"#;

const DUB_PRESET: &str = r#"
name = "Dub"
description = "Long, nearly self-oscillating repeats"

[params]
cross = 50.0
feedback = 80.0
mix = 50.0
time = 750.0
sync = 0.0
"#;

const SYNCED_QUARTER_PRESET: &str = r#"
name = "Synced Quarter"
description = "One repeat per beat at the host tempo"

[params]
cross = 20.0
feedback = 35.0
mix = 40.0
sync = 1.0
sync_ratio = 6.0
"#;

const TRIPLET_QUARTER_PRESET: &str = r#"
name = "Triplet Quarter"
description = "Three repeats every two beats"

[params]
cross = 25.0
feedback = 40.0
mix = 35.0
sync = 1.0
sync_ratio = 5.0
"#;

const AMBIENT_WASH_PRESET: &str = r#"
name = "Ambient Wash"
description = "Long synced repeats with heavy feedback"

[params]
cross = 70.0
feedback = 85.0
mix = 60.0
sync = 1.0
sync_ratio = 8.0
"#;

/// Get a factory preset by name (case-insensitive).
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    let (_, toml_str) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))?;
    match Preset::from_toml(toml_str) {
        Ok(preset) => Some(preset),
        Err(err) => {
            tracing::warn!(name, %err, "factory preset failed to parse");
            None
        }
    }
}

/// Get a factory preset by name, or [`ConfigError::PresetNotFound`].
pub fn factory_preset(name: &str) -> Result<Preset, ConfigError> {
    get_factory_preset(name).ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))
}

/// All factory presets, in menu order.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESET_NAMES
        .iter()
        .filter_map(|name| get_factory_preset(name))
        .collect()
}

/// Names of all factory presets.
pub fn factory_preset_names() -> &'static [&'static str] {
    FACTORY_PRESET_NAMES
}

/// Check whether a name refers to a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    FACTORY_PRESET_NAMES
        .iter()
        .any(|n| n.eq_ignore_ascii_case(name))
}
