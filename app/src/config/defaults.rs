//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("SERVER_PORT", "8080", "HTTP port of the generator page and API"),
    ("BIND_ADDRESS", "127.0.0.1", "Address the HTTP server listens on"),
    ("FONT_PATH", "", "TTF/OTF font used for card text (empty: system fonts)"),
    ("CAPTURE_SCALE", "2", "Device pixel ratio of captured images (1-4)"),
    ("STATUS_DURATION_SECS", "3", "Seconds before a status message is dismissed (1-30)"),
    ("CLIPBOARD_COMMAND", "", "Command that receives PNG bytes on stdin (empty: autodetect)"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

/// Setting keys in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|&(key, _, _)| key)
}
