use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use reverbbridge_openal::loader::DEFAULT_CANDIDATES;

/// File probed next to the bridge DLL. Missing file means defaults.
pub const CONFIG_FILE: &str = "reverbbridge.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Native library names probed in order.
    #[serde(default = "default_libraries")]
    pub libraries: Vec<String>,

    /// Preset applied when the caller passes no name.
    #[serde(default = "default_preset")]
    pub default_preset: String,

    /// Multiplier on every preset's slot output gain.
    #[serde(default = "default_slot_gain_scale")]
    pub slot_gain_scale: f32,
}

fn default_libraries() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

fn default_preset() -> String {
    "Generic".to_string()
}

fn default_slot_gain_scale() -> f32 {
    1.0
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            libraries: default_libraries(),
            default_preset: default_preset(),
            slot_gain_scale: default_slot_gain_scale(),
        }
    }
}

impl BridgeConfig {
    /// Reads `path` if it exists; a missing file is not an error, a file
    /// that fails to parse is reported and replaced with defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => match toml::from_str(&s) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!(
                        "config: parse '{}' failed, using defaults: {e}",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
