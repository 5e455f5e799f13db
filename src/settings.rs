//! Game settings and preferences
//!
//! Read from JSON supplied by the host page or a file on native. Settings are
//! never written back; there is no persisted state.

use serde::{Deserialize, Serialize};

use crate::consts::HOP_DELAY_MS;
use crate::error::SettingsError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How long a hop animates before it lands (ms)
    pub hop_delay_ms: u32,
    /// Skip hop animations entirely
    pub reduced_motion: bool,
    /// Show the "collect every fly" hint while playing
    pub show_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hop_delay_ms: HOP_DELAY_MS,
            reduced_motion: false,
            show_hints: true,
        }
    }
}

impl Settings {
    /// Effective hop delay (respects reduced_motion)
    pub fn effective_hop_delay_ms(&self) -> u32 {
        if self.reduced_motion {
            0
        } else {
            self.hop_delay_ms
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
