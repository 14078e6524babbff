//! Session settings
//!
//! Loaded from a JSON file on native; the browser build uses defaults and
//! takes its seed from the page. Gameplay constants live in `consts` and are
//! not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; a random one is picked when absent
    pub seed: Option<u64>,

    // === Headless runner ===
    /// Frames to run before exiting
    pub headless_ticks: u64,
    /// Log a summary every N ticks (0 disables)
    pub report_every: u64,
    /// Let the runner steer and shoot on its own
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            headless_ticks: 600,
            report_every: 60,
            autopilot: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Seed to run with, drawing a random one if none was configured
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.headless_ticks, 600);
        assert!(settings.autopilot);
        assert_eq!(settings.resolve_seed(), 7);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(1),
            headless_ticks: 10,
            report_every: 0,
            autopilot: false,
        };
        let parsed = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            Settings::from_json("{ seed"),
            Err(SimError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Settings::load("/nonexistent/zombie-crab.json"),
            Err(SimError::SettingsIo(_))
        ));
    }
}
