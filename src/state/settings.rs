use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{
    DEFAULT_OVERSCAN_COLUMNS, DEFAULT_SCALE, DEFAULT_SCALE_SPLIT_COUNT, DEFAULT_SCALE_WIDTH,
    DEFAULT_START_LEFT, MIN_SCALE_COUNT,
};
use crate::core::{MarkerBucketing, ScaleConfig};
use crate::error::{ScaleConfigError, SettingsError};

/// Environment variable naming a settings file for the desktop binary.
pub const SETTINGS_PATH_ENV: &str = "TIMELINE_RULER_SETTINGS";

/// Host-facing ruler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerSettings {
    /// Time units per major column
    pub scale: f64,
    /// Pixel width of a major column
    pub scale_width: f64,
    /// Minor ticks per major column (0 disables them)
    pub scale_split_count: u32,
    /// Gutter width before time 0
    pub start_left: f64,
    /// Major columns currently rendered
    pub scale_count: u32,
    /// Addressable major columns; `None` is unbounded
    pub max_scale_count: Option<u32>,
    /// Suppress cursor placement on click
    pub hide_cursor: bool,
    pub overscan_columns: usize,
    pub marker_bucketing: MarkerBucketing,
}

impl Default for RulerSettings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            scale_width: DEFAULT_SCALE_WIDTH,
            scale_split_count: DEFAULT_SCALE_SPLIT_COUNT,
            start_left: DEFAULT_START_LEFT,
            scale_count: MIN_SCALE_COUNT,
            max_scale_count: None,
            hide_cursor: false,
            overscan_columns: DEFAULT_OVERSCAN_COLUMNS,
            marker_bucketing: MarkerBucketing::Exact,
        }
    }
}

impl RulerSettings {
    /// Validated scale configuration.
    pub fn scale_config(&self) -> Result<ScaleConfig, ScaleConfigError> {
        ScaleConfig::new(self.scale, self.scale_width, self.scale_split_count, self.start_left)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings: RulerSettings = serde_json::from_str(&json)?;
        settings.scale_config()?;
        Ok(settings)
    }

    /// Write settings as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Settings from `TIMELINE_RULER_SETTINGS`, falling back to defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_PATH_ENV) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::load(path) {
            Ok(settings) => {
                info!(path = %path.display(), "loaded ruler settings");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load ruler settings, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = RulerSettings::default();
        let config = settings.scale_config().unwrap();
        assert_eq!(config.scale_width, 160.0);
        assert_eq!(config.scale_split_count, 10);
        assert_eq!(config.start_left, 20.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: RulerSettings =
            serde_json::from_str(r#"{ "scale_width": 200.0, "marker_bucketing": "minor_tick" }"#).unwrap();
        assert_eq!(settings.scale_width, 200.0);
        assert_eq!(settings.scale, 1.0);
        assert_eq!(settings.marker_bucketing, MarkerBucketing::MinorTick);
        assert_eq!(settings.max_scale_count, None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ruler.json");
        let settings = RulerSettings {
            scale_split_count: 4,
            max_scale_count: Some(60),
            hide_cursor: true,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(RulerSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_rejects_invalid_scale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ruler.json");
        std::fs::write(&path, r#"{ "scale": 0.0 }"#).unwrap();
        assert!(matches!(
            RulerSettings::load(&path),
            Err(SettingsError::Scale(ScaleConfigError::InvalidScale(_)))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RulerSettings::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
