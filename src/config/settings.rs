//! User settings for Spendwise
//!
//! Stored as `config.json` in the base directory. Every field has a default so
//! older or partial files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::SpendwisePaths;
use crate::error::SpendwiseError;
use crate::services::filter::DateRange;

/// User settings for Spendwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Budget utilization at which an alert is raised (0.8 = 80%)
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: f64,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date range used when listing transactions without `--range`
    #[serde(default)]
    pub default_date_range: DateRange,
}

fn default_schema_version() -> u32 {
    1
}

fn default_alert_threshold() -> f64 {
    0.8
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            alert_threshold: default_alert_threshold(),
            currency_symbol: default_currency(),
            default_date_range: DateRange::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendwisePaths) -> Result<Self, SpendwiseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SpendwiseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            SpendwiseError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendwisePaths) -> Result<(), SpendwiseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendwiseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendwiseError::Io(format!("Failed to write settings file: {}", e)))
    }

    fn validate(&self) -> Result<(), SpendwiseError> {
        if !(self.alert_threshold > 0.0 && self.alert_threshold.is_finite()) {
            return Err(SpendwiseError::Config(format!(
                "alert_threshold must be a positive number, got {}",
                self.alert_threshold
            )));
        }
        Ok(())
    }
}
