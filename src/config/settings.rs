//! User settings for farm-tracker
//!
//! Where the farm API lives and how amounts and dates are shown.

use serde::{Deserialize, Serialize};

use super::paths::FarmPaths;
use crate::display::format::ISO_DATE_FORMAT;
use crate::error::FarmError;
use crate::models::BudgetPeriod;
use crate::reports::RECENT_TRANSACTIONS_LIMIT;

/// Default API root of a locally running farm server
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";

/// User settings for farm-tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Root URL of the farm API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Rows in the dashboard's recent transactions table
    #[serde(default = "default_recent_limit")]
    pub recent_transactions_limit: usize,

    /// Period preselected by `budget set`
    #[serde(default)]
    pub budget_period: BudgetPeriod,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    ISO_DATE_FORMAT.to_string()
}

fn default_recent_limit() -> usize {
    RECENT_TRANSACTIONS_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_transactions_limit: default_recent_limit(),
            budget_period: BudgetPeriod::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &FarmPaths) -> Result<Self, FarmError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FarmError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FarmError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FarmPaths) -> Result<(), FarmError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FarmError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FarmError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The API root to use, preferring an explicit override
    pub fn api_url<'a>(&'a self, override_url: Option<&'a str>) -> &'a str {
        override_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(self.api_base_url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:5001/api");
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.recent_transactions_limit, 10);
        assert_eq!(settings.budget_period, BudgetPeriod::Monthly);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FarmPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api_base_url = "https://farm.example/api".into();
        settings.budget_period = BudgetPeriod::Yearly;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FarmPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FarmPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FarmError::Config(_)));
    }

    #[test]
    fn test_api_url_override() {
        let settings = Settings::default();
        assert_eq!(settings.api_url(None), DEFAULT_API_BASE_URL);
        assert_eq!(settings.api_url(Some("")), DEFAULT_API_BASE_URL);
        assert_eq!(settings.api_url(Some("http://10.0.0.2:5001/api")), "http://10.0.0.2:5001/api");
    }
}
