//! Path management for farm-tracker
//!
//! ## Path Resolution Order
//!
//! 1. `FARM_TRACKER_HOME` environment variable (if set)
//! 2. Unix: `$XDG_CONFIG_HOME/farm-tracker` or `~/.config/farm-tracker`
//! 3. Otherwise the platform config directory from `directories`

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::FarmError;

/// Environment variable that overrides the base directory
pub const HOME_ENV: &str = "FARM_TRACKER_HOME";

const APP_DIR: &str = "farm-tracker";

/// Manages all paths used by farm-tracker
#[derive(Debug, Clone)]
pub struct FarmPaths {
    base_dir: PathBuf,
}

impl FarmPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn new() -> Result<Self, FarmError> {
        let base_dir = match std::env::var_os(HOME_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FarmPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the saved API session
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Default directory for CSV exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), FarmError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FarmError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| FarmError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, FarmError> {
    if cfg!(not(windows)) {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(xdg).join(APP_DIR));
        }
        if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(home).join(".config").join(APP_DIR));
        }
    }

    ProjectDirs::from("", "", APP_DIR)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FarmError::Config("Could not determine a config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FarmPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.session_file(), temp_dir.path().join("session.json"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var(HOME_ENV, temp_dir.path());
        let paths = FarmPaths::new().unwrap();
        std::env::remove_var(HOME_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FarmPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.export_dir().exists());
    }
}
