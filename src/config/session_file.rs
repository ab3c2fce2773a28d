//! Saved API session
//!
//! The farm API identifies a signed-in user by its session cookie. Keeping
//! the cookie between runs lets each `farmtrack` invocation act as the same
//! user until `logout`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::paths::FarmPaths;
use crate::error::FarmError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// API root the cookie belongs to
    pub api_base_url: String,
    /// `Cookie` header value
    pub cookie: String,
    /// Username at the time of login
    #[serde(default)]
    pub username: Option<String>,
}

impl StoredSession {
    /// Load the saved session, `None` if there is none
    pub fn load(paths: &FarmPaths) -> Result<Option<Self>, FarmError> {
        let path = paths.session_file();
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| FarmError::Io(format!("Failed to read session file: {}", e)))?;
        let session = serde_json::from_str(&contents)
            .map_err(|e| FarmError::Config(format!("Failed to parse session file: {}", e)))?;
        Ok(Some(session))
    }

    pub fn save(&self, paths: &FarmPaths) -> Result<(), FarmError> {
        paths.ensure_directories()?;
        let path = paths.session_file();
        std::fs::write(&path, serde_json::to_string_pretty(self)?)
            .map_err(|e| FarmError::Io(format!("Failed to write session file: {}", e)))?;
        restrict_permissions(&path)
    }

    /// Forget the saved session; a missing file is not an error
    pub fn clear(paths: &FarmPaths) -> Result<(), FarmError> {
        match std::fs::remove_file(paths.session_file()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FarmError::Io(format!("Failed to remove session file: {}", e))),
        }
    }

    /// Whether this session was issued by the given API root
    pub fn matches(&self, api_base_url: &str) -> bool {
        self.api_base_url.trim_end_matches('/') == api_base_url.trim_end_matches('/')
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), FarmError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| FarmError::Io(format!("Failed to set session file permissions: {}", e)))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), FarmError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session() -> StoredSession {
        StoredSession {
            api_base_url: "http://localhost:5001/api".into(),
            cookie: "session=abc".into(),
            username: Some("meadow".into()),
        }
    }

    #[test]
    fn test_save_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FarmPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(StoredSession::load(&paths).unwrap().is_none());

        session().save(&paths).unwrap();
        assert_eq!(StoredSession::load(&paths).unwrap(), Some(session()));

        StoredSession::clear(&paths).unwrap();
        assert!(StoredSession::load(&paths).unwrap().is_none());
        StoredSession::clear(&paths).unwrap();
    }

    #[test]
    fn test_matches_ignores_trailing_slash() {
        assert!(session().matches("http://localhost:5001/api/"));
        assert!(!session().matches("http://farm.example/api"));
    }
}
