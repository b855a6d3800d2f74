//! Unified path management for vigil client-side state.
//!
//! All durable console state lives under the platform config directory
//! (XDG on Linux, the equivalent on macOS and Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for vigil.
///
/// # Directory Structure
///
/// ```text
/// <config>/vigil/              # e.g. ~/.config/vigil on Linux
/// └── credentials.json         # Bearer token + identity pair
/// ```
pub struct VigilPaths;

impl VigilPaths {
    /// Returns the vigil config directory: `<config>/vigil`.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("vigil"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the credentials file:
    /// `<config>/vigil/credentials.json`.
    pub fn credentials_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("credentials.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_file_under_config_dir() {
        // dirs::config_dir is available on all supported dev platforms.
        let config = VigilPaths::config_dir().unwrap();
        let file = VigilPaths::credentials_file().unwrap();
        assert!(file.starts_with(&config));
        assert_eq!(file.file_name().unwrap(), "credentials.json");
    }
}
