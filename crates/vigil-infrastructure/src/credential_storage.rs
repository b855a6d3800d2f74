//! Durable bearer credential storage.
//!
//! Persists the session's token/identity pair across process restarts as a
//! single JSON file, so the two durable entries are written and removed
//! together - both present or both absent, matching the session invariant.

use crate::paths::VigilPaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write as IoWrite;
use std::path::PathBuf;
use vigil_core::VigilError;

/// Errors that can occur during credential storage operations.
#[derive(Debug)]
pub enum CredentialStorageError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing or serialization error.
    ParseError(serde_json::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for CredentialStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            CredentialStorageError::ParseError(e) => write!(f, "JSON error: {}", e),
            CredentialStorageError::ConfigDirNotFound => {
                write!(f, "Could not determine config directory")
            }
        }
    }
}

impl std::error::Error for CredentialStorageError {}

impl From<std::io::Error> for CredentialStorageError {
    fn from(e: std::io::Error) -> Self {
        CredentialStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for CredentialStorageError {
    fn from(e: serde_json::Error) -> Self {
        CredentialStorageError::ParseError(e)
    }
}

impl From<CredentialStorageError> for VigilError {
    fn from(e: CredentialStorageError) -> Self {
        VigilError::DataAccess(e.to_string())
    }
}

/// The stored credential pair.
///
/// Deliberately a single record: partial persistence (token without
/// identity or vice versa) is unrepresentable on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Opaque bearer token.
    pub token: String,
    /// User-identifying string (login email).
    pub identity: String,
}

/// Storage for the credentials file (credentials.json).
///
/// Responsibilities:
/// - Load the token/identity pair at startup (session restore)
/// - Save the pair after a successful login, atomically
/// - Remove the file on logout
///
/// Does NOT:
/// - Validate the token against the server
/// - Handle encryption (plaintext JSON storage)
///
/// # Security Note
///
/// This storage reads and writes plaintext JSON. The credentials file
/// should have appropriate permissions to prevent unauthorized access.
pub struct CredentialStorage {
    path: PathBuf,
}

impl CredentialStorage {
    /// Creates a new CredentialStorage at the default path
    /// (`<config>/vigil/credentials.json`).
    pub fn new() -> Result<Self, CredentialStorageError> {
        let path = VigilPaths::credentials_file()
            .map_err(|_| CredentialStorageError::ConfigDirNotFound)?;
        Ok(Self { path })
    }

    /// Creates a new CredentialStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the stored pair.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(StoredCredentials))`: a pair is persisted
    /// - `Ok(None)`: nothing persisted (fresh install or after logout)
    /// - `Err`: the file exists but could not be read or parsed
    pub fn load(&self) -> Result<Option<StoredCredentials>, CredentialStorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let credentials = serde_json::from_str(&content)?;

        Ok(Some(credentials))
    }

    /// Saves the pair atomically via tmp file + rename, creating the parent
    /// directory if needed.
    pub fn save(&self, credentials: &StoredCredentials) -> Result<(), CredentialStorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(credentials)?;

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Removes the stored pair. Absence is not an error.
    pub fn clear(&self) -> Result<(), CredentialStorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the path to the credentials file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(temp_dir: &TempDir) -> CredentialStorage {
        CredentialStorage::with_path(temp_dir.path().join("credentials.json"))
    }

    #[test]
    fn test_load_nothing_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let credentials = StoredCredentials {
            token: "tok-abc".to_string(),
            identity: "admin@complypilot.com".to_string(),
        };
        storage.save(&credentials).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, credentials);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            CredentialStorage::with_path(temp_dir.path().join("nested/dir/credentials.json"));

        let credentials = StoredCredentials {
            token: "tok".to_string(),
            identity: "user@example.com".to_string(),
        };
        storage.save(&credentials).unwrap();
        assert!(storage.load().unwrap().is_some());
    }

    #[test]
    fn test_clear_removes_pair() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        storage
            .save(&StoredCredentials {
                token: "tok".to_string(),
                identity: "user@example.com".to_string(),
            })
            .unwrap();
        storage.clear().unwrap();

        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        storage.clear().unwrap();
        storage.clear().unwrap();
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        fs::write(storage.path(), "{ not json").unwrap();

        let result = storage.load();
        assert!(matches!(result, Err(CredentialStorageError::ParseError(_))));
    }
}
