pub mod credential_storage;
pub mod paths;

pub use credential_storage::{CredentialStorage, CredentialStorageError, StoredCredentials};
pub use paths::{PathError, VigilPaths};
