//! Durable storage for the session snapshot.
//!
//! The store only ever reads or writes the whole snapshot, so a backend is a
//! single key-value slot addressed by the configured storage key. Shape drift
//! between versions is not migrated; an unreadable snapshot surfaces as
//! `SessionError::Corrupt` and the store treats it as an initialization failure.

mod file;
mod keychain;
mod memory;

pub use file::FileBackend;
pub use keychain::KeyringBackend;
pub use memory::MemoryBackend;

use anatomy_config::{BackendKind, SessionConfig};
use anatomy_core::entities::Identity;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Snapshot envelope version written by this crate.
pub const SNAPSHOT_VERSION: u32 = 0;

/// The part of the store that survives restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub is_admin: bool,
}

/// On-disk envelope around [`SessionState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub state: SessionState,
    #[serde(default)]
    pub version: u32,
}

impl PersistedSession {
    #[must_use]
    pub const fn new(state: SessionState) -> Self {
        Self {
            state,
            version: SNAPSHOT_VERSION,
        }
    }
}

/// Get/set/clear of the serialized session snapshot.
pub trait SessionBackend: Send + Sync {
    /// Read the stored snapshot. `Ok(None)` when nothing has been stored.
    ///
    /// # Errors
    ///
    /// `SessionError::Corrupt` when stored bytes do not parse, or a storage
    /// error when the slot cannot be read.
    fn load(&self) -> Result<Option<PersistedSession>, SessionError>;

    /// Overwrite the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the write fails.
    fn save(&self, snapshot: &PersistedSession) -> Result<(), SessionError>;

    /// Remove the stored snapshot. Clearing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the slot exists but cannot be removed.
    fn clear(&self) -> Result<(), SessionError>;

    /// Short name for status output (`"file"`, `"keyring"`, `"memory"`).
    fn kind(&self) -> &'static str;
}

impl<B: SessionBackend + ?Sized> SessionBackend for Box<B> {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        (**self).load()
    }

    fn save(&self, snapshot: &PersistedSession) -> Result<(), SessionError> {
        (**self).save(snapshot)
    }

    fn clear(&self) -> Result<(), SessionError> {
        (**self).clear()
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

/// Build the backend selected by configuration.
///
/// # Errors
///
/// Returns `SessionError::Storage` when a file-based backend is selected but no
/// state directory can be resolved (no configured dir and no home directory).
pub fn from_config(config: &SessionConfig) -> Result<Box<dyn SessionBackend>, SessionError> {
    match config.backend {
        BackendKind::Memory => Ok(Box::new(MemoryBackend::new())),
        BackendKind::File => Ok(Box::new(file_backend(config)?)),
        BackendKind::Keyring => Ok(Box::new(KeyringBackend::new(
            &config.storage_key,
            file_backend(config)?,
        ))),
    }
}

fn file_backend(config: &SessionConfig) -> Result<FileBackend, SessionError> {
    let dir = config.resolved_state_dir().ok_or_else(|| {
        SessionError::Storage("home directory not found: set session.state_dir".into())
    })?;
    Ok(FileBackend::new(dir, &config.storage_key))
}

fn encode(snapshot: &PersistedSession) -> Result<String, SessionError> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Blank or whitespace-only content counts as "nothing stored".
fn decode(raw: &str) -> Result<Option<PersistedSession>, SessionError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_decodes_to_none() {
        assert!(decode("").unwrap().is_none());
        assert!(decode("  \n ").unwrap().is_none());
    }

    #[test]
    fn garbage_content_is_corrupt() {
        let err = decode("{not json").unwrap_err();
        assert!(matches!(err, SessionError::Corrupt(_)));
    }

    #[test]
    fn envelope_has_state_and_version() {
        let raw = encode(&PersistedSession::new(SessionState::default())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert!(value["state"]["identity"].is_null());
        assert_eq!(value["state"]["is_admin"], false);
    }

    #[test]
    fn missing_version_defaults_to_zero() {
        let raw = r#"{"state":{"identity":null,"is_admin":false}}"#;
        let snapshot = decode(raw).unwrap().unwrap();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    }

    #[test]
    fn memory_kind_from_config() {
        let config = SessionConfig {
            backend: BackendKind::Memory,
            ..Default::default()
        };
        let backend = from_config(&config).unwrap();
        assert_eq!(backend.kind(), "memory");
    }

    #[test]
    fn file_kind_from_config_uses_state_dir() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let config = SessionConfig {
            backend: BackendKind::File,
            state_dir: Some(tmp.path().to_path_buf()),
            ..Default::default()
        };
        let backend = from_config(&config).unwrap();
        assert_eq!(backend.kind(), "file");
        assert!(backend.load().unwrap().is_none());
    }
}
