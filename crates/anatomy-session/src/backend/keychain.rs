use super::{FileBackend, PersistedSession, SessionBackend, decode, encode};
use crate::error::SessionError;

const KEYRING_USER: &str = "session";

/// Snapshot stored in the OS keychain under service = storage key.
///
/// Every operation falls back to the wrapped [`FileBackend`] when the keychain
/// is unavailable, so a headless box still keeps its session.
#[derive(Debug, Clone)]
pub struct KeyringBackend {
    service: String,
    fallback: FileBackend,
}

impl KeyringBackend {
    #[must_use]
    pub fn new(storage_key: &str, fallback: FileBackend) -> Self {
        Self {
            service: storage_key.to_string(),
            fallback,
        }
    }

    /// Read back through a fresh entry. Platforms without a native store hand
    /// out a per-entry mock that forgets the value once the entry is dropped.
    fn holds(&self, raw: &str) -> bool {
        self.entry()
            .and_then(|entry| {
                entry
                    .get_password()
                    .map_err(|e| SessionError::Keyring(e.to_string()))
            })
            .is_ok_and(|stored| stored == raw)
    }

    fn entry(&self) -> Result<keyring::Entry, SessionError> {
        keyring::Entry::new(&self.service, KEYRING_USER)
            .map_err(|e| SessionError::Keyring(e.to_string()))
    }
}

impl SessionBackend for KeyringBackend {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        match self.entry().map(|entry| entry.get_password()) {
            Ok(Ok(raw)) => decode(&raw),
            Ok(Err(keyring::Error::NoEntry)) => self.fallback.load(),
            Ok(Err(error)) => {
                tracing::warn!(%error, "keyring read failed; falling back to file");
                self.fallback.load()
            }
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.fallback.load()
            }
        }
    }

    fn save(&self, snapshot: &PersistedSession) -> Result<(), SessionError> {
        let raw = encode(snapshot)?;
        match self.entry().map(|entry| entry.set_password(&raw)) {
            Ok(Ok(())) if self.holds(&raw) => Ok(()),
            Ok(Ok(())) => {
                tracing::warn!("keyring did not retain the session; falling back to file");
                self.fallback.save(snapshot)
            }
            Ok(Err(error)) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.fallback.save(snapshot)
            }
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.fallback.save(snapshot)
            }
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        if let Ok(entry) = self.entry() {
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(error) => tracing::debug!(%error, "keyring delete failed"),
            }
        }
        self.fallback.clear()
    }

    fn kind(&self) -> &'static str {
        "keyring"
    }
}
