use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{PersistedSession, SessionBackend, decode, encode};
use crate::error::SessionError;

/// In-process backend. Clones share the same slot, so two stores built from
/// clones of one `MemoryBackend` see each other's writes like two page loads
/// sharing browser storage.
///
/// The snapshot is kept serialized so the JSON path is the same as on disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw content, e.g. a corrupt snapshot.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let backend = Self::new();
        if let Ok(mut slot) = backend.slot.lock() {
            *slot = Some(raw.into());
        }
        backend
    }

    /// Raw stored content, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    /// Number of successful `save` calls across all clones.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, SessionError> {
        self.slot
            .lock()
            .map_err(|_| SessionError::Storage("memory slot poisoned".into()))
    }
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        match self.lock()?.as_deref() {
            Some(raw) => decode(raw),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &PersistedSession) -> Result<(), SessionError> {
        let raw = encode(snapshot)?;
        *self.lock()? = Some(raw);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.lock()? = None;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
