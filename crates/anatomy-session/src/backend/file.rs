use std::fs;
use std::path::{Path, PathBuf};

use super::{PersistedSession, SessionBackend, decode, encode};
use crate::error::SessionError;

/// JSON snapshot at `<dir>/<storage_key>.json`.
///
/// On Unix the directory is created 0700 and the file written 0600, since the
/// snapshot carries the user's email and role.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, storage_key: &str) -> Self {
        Self {
            path: dir.into().join(format!("{storage_key}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionBackend for FileBackend {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            SessionError::Storage(format!("read {}: {e}", self.path.display()))
        })?;
        decode(&raw)
    }

    fn save(&self, snapshot: &PersistedSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SessionError::Storage(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        fs::write(&self.path, encode(snapshot)?).map_err(|e| {
            SessionError::Storage(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                SessionError::Storage(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                SessionError::Storage(format!("delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SessionState;

    #[test]
    fn path_is_key_dot_json_under_dir() {
        let backend = FileBackend::new("/tmp/anatomy", "anatomy-explorer-auth");
        assert!(backend.path().ends_with("anatomy/anatomy-explorer-auth.json"));
    }

    #[test]
    fn store_load_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let backend = FileBackend::new(tmp.path().join("nested"), "auth");

        assert!(backend.load().expect("load").is_none());

        let snapshot = PersistedSession::new(SessionState {
            identity: None,
            is_admin: true,
        });
        backend.save(&snapshot).expect("save");
        assert_eq!(backend.load().expect("load"), Some(snapshot));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(backend.path())
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "snapshot file should be 0600");
        }

        backend.clear().expect("clear");
        assert!(!backend.path().exists());
        assert!(backend.load().expect("load").is_none());
    }

    #[test]
    fn clear_without_file_is_ok() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let backend = FileBackend::new(tmp.path(), "auth");
        assert!(backend.clear().is_ok());
    }

    #[test]
    fn whitespace_only_file_loads_as_none() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let backend = FileBackend::new(tmp.path(), "auth");
        std::fs::write(backend.path(), "   \n  ").expect("write");
        assert!(backend.load().expect("load").is_none());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let backend = FileBackend::new(tmp.path(), "auth");
        std::fs::write(backend.path(), "{\"state\": 42").expect("write");
        assert!(matches!(backend.load(), Err(SessionError::Corrupt(_))));
    }
}
