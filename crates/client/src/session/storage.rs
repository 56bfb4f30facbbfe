//! Persistence adapters for the session store.
//!
//! The store's state transitions are pure; durable storage is applied
//! through this adapter after a transition, so the transition logic is
//! unit-testable without touching the filesystem.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use greenbasket_core::User;

/// What survives a restart: the bearer token and the user it belongs to,
/// stored under a fixed namespace until logout or a 401.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    pub user: User,
}

/// Durable client-local storage for the session.
pub trait SessionStorage: Send + Sync {
    /// Load the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unreadable or corrupt.
    fn load(&self) -> io::Result<Option<PersistedSession>>;

    /// Persist the session, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    fn store(&self, session: &PersistedSession) -> io::Result<()>;

    /// Remove the persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be modified.
    fn remove(&self) -> io::Result<()>;
}

/// JSON file storage, the CLI's durable client-local storage.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> io::Result<Option<PersistedSession>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let session = serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(session))
    }

    fn store(&self, session: &PersistedSession) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(session)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, contents)?;

        // The file holds a bearer token; keep it private to the user
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn remove(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: Mutex<Option<PersistedSession>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with a persisted session.
    #[must_use]
    pub fn with_session(session: PersistedSession) -> Self {
        Self {
            state: Mutex::new(Some(session)),
        }
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> io::Result<Option<PersistedSession>> {
        Ok(self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn store(&self, session: &PersistedSession) -> io::Result<()> {
        *self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn remove(&self) -> io::Result<()> {
        *self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenbasket_core::{Role, UserId};

    fn sample_session() -> PersistedSession {
        PersistedSession {
            token: "tok".to_string(),
            user: User {
                id: UserId::new(1),
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                role: Role::User,
            },
        }
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().expect("loadable").is_none());

        storage.store(&sample_session()).expect("storable");
        let loaded = storage.load().expect("loadable").expect("present");
        assert_eq!(loaded.token, "tok");

        storage.remove().expect("removable");
        assert!(storage.load().expect("loadable").is_none());
    }

    #[test]
    fn test_file_storage_missing_file_is_none() {
        let storage = FileStorage::new(PathBuf::from("/nonexistent/greenbasket/session.json"));
        assert!(storage.load().expect("missing file is not an error").is_none());
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = std::env::temp_dir().join(format!("greenbasket-test-{}", std::process::id()));
        let path = dir.join("session.json");
        let storage = FileStorage::new(path.clone());

        storage.store(&sample_session()).expect("storable");
        let loaded = storage.load().expect("loadable").expect("present");
        assert_eq!(loaded.user.email, "a@b.com");

        storage.remove().expect("removable");
        assert!(storage.load().expect("loadable").is_none());
        // Removing again is a no-op
        storage.remove().expect("idempotent remove");

        let _ = std::fs::remove_dir_all(dir);
    }
}
