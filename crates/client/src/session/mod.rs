//! Client session state: the authenticated user and their bearer token.
//!
//! [`Session`] holds the pure state and its transitions; [`SessionStore`]
//! wraps it with interior mutability and a [`storage::SessionStorage`]
//! adapter, applying the durable-storage side effect after each
//! transition. The store is an explicit injectable handle - views receive
//! a clone rather than reaching for a global.
//!
//! State transitions are exactly two: unauthenticated to authenticated via
//! [`SessionStore::set_auth`], and back via [`SessionStore::logout`] or
//! the 401 teardown in the API client.

pub mod storage;

use std::sync::{Arc, PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};

use greenbasket_core::{Role, User};

use storage::{PersistedSession, SessionStorage};

/// Pure session state. `is_authenticated` is derived: true iff both the
/// user and the token are present.
#[derive(Default)]
pub struct Session {
    user: Option<User>,
    token: Option<SecretString>,
}

impl Session {
    /// Store both fields. The token is opaque; no shape validation.
    pub fn set_auth(&mut self, user: User, token: SecretString) {
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Clear both fields.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// True iff the current user's role is `admin`; false with no user.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Shared handle over the session state and its persistence adapter.
///
/// Cheaply cloneable via `Arc`; mutations are serialized by the inner
/// lock, matching the single-writer model of user-triggered actions.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    state: RwLock<Session>,
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) store over the given storage.
    #[must_use]
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                state: RwLock::new(Session::default()),
                storage: Box::new(storage),
            }),
        }
    }

    /// Create a store and restore any persisted session into memory.
    ///
    /// This is the startup path: both the user and the token come back
    /// from durable storage, so a reload resumes the previous session
    /// without a profile re-fetch.
    #[must_use]
    pub fn load(storage: impl SessionStorage + 'static) -> Self {
        let store = Self::new(storage);
        match store.inner.storage.load() {
            Ok(Some(persisted)) => {
                store
                    .write()
                    .set_auth(persisted.user, SecretString::from(persisted.token));
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to load persisted session: {e}"),
        }
        store
    }

    /// Store the user and token, then persist them.
    ///
    /// Persistence failures are logged, not propagated: the in-memory
    /// transition has already happened and the session is usable.
    pub fn set_auth(&self, user: User, token: &str) {
        let persisted = PersistedSession {
            token: token.to_string(),
            user: user.clone(),
        };
        self.write().set_auth(user, SecretString::from(token));
        if let Err(e) = self.inner.storage.store(&persisted) {
            tracing::warn!("Failed to persist session: {e}");
        }
    }

    /// Clear the session and remove the persisted token.
    pub fn logout(&self) {
        self.write().clear();
        if let Err(e) = self.inner.storage.remove() {
            tracing::warn!("Failed to remove persisted session: {e}");
        }
    }

    /// Session teardown on an authentication-failure response. Same
    /// effect as [`Self::logout`], logged separately so 401 storms are
    /// visible in traces.
    pub fn force_logout(&self) {
        tracing::debug!("Session torn down after authentication failure");
        self.logout();
    }

    /// Reconcile in-memory state against durable storage.
    ///
    /// - persisted token present and a user in memory: refresh the token
    ///   from storage, leaving the session authenticated;
    /// - no persisted token: force logout;
    /// - persisted token but no user in memory: left unchanged, matching
    ///   the web client's behavior (see DESIGN.md); [`Self::load`] avoids
    ///   this case at startup by restoring the user alongside the token.
    pub fn check_auth(&self) {
        let persisted = match self.inner.storage.load() {
            Ok(persisted) => persisted,
            Err(e) => {
                tracing::warn!("Failed to read persisted session: {e}");
                None
            }
        };

        let mut state = self.write();
        match persisted {
            Some(p) if state.user.is_some() => {
                state.token = Some(SecretString::from(p.token));
            }
            Some(_) => {}
            None => state.clear(),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// True iff the current user's role is `admin`; false with no user.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.read().is_admin()
    }

    /// The current bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.read()
            .token
            .as_ref()
            .map(|t| SecretString::from(t.expose_secret()))
    }

    /// The current user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.read().user.clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Session> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Session> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::storage::MemoryStorage;
    use super::*;
    use greenbasket_core::UserId;

    fn user(role: Role) -> User {
        User {
            id: UserId::new(1),
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_is_authenticated_tracks_both_fields() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(!store.is_authenticated());

        store.set_auth(user(Role::User), "tok");
        assert!(store.is_authenticated());
        assert!(!store.is_admin());

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_logout_removes_persisted_token() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(ArcStorage(Arc::clone(&storage)));

        store.set_auth(user(Role::User), "tok");
        assert!(storage.load().expect("loadable").is_some());

        store.logout();
        assert!(storage.load().expect("loadable").is_none());
    }

    #[test]
    fn test_is_admin_requires_admin_role() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(!store.is_admin());

        store.set_auth(user(Role::Admin), "tok");
        assert!(store.is_admin());
    }

    #[test]
    fn test_load_restores_persisted_session() {
        let storage = Arc::new(MemoryStorage::new());
        let first = SessionStore::new(ArcStorage(Arc::clone(&storage)));
        first.set_auth(user(Role::User), "tok");

        // A fresh store over the same storage resumes the session
        let second = SessionStore::load(ArcStorage(storage));
        assert!(second.is_authenticated());
        assert_eq!(second.current_user().map(|u| u.email).as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_check_auth_without_persisted_token_forces_logout() {
        let store = SessionStore::new(MemoryStorage::new());
        // Authenticate, then drop the persisted copy behind the store's back
        store.set_auth(user(Role::User), "tok");
        store.inner.storage.remove().expect("removable");

        store.check_auth();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_check_auth_leaves_userless_state_unchanged() {
        // Persisted token exists but no user was loaded into memory;
        // reconciliation keeps the session unauthenticated rather than
        // restoring or clearing it.
        let storage = MemoryStorage::with_session(storage::PersistedSession {
            token: "tok".to_string(),
            user: user(Role::User),
        });
        let store = SessionStore::new(storage);

        store.check_auth();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    /// Test helper: share one `MemoryStorage` between two stores.
    struct ArcStorage(Arc<MemoryStorage>);

    impl SessionStorage for ArcStorage {
        fn load(&self) -> std::io::Result<Option<PersistedSession>> {
            self.0.load()
        }

        fn store(&self, session: &PersistedSession) -> std::io::Result<()> {
            self.0.store(session)
        }

        fn remove(&self) -> std::io::Result<()> {
            self.0.remove()
        }
    }
}
