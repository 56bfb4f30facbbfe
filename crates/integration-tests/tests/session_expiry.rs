//! 401 teardown: any authentication failure clears the session, removes
//! the persisted token, and fires the session-expired hook exactly once
//! per failing request.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use greenbasket_client::session::storage::{MemoryStorage, PersistedSession, SessionStorage};
use greenbasket_client::{ApiClient, SessionStore};
use greenbasket_core::{Role, User, UserId};
use greenbasket_integration_tests::{StubApi, test_config};

/// Storage handle the test keeps a reference to after handing it to the
/// store, so post-teardown persistence can be inspected.
#[derive(Clone)]
struct SharedStorage(Arc<MemoryStorage>);

impl SessionStorage for SharedStorage {
    fn load(&self) -> io::Result<Option<PersistedSession>> {
        self.0.load()
    }

    fn store(&self, session: &PersistedSession) -> io::Result<()> {
        self.0.store(session)
    }

    fn remove(&self) -> io::Result<()> {
        self.0.remove()
    }
}

fn stale_session() -> PersistedSession {
    PersistedSession {
        token: "stale-token".to_string(),
        user: User {
            id: UserId::new(1),
            name: "Test Shopper".to_string(),
            email: "shopper@example.com".to_string(),
            role: Role::User,
        },
    }
}

#[tokio::test]
async fn expired_token_tears_the_session_down() {
    let stub = StubApi::spawn().await;
    let config = test_config(&stub);

    let storage = SharedStorage(Arc::new(MemoryStorage::with_session(stale_session())));
    let session = SessionStore::load(storage.clone());
    assert!(session.is_authenticated());

    let fired = Arc::new(AtomicUsize::new(0));
    let hook = {
        let fired = Arc::clone(&fired);
        Arc::new(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        })
    };
    let api = ApiClient::with_expired_hook(&config, session.clone(), hook);

    let err = api.cart().await.expect_err("stale token is rejected");
    assert!(err.is_auth());
    assert_eq!(
        err.user_message("Session expired"),
        "Invalid or expired token"
    );

    // In-memory state cleared, persisted token removed, hook fired once
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
    assert!(storage.load().expect("storage readable").is_none());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn each_failing_request_fires_the_hook_once() {
    let stub = StubApi::spawn().await;
    let config = test_config(&stub);

    let session = SessionStore::load(MemoryStorage::with_session(stale_session()));
    let fired = Arc::new(AtomicUsize::new(0));
    let hook = {
        let fired = Arc::clone(&fired);
        Arc::new(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        })
    };
    let api = ApiClient::with_expired_hook(&config, session.clone(), hook);

    // First failure tears the session down. The second request goes out
    // without a token at all and fails the same way.
    api.cart().await.expect_err("first request rejected");
    api.cart().await.expect_err("second request rejected");

    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unauthenticated_request_is_rejected_without_panicking() {
    let stub = StubApi::spawn().await;
    let config = test_config(&stub);

    let session = SessionStore::new(MemoryStorage::new());
    let api = ApiClient::new(&config, session.clone());

    let err = api.cart().await.expect_err("no token, no cart");
    assert!(err.is_auth());
}
