//! Sign-in flows against the stub API.

use greenbasket_client::{ApiClient, FileStorage, MemoryStorage, SessionStore};
use greenbasket_core::{LoginRequest, RegisterRequest};
use greenbasket_integration_tests::{StubApi, TEST_EMAIL, TEST_PASSWORD, test_config};

#[tokio::test]
async fn login_then_authenticated_request() {
    let stub = StubApi::spawn().await;
    let config = test_config(&stub);
    let session = SessionStore::new(MemoryStorage::new());
    let api = ApiClient::new(&config, session.clone());

    let auth = api
        .login(&LoginRequest {
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .expect("login succeeds");
    session.set_auth(auth.user.clone(), &auth.token);

    assert!(session.is_authenticated());
    assert!(!session.is_admin());

    let me = api.me().await.expect("profile loads with bearer token");
    assert_eq!(me.email, TEST_EMAIL);
}

#[tokio::test]
async fn login_with_bad_password_surfaces_server_message() {
    let stub = StubApi::spawn().await;
    let config = test_config(&stub);
    let session = SessionStore::new(MemoryStorage::new());
    let api = ApiClient::new(&config, session.clone());

    let err = api
        .login(&LoginRequest {
            email: TEST_EMAIL.to_string(),
            password: "wrong".to_string(),
        })
        .await
        .expect_err("login rejected");

    assert!(err.is_auth());
    assert_eq!(err.user_message("Login failed"), "Invalid email or password");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn register_signs_the_new_account_in() {
    let stub = StubApi::spawn().await;
    let config = test_config(&stub);
    let session = SessionStore::new(MemoryStorage::new());
    let api = ApiClient::new(&config, session.clone());

    let auth = api
        .register(&RegisterRequest {
            name: "New Shopper".to_string(),
            email: "new@example.com".to_string(),
            password: "secret2".to_string(),
        })
        .await
        .expect("registration succeeds");
    session.set_auth(auth.user.clone(), &auth.token);

    assert!(session.is_authenticated());
    assert_eq!(session.current_user().expect("user present").name, "New Shopper");
}

#[tokio::test]
async fn session_survives_a_restart_via_the_session_file() {
    let stub = StubApi::spawn().await;
    let config = test_config(&stub);

    let session = SessionStore::load(FileStorage::new(config.session_file.clone()));
    let api = ApiClient::new(&config, session.clone());

    let auth = api
        .login(&LoginRequest {
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .expect("login succeeds");
    session.set_auth(auth.user.clone(), &auth.token);

    // A fresh process restores the same session from disk
    let restored = SessionStore::load(FileStorage::new(config.session_file.clone()));
    assert!(restored.is_authenticated());
    assert_eq!(
        restored.current_user().expect("user restored").email,
        TEST_EMAIL
    );

    // The restored token still authenticates requests
    let api = ApiClient::new(&config, restored.clone());
    api.cart().await.expect("restored session is valid");

    restored.logout();
    let after_logout = SessionStore::load(FileStorage::new(config.session_file.clone()));
    assert!(!after_logout.is_authenticated());
}
