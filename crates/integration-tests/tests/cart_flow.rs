//! Cart behavior: every mutation returns a full recomputed snapshot and
//! the local store replaces its copy wholesale.

use greenbasket_client::{ApiClient, CartStore, MemoryStorage, SessionStore};
use greenbasket_core::{LoginRequest, ProductId};
use greenbasket_integration_tests::{StubApi, TEST_EMAIL, TEST_PASSWORD, test_config};
use rust_decimal::Decimal;

async fn signed_in_client(stub: &StubApi) -> ApiClient {
    let config = test_config(stub);
    let session = SessionStore::new(MemoryStorage::new());
    let api = ApiClient::new(&config, session.clone());
    let auth = api
        .login(&LoginRequest {
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .expect("login succeeds");
    session.set_auth(auth.user, &auth.token);
    api
}

#[tokio::test]
async fn add_update_remove_clear_round_trip() {
    let stub = StubApi::spawn().await;
    stub.with_state(|state| {
        state.seed_product(42, "Milk", Decimal::new(249, 2), Decimal::new(30, 0));
        state.seed_product(7, "Eggs", Decimal::new(350, 2), Decimal::new(12, 0));
    });
    let api = signed_in_client(&stub).await;
    let cart = CartStore::new();

    // Empty before anything was added
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total_price(), Decimal::ZERO);

    let snapshot = api
        .add_cart_item(ProductId::new(42), Decimal::new(2, 0))
        .await
        .expect("add succeeds");
    cart.set(snapshot);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total_price(), Decimal::new(498, 2));

    let snapshot = api
        .add_cart_item(ProductId::new(7), Decimal::ONE)
        .await
        .expect("second add succeeds");
    cart.set(snapshot);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total_price(), Decimal::new(848, 2));

    // Updating a line replaces its quantity, not adds to it
    let snapshot = api
        .update_cart_item(ProductId::new(42), Decimal::ONE)
        .await
        .expect("update succeeds");
    cart.set(snapshot);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total_price(), Decimal::new(599, 2));

    let snapshot = api
        .remove_cart_item(ProductId::new(7))
        .await
        .expect("remove succeeds");
    cart.set(snapshot);
    assert_eq!(cart.item_count(), 1);

    // Clearing yields an empty snapshot; the store holds no stale lines
    let snapshot = api.clear_cart().await.expect("clear succeeds");
    cart.set(snapshot);
    let stored = cart.snapshot().expect("snapshot present");
    assert!(stored.items.is_empty());
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total_price(), Decimal::ZERO);
}

#[tokio::test]
async fn adding_the_same_product_twice_merges_server_side() {
    let stub = StubApi::spawn().await;
    stub.with_state(|state| {
        state.seed_product(42, "Milk", Decimal::new(249, 2), Decimal::new(30, 0));
    });
    let api = signed_in_client(&stub).await;

    api.add_cart_item(ProductId::new(42), Decimal::ONE)
        .await
        .expect("first add");
    let snapshot = api
        .add_cart_item(ProductId::new(42), Decimal::ONE)
        .await
        .expect("second add");

    // One line, quantity two; the snapshot is authoritative
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.item_count, 2);
}

#[tokio::test]
async fn rejected_add_leaves_the_cart_untouched() {
    let stub = StubApi::spawn().await;
    stub.with_state(|state| {
        state.seed_product(42, "Milk", Decimal::new(249, 2), Decimal::new(30, 0));
        state.seed_product(9, "Saffron", Decimal::new(1999, 2), Decimal::ZERO);
        state.rejected_products.insert(ProductId::new(9));
    });
    let api = signed_in_client(&stub).await;
    let cart = CartStore::new();

    let snapshot = api
        .add_cart_item(ProductId::new(42), Decimal::ONE)
        .await
        .expect("in-stock add succeeds");
    cart.set(snapshot);

    let err = api
        .add_cart_item(ProductId::new(9), Decimal::ONE)
        .await
        .expect_err("out-of-stock add fails");
    assert_eq!(err.user_message("add failed"), "Product out of stock");

    // The failure produced no snapshot; the store still shows one line
    assert_eq!(cart.item_count(), 1);
    let server_side = api.cart().await.expect("cart loads");
    assert_eq!(server_side.items.len(), 1);
}
